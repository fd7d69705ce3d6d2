use super::{ObfuscationPass, PassKind, PassOutcome};
use crate::pipeline::context::PassContext;
use anyhow::Result;
use async_trait::async_trait;

/// Reports the build tool that would package the result; never edits text
pub struct ArtifactPass;

#[async_trait]
impl ObfuscationPass for ArtifactPass {
    fn kind(&self) -> PassKind {
        PassKind::GenerateArtifact
    }

    async fn execute(&self, source: String, context: &PassContext<'_>) -> Result<PassOutcome> {
        let tool = context.registry.build_tool_label(context.language);
        Ok(PassOutcome::Completed {
            text: source,
            message: format!("Generated {} build configuration", tool),
        })
    }
}
