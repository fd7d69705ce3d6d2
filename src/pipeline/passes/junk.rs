use super::{ObfuscationPass, PassKind, PassOutcome};
use crate::pipeline::context::PassContext;
use anyhow::Result;
use async_trait::async_trait;

/// Prepends the language's decoy blocks to the text
pub struct JunkPass;

#[async_trait]
impl ObfuscationPass for JunkPass {
    fn kind(&self) -> PassKind {
        PassKind::InjectJunk
    }

    async fn execute(&self, source: String, context: &PassContext<'_>) -> Result<PassOutcome> {
        let templates = context.registry.junk_templates(context.language);
        let text = format!("{}\n\n{}", templates.join("\n\n"), source);

        Ok(PassOutcome::Completed {
            text,
            message: format!("Injected decoy functions for {}", context.language),
        })
    }
}
