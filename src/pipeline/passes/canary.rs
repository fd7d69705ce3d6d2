use super::{ObfuscationPass, PassKind, PassOutcome};
use crate::pipeline::context::PassContext;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Prepends a self-checking integrity block to the text
pub struct CanaryPass;

/// Fresh canary secret: 8 lowercase hex digits
pub fn generate_secret() -> String {
    hex::encode(&Uuid::new_v4().as_bytes()[..4])
}

#[async_trait]
impl ObfuscationPass for CanaryPass {
    fn kind(&self) -> PassKind {
        PassKind::InjectCanary
    }

    async fn execute(&self, source: String, context: &PassContext<'_>) -> Result<PassOutcome> {
        let secret = generate_secret();
        let block = context.profile().render_canary(&secret);

        Ok(PassOutcome::Completed {
            text: format!("{}\n{}", block, source),
            message: format!("Injected anti-tampering for {}", context.language),
        })
    }
}
