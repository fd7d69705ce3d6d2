use super::{ObfuscationPass, PassKind, PassOutcome};
use crate::pipeline::context::PassContext;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Failure reason when the pass runs without a credential
pub const MISSING_API_KEY: &str = "OpenAI API key not configured";

/// Marks the text as restructured by the language model
///
/// No remote service is contacted. The credential only gates whether the
/// pass succeeds; its value never leaves the configuration.
pub struct MutationPass;

#[async_trait]
impl ObfuscationPass for MutationPass {
    fn kind(&self) -> PassKind {
        PassKind::Mutate
    }

    async fn execute(&self, source: String, context: &PassContext<'_>) -> Result<PassOutcome> {
        if !context.options.has_api_key() {
            debug!(language = %context.language, "Skipping mutation without credential");
            return Ok(PassOutcome::Failed {
                text: source,
                reason: MISSING_API_KEY.to_string(),
            });
        }

        let comment = context.registry.mutation_comment(context.language);
        Ok(PassOutcome::Completed {
            text: format!("{}\n{}", comment, source),
            message: format!("AI restructured code for {}", context.language),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ObfuscationConfig;
    use crate::languages::{LanguageTag, PassRegistry};

    #[tokio::test]
    async fn test_missing_key_fails_without_touching_text() {
        let registry = PassRegistry::with_defaults();
        let options = ObfuscationConfig::new();
        let context = PassContext::new(LanguageTag::Rust, &registry, &options);

        match MutationPass.execute("fn main() {}".to_string(), &context).await.unwrap() {
            PassOutcome::Failed { text, reason } => {
                assert_eq!(text, "fn main() {}");
                assert_eq!(reason, MISSING_API_KEY);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_with_key_prepends_comment() {
        let registry = PassRegistry::with_defaults();
        let options = ObfuscationConfig::new().with_openai_api_key("sk-test");
        let context = PassContext::new(LanguageTag::Python, &registry, &options);

        match MutationPass.execute("x = 1".to_string(), &context).await.unwrap() {
            PassOutcome::Completed { text, message } => {
                assert_eq!(text, "# AI-optimized Python structure\nx = 1");
                assert_eq!(message, "AI restructured code for python");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
