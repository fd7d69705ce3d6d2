use super::config::PipelineConfig;
use super::context::PassContext;
use super::passes::{default_passes, ObfuscationPass, PassOutcome};
use crate::config::ObfuscationConfig;
use crate::languages::{classify, LanguageTag, PassRegistry};
use crate::progress::ProgressReporter;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A pass hit a fault other than a recoverable step failure
    #[error("Obfuscation failed at {step}: {source:#}")]
    StepFailed {
        step: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    pub fn step(&self) -> &'static str {
        match self {
            Self::StepFailed { step, .. } => step,
        }
    }
}

/// Runs the enabled passes over one text, strictly in sequence
///
/// The pipeline holds no per-run state, so one instance can serve any number
/// of concurrent runs.
pub struct ObfuscationPipeline {
    registry: Arc<PassRegistry>,
    config: PipelineConfig,
    passes: Vec<Box<dyn ObfuscationPass>>,
}

impl ObfuscationPipeline {
    pub fn new(registry: Arc<PassRegistry>, config: PipelineConfig) -> Self {
        Self {
            registry,
            config,
            passes: default_passes(),
        }
    }

    /// Built-in languages and the standard pacing
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(PassRegistry::with_defaults()), PipelineConfig::default())
    }

    /// Replace the pass list; passes run in the order given
    pub fn with_passes(mut self, passes: Vec<Box<dyn ObfuscationPass>>) -> Self {
        self.passes = passes;
        self
    }

    pub fn registry(&self) -> &PassRegistry {
        &self.registry
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Classify `file_name` and run every enabled pass over `source`
    pub async fn run(
        &self,
        source: &str,
        options: &ObfuscationConfig,
        file_name: &str,
        reporter: &dyn ProgressReporter,
    ) -> Result<String, PipelineError> {
        let language = classify(file_name);
        debug!(file = file_name, language = %language, "Classified input");
        self.run_as(source, options, language, reporter).await
    }

    /// Run every enabled pass over `source` for an already known language
    pub async fn run_as(
        &self,
        source: &str,
        options: &ObfuscationConfig,
        language: LanguageTag,
        reporter: &dyn ProgressReporter,
    ) -> Result<String, PipelineError> {
        let start = Instant::now();
        let context = PassContext::new(language, &self.registry, options);
        let mut text = source.to_string();

        info!(language = %language, bytes = source.len(), "Starting obfuscation");

        for pass in &self.passes {
            let kind = pass.kind();
            if !kind.is_enabled(options) {
                debug!(step = kind.id(), "Pass disabled, skipping");
                continue;
            }

            reporter.on_start(kind.id(), kind.label());

            let delay = self.config.delay_for(kind);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let pass_start = Instant::now();
            match pass.execute(text, &context).await {
                Ok(PassOutcome::Completed { text: next, message }) => {
                    reporter.on_complete(kind.id(), &message);
                    debug!(step = kind.id(), elapsed = ?pass_start.elapsed(), "Pass complete");
                    text = next;
                }
                Ok(PassOutcome::Failed { text: unchanged, reason }) => {
                    debug!(step = kind.id(), reason = %reason, "Pass failed, continuing");
                    reporter.on_error(kind.id(), &reason);
                    text = unchanged;
                }
                Err(source) => {
                    reporter.on_error(kind.id(), &format!("{:#}", source));
                    return Err(PipelineError::StepFailed {
                        step: kind.id(),
                        source,
                    });
                }
            }
        }

        info!(
            language = %language,
            bytes = text.len(),
            elapsed = ?start.elapsed(),
            "Obfuscation complete"
        );
        Ok(text)
    }
}

impl Default for ObfuscationPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::passes::{PassKind, MISSING_API_KEY};
    use crate::progress::{ProgressEvent, StepLog};
    use crate::pipeline::step::StepStatus;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    fn instant() -> ObfuscationPipeline {
        ObfuscationPipeline::new(Arc::new(PassRegistry::with_defaults()), PipelineConfig::instant())
    }

    #[tokio::test]
    async fn test_nothing_enabled_is_identity() {
        let log = StepLog::new();
        let out = instant()
            .run("const x = data;", &ObfuscationConfig::new(), "app.js", &log)
            .await
            .unwrap();

        assert_eq!(out, "const x = data;");
        assert!(log.events().is_empty());
        assert!(log.steps().is_empty());
    }

    #[tokio::test]
    async fn test_rename_pinned_fixture() {
        let options = ObfuscationConfig {
            variable_renaming: true,
            ..Default::default()
        };
        let out = instant()
            .run("data\ndata\n", &options, "input", &crate::progress::NoOpReporter)
            .await
            .unwrap();
        assert_eq!(out, "_0x0000\n_0x0000\n");
    }

    #[tokio::test]
    async fn test_canary_only_keeps_original_as_suffix() {
        let options = ObfuscationConfig {
            canary_injection: true,
            ..Default::default()
        };
        let source = "print('hello')";
        let log = StepLog::new();
        let out = instant().run(source, &options, "hello.py", &log).await.unwrap();

        assert!(out.ends_with(&format!("\n{}", source)));
        assert!(out.starts_with("# Anti-tampering canary functions"));
        assert_eq!(
            log.events(),
            vec![
                ProgressEvent::Started {
                    step: "canary-inject".into(),
                    label: "Anti-Tampering Canary".into(),
                },
                ProgressEvent::Completed {
                    step: "canary-inject".into(),
                    message: "Injected anti-tampering for python".into(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_mutation_without_key_continues() {
        let options = ObfuscationConfig {
            ai_mutation: true,
            executable_generation: true,
            ..Default::default()
        };
        let log = StepLog::new();
        let out = instant().run("x", &options, "main.rs", &log).await.unwrap();

        assert_eq!(out, "x");
        let mutate = log.step("ai-mutate").unwrap();
        assert_eq!(mutate.status, StepStatus::Error);
        assert_eq!(mutate.message, MISSING_API_KEY);

        let exe = log.step("exe-gen").unwrap();
        assert_eq!(exe.status, StepStatus::Completed);
        assert_eq!(exe.message, "Generated Cargo build configuration");
    }

    #[tokio::test]
    async fn test_mutation_with_key() {
        let options = ObfuscationConfig {
            ai_mutation: true,
            ..Default::default()
        }
        .with_openai_api_key("sk-test");
        let out = instant()
            .run("x = 1", &options, "calc.py", &crate::progress::NoOpReporter)
            .await
            .unwrap();
        assert_eq!(out, "# AI-optimized Python structure\nx = 1");
    }

    #[tokio::test]
    async fn test_exe_gen_only_leaves_text() {
        let options = ObfuscationConfig {
            executable_generation: true,
            ..Default::default()
        };
        let log = StepLog::new();
        let out = instant().run("fn main() {}", &options, "main.go", &log).await.unwrap();

        assert_eq!(out, "fn main() {}");
        assert_eq!(log.events().len(), 2);
        assert_eq!(
            log.step("exe-gen").unwrap().message,
            "Generated Go Build build configuration"
        );
    }

    #[tokio::test]
    async fn test_recommended_run_order_and_shape() {
        let source = "def run(data):\n    return data\n";
        let log = StepLog::new();
        let out = instant()
            .run(source, &ObfuscationConfig::recommended(), "sample.py", &log)
            .await
            .unwrap();

        assert!(out.starts_with("# Anti-tampering canary functions"));
        assert!(out.contains("def _0xdead():"));
        assert!(out.ends_with("def run(_0x0000):\n    return _0x0000\n"));

        let started: Vec<String> = log
            .events()
            .iter()
            .filter(|e| !e.is_terminal())
            .map(|e| e.step().to_string())
            .collect();
        assert_eq!(started, vec!["var-rename", "junk-inject", "canary-inject", "exe-gen"]);
        assert!(!log.has_errors());
    }

    #[tokio::test]
    async fn test_language_override_beats_extension() {
        let options = ObfuscationConfig {
            executable_generation: true,
            ..Default::default()
        };
        let log = StepLog::new();
        instant()
            .run_as("", &options, LanguageTag::Rust, &log)
            .await
            .unwrap();
        assert_eq!(
            log.step("exe-gen").unwrap().message,
            "Generated Cargo build configuration"
        );
    }

    struct FaultyPass;

    #[async_trait]
    impl ObfuscationPass for FaultyPass {
        fn kind(&self) -> PassKind {
            PassKind::InjectJunk
        }

        async fn execute(&self, _source: String, _context: &PassContext<'_>) -> Result<PassOutcome> {
            Err(anyhow!("template store unavailable"))
        }
    }

    #[tokio::test]
    async fn test_fatal_fault_aborts_run() {
        let pipeline = instant().with_passes(vec![
            Box::new(crate::pipeline::passes::RenamePass),
            Box::new(FaultyPass),
            Box::new(crate::pipeline::passes::CanaryPass),
        ]);
        let options = ObfuscationConfig::recommended();
        let log = StepLog::new();

        let err = pipeline.run("data", &options, "a.js", &log).await.unwrap_err();

        assert_eq!(err.step(), "junk-inject");
        assert_eq!(
            err.to_string(),
            "Obfuscation failed at junk-inject: template store unavailable"
        );
        assert_eq!(log.step("junk-inject").unwrap().status, StepStatus::Error);
        assert!(log.step("canary-inject").is_none());
        assert_eq!(log.step("var-rename").unwrap().status, StepStatus::Completed);
    }

    #[tokio::test]
    async fn test_concurrent_runs_are_independent() {
        let pipeline = Arc::new(instant());
        let options = ObfuscationConfig {
            variable_renaming: true,
            ..Default::default()
        };

        let a = {
            let pipeline = Arc::clone(&pipeline);
            let options = options.clone();
            tokio::spawn(async move {
                pipeline
                    .run("value\nitem", &options, "a.js", &crate::progress::NoOpReporter)
                    .await
            })
        };
        let b = {
            let pipeline = Arc::clone(&pipeline);
            let options = options.clone();
            tokio::spawn(async move {
                pipeline
                    .run("item\nvalue", &options, "b.js", &crate::progress::NoOpReporter)
                    .await
            })
        };

        assert_eq!(a.await.unwrap().unwrap(), "_0x0000\n_0x0001");
        assert_eq!(b.await.unwrap().unwrap(), "_0x0000\n_0x0001");
    }

    #[tokio::test]
    async fn test_pacing_is_applied() {
        let delay = std::time::Duration::from_millis(20);
        let pipeline = ObfuscationPipeline::new(
            Arc::new(PassRegistry::with_defaults()),
            PipelineConfig::new().with_delay(PassKind::InjectCanary, delay),
        );
        let options = ObfuscationConfig {
            canary_injection: true,
            ..Default::default()
        };

        let started = Instant::now();
        pipeline
            .run("", &options, "a.js", &crate::progress::NoOpReporter)
            .await
            .unwrap();
        assert!(started.elapsed() >= delay);
    }
}
