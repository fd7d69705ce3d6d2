pub mod config;
pub mod context;
pub mod orchestrator;
pub mod passes;
pub mod step;

pub use config::PipelineConfig;
pub use context::PassContext;
pub use orchestrator::{ObfuscationPipeline, PipelineError};
pub use passes::{ObfuscationPass, PassKind, PassOutcome};
pub use step::{PipelineStep, StepStatus};
