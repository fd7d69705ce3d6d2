//! polymorph - multi-pass source code obfuscator
//!
//! A source file is classified by extension into one of the supported
//! languages and then pushed through a fixed sequence of optional passes.
//! Each pass consumes the text produced by the previous one.
//!
//! # Core Concepts
//!
//! - **Language tags**: closed set of languages recognized by file extension,
//!   each backed by a [`LanguageProfile`] in the [`PassRegistry`]
//! - **Passes**: identifier renaming, junk code injection, AI mutation,
//!   canary injection and executable metadata, run by [`ObfuscationPipeline`]
//! - **Progress**: every enabled pass reports start and exactly one terminal
//!   event to a [`ProgressReporter`]
//!
//! # Example Usage
//!
//! ```no_run
//! use polymorph::{ObfuscationConfig, ObfuscationPipeline, PipelineConfig, PassRegistry, StepLog};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), polymorph::PipelineError> {
//! let pipeline = ObfuscationPipeline::new(
//!     Arc::new(PassRegistry::with_defaults()),
//!     PipelineConfig::instant(),
//! );
//! let log = StepLog::new();
//! let text = pipeline
//!     .run("let data = 1;", &ObfuscationConfig::recommended(), "app.js", &log)
//!     .await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod languages;
pub mod pipeline;
pub mod progress;
pub mod util;

pub use artifacts::{ArtifactError, ArtifactSet, ExecutableMetadata};
pub use config::{ConfigError, ObfuscationConfig};
pub use languages::{classify, LanguageProfile, LanguageTag, PassRegistry};
pub use pipeline::{
    ObfuscationPass, ObfuscationPipeline, PassKind, PipelineConfig, PipelineError, PipelineStep,
    StepStatus,
};
pub use progress::{LoggingReporter, NoOpReporter, ProgressEvent, ProgressReporter, StepLog};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
