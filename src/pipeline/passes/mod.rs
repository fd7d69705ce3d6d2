//! The individual obfuscation passes, in pipeline order

mod artifact;
mod canary;
mod junk;
mod mutation;
mod rename;

pub use artifact::ArtifactPass;
pub use canary::{generate_secret, CanaryPass};
pub use junk::JunkPass;
pub use mutation::{MutationPass, MISSING_API_KEY};
pub use rename::{rename_identifiers, RenamePass};

use super::context::PassContext;
use crate::config::ObfuscationConfig;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Identity of a pass: step id, label, pacing and the flag that enables it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    RenameIdentifiers,
    InjectJunk,
    Mutate,
    InjectCanary,
    GenerateArtifact,
}

impl PassKind {
    /// Fixed execution order
    pub const ORDER: [PassKind; 5] = [
        PassKind::RenameIdentifiers,
        PassKind::InjectJunk,
        PassKind::Mutate,
        PassKind::InjectCanary,
        PassKind::GenerateArtifact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::RenameIdentifiers => "var-rename",
            Self::InjectJunk => "junk-inject",
            Self::Mutate => "ai-mutate",
            Self::InjectCanary => "canary-inject",
            Self::GenerateArtifact => "exe-gen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RenameIdentifiers => "Variable Renaming",
            Self::InjectJunk => "Junk Code Injection",
            Self::Mutate => "AI Code Mutation",
            Self::InjectCanary => "Anti-Tampering Canary",
            Self::GenerateArtifact => "Executable Generation",
        }
    }

    pub fn default_delay(&self) -> Duration {
        let millis = match self {
            Self::RenameIdentifiers => 800,
            Self::InjectJunk => 600,
            Self::Mutate => 2000,
            Self::InjectCanary => 400,
            Self::GenerateArtifact => 1200,
        };
        Duration::from_millis(millis)
    }

    pub fn is_enabled(&self, options: &ObfuscationConfig) -> bool {
        match self {
            Self::RenameIdentifiers => options.variable_renaming,
            Self::InjectJunk => options.junk_code_injection,
            Self::Mutate => options.ai_mutation,
            Self::InjectCanary => options.canary_injection,
            Self::GenerateArtifact => options.executable_generation,
        }
    }
}

impl std::fmt::Display for PassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Result of a pass that did not hit a fatal fault
///
/// Both variants hand the text back to the pipeline: a failed pass returns
/// the text exactly as it received it.
#[derive(Debug)]
pub enum PassOutcome {
    Completed { text: String, message: String },
    Failed { text: String, reason: String },
}

impl PassOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Completed { text, .. } | Self::Failed { text, .. } => text,
        }
    }
}

/// One toggleable transformation stage
///
/// `Err` means a fatal fault and aborts the whole run; recoverable problems
/// are reported through [`PassOutcome::Failed`].
#[async_trait]
pub trait ObfuscationPass: Send + Sync {
    fn kind(&self) -> PassKind;

    async fn execute(&self, source: String, context: &PassContext<'_>) -> Result<PassOutcome>;
}

/// The standard pass list in [`PassKind::ORDER`]
pub fn default_passes() -> Vec<Box<dyn ObfuscationPass>> {
    vec![
        Box::new(RenamePass),
        Box::new(JunkPass),
        Box::new(MutationPass),
        Box::new(CanaryPass),
        Box::new(ArtifactPass),
    ]
}
