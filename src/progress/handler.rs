//! Progress reporter trait

use serde::Serialize;
use std::sync::Arc;

/// One callback as delivered to a reporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProgressEvent {
    Started { step: String, label: String },
    Completed { step: String, message: String },
    Failed { step: String, reason: String },
}

impl ProgressEvent {
    pub fn step(&self) -> &str {
        match self {
            Self::Started { step, .. } | Self::Completed { step, .. } | Self::Failed { step, .. } => {
                step
            }
        }
    }

    /// Whether this is a completed or failed event
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Started { .. })
    }
}

/// Receives pass lifecycle callbacks from the pipeline
///
/// Calls arrive synchronously and in pipeline order. For every enabled pass
/// the pipeline calls `on_start` once, then exactly one of `on_complete` or
/// `on_error`.
pub trait ProgressReporter: Send + Sync {
    fn on_start(&self, step_id: &str, label: &str);

    fn on_complete(&self, step_id: &str, message: &str);

    fn on_error(&self, step_id: &str, reason: &str);
}

/// Reporter that ignores all callbacks
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpReporter;

impl ProgressReporter for NoOpReporter {
    fn on_start(&self, _step_id: &str, _label: &str) {}

    fn on_complete(&self, _step_id: &str, _message: &str) {}

    fn on_error(&self, _step_id: &str, _reason: &str) {}
}

/// Fans every callback out to several reporters, in insertion order
#[derive(Default, Clone)]
pub struct Reporters {
    reporters: Vec<Arc<dyn ProgressReporter>>,
}

impl Reporters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporters.push(reporter);
        self
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl ProgressReporter for Reporters {
    fn on_start(&self, step_id: &str, label: &str) {
        for reporter in &self.reporters {
            reporter.on_start(step_id, label);
        }
    }

    fn on_complete(&self, step_id: &str, message: &str) {
        for reporter in &self.reporters {
            reporter.on_complete(step_id, message);
        }
    }

    fn on_error(&self, step_id: &str, reason: &str) {
        for reporter in &self.reporters {
            reporter.on_error(step_id, reason);
        }
    }
}
