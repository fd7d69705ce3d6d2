//! Reporter that keeps the audit trail of a pipeline run

use super::{ProgressEvent, ProgressReporter};
use crate::pipeline::{PipelineStep, StepStatus};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    steps: Vec<PipelineStep>,
    events: Vec<ProgressEvent>,
}

/// Records one [`PipelineStep`] per started pass and updates it in place
/// when the pass finishes
///
/// Steps are never removed during a run; call [`StepLog::reset`] before
/// reusing the log for the next run.
#[derive(Debug, Default)]
pub struct StepLog {
    inner: Mutex<Inner>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded steps in start order
    pub fn steps(&self) -> Vec<PipelineStep> {
        self.inner.lock().expect("step log poisoned").steps.clone()
    }

    /// Snapshot of every callback received, in arrival order
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.inner.lock().expect("step log poisoned").events.clone()
    }

    pub fn step(&self, step_id: &str) -> Option<PipelineStep> {
        self.inner
            .lock()
            .expect("step log poisoned")
            .steps
            .iter()
            .find(|s| s.id == step_id)
            .cloned()
    }

    pub fn has_errors(&self) -> bool {
        self.inner
            .lock()
            .expect("step log poisoned")
            .steps
            .iter()
            .any(|s| s.status == StepStatus::Error)
    }

    /// Discard the previous run's trail
    pub fn reset(&self) {
        let mut inner = self.inner.lock().expect("step log poisoned");
        inner.steps.clear();
        inner.events.clear();
    }

    fn finish(&self, step_id: &str, status: StepStatus, message: &str, event: ProgressEvent) {
        let mut inner = self.inner.lock().expect("step log poisoned");
        if let Some(step) = inner.steps.iter_mut().find(|s| s.id == step_id) {
            step.transition(status, message);
        }
        inner.events.push(event);
    }
}

impl ProgressReporter for StepLog {
    fn on_start(&self, step_id: &str, label: &str) {
        let mut inner = self.inner.lock().expect("step log poisoned");
        inner.steps.push(PipelineStep::started(step_id, label));
        inner.events.push(ProgressEvent::Started {
            step: step_id.to_string(),
            label: label.to_string(),
        });
    }

    fn on_complete(&self, step_id: &str, message: &str) {
        self.finish(
            step_id,
            StepStatus::Completed,
            message,
            ProgressEvent::Completed {
                step: step_id.to_string(),
                message: message.to_string(),
            },
        );
    }

    fn on_error(&self, step_id: &str, reason: &str) {
        self.finish(
            step_id,
            StepStatus::Error,
            reason,
            ProgressEvent::Failed {
                step: step_id.to_string(),
                reason: reason.to_string(),
            },
        );
    }
}
