//! Logging-based progress reporter

use super::ProgressReporter;
use tracing::{info, warn};

/// Reporter that logs pass lifecycle events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingReporter;

impl ProgressReporter for LoggingReporter {
    fn on_start(&self, step_id: &str, label: &str) {
        info!(step = %step_id, "Starting {}", label.to_lowercase());
    }

    fn on_complete(&self, step_id: &str, message: &str) {
        info!(step = %step_id, "{}", message);
    }

    fn on_error(&self, step_id: &str, reason: &str) {
        warn!(step = %step_id, reason = %reason, "Step failed");
    }
}
