//! Spinner-per-step reporter for interactive terminals

use super::ProgressReporter;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Draws one spinner on stderr for each running pass
pub struct TerminalReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ProgressBar>>,
    style: ProgressStyle,
}

impl TerminalReporter {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
            style,
        }
    }

    fn take(&self, step_id: &str) -> Option<ProgressBar> {
        self.bars.lock().expect("spinner map poisoned").remove(step_id)
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalReporter {
    fn on_start(&self, step_id: &str, label: &str) {
        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(self.style.clone());
        bar.set_message(format!("{}...", label));
        bar.enable_steady_tick(TICK);
        self.bars
            .lock()
            .expect("spinner map poisoned")
            .insert(step_id.to_string(), bar);
    }

    fn on_complete(&self, step_id: &str, message: &str) {
        if let Some(bar) = self.take(step_id) {
            bar.finish_with_message(format!("✔ {}", message));
        }
    }

    fn on_error(&self, step_id: &str, reason: &str) {
        if let Some(bar) = self.take(step_id) {
            bar.abandon_with_message(format!("✘ {}", reason));
        }
    }
}
