//! Progress reporting for pipeline runs

mod handler;
mod logging;
mod step_log;
mod terminal;

pub use handler::{NoOpReporter, ProgressEvent, ProgressReporter, Reporters};
pub use logging::LoggingReporter;
pub use step_log::StepLog;
pub use terminal::TerminalReporter;
