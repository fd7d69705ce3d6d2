use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle state of one pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Running,
    Completed,
    Error,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Audit-trail entry for one pass of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStep {
    pub id: String,
    pub name: String,
    pub status: StepStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl PipelineStep {
    /// A step that has just started running
    pub fn started(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status: StepStatus::Running,
            message: format!("Starting {}...", name.to_lowercase()),
            timestamp: Utc::now(),
        }
    }

    /// Move to a new status, refreshing the timestamp
    pub fn transition(&mut self, status: StepStatus, message: &str) {
        self.status = status;
        self.message = message.to_string();
        self.timestamp = Utc::now();
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, StepStatus::Completed | StepStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_started_step() {
        let step = PipelineStep::started("var-rename", "Variable Renaming");
        assert_eq!(step.status, StepStatus::Running);
        assert_eq!(step.message, "Starting variable renaming...");
        assert!(!step.is_finished());
    }

    #[test]
    fn test_transition_refreshes_timestamp() {
        let mut step = PipelineStep::started("ai-mutate", "AI Code Mutation");
        let started_at = step.timestamp;

        step.transition(StepStatus::Error, "OpenAI API key not configured");

        assert_eq!(step.status, StepStatus::Error);
        assert_eq!(step.message, "OpenAI API key not configured");
        assert!(step.timestamp >= started_at);
        assert!(step.is_finished());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&StepStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        assert_eq!(StepStatus::Pending.to_string(), "pending");
    }
}
