//! Output formatting for reports and listings
//!
//! JSON and YAML are meant for scripts, the human format for terminals.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::artifacts::WrittenArtifact;
use crate::languages::{LanguageTag, PassRegistry};
use crate::pipeline::{PipelineStep, StepStatus};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

/// Summary of one `obfuscate` invocation
#[derive(Debug, Clone, Serialize)]
pub struct ObfuscationReport {
    pub run_id: Uuid,
    pub file: String,
    pub language: LanguageTag,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub input_length: usize,
    pub output_length: usize,
    pub steps: Vec<PipelineStep>,
    pub artifacts: Vec<WrittenArtifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ObfuscationReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// One row of `polymorph languages`
#[derive(Debug, Clone, Serialize)]
pub struct LanguageEntry {
    pub tag: LanguageTag,
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub build_tool: &'static str,
    pub executable_extension: &'static str,
}

impl LanguageEntry {
    pub fn list(registry: &PassRegistry) -> Vec<Self> {
        registry
            .profiles()
            .map(|profile| Self {
                tag: profile.tag,
                name: profile.tag.name(),
                extensions: profile.tag.extensions(),
                build_tool: profile.build_tool,
                executable_extension: profile.executable_extension,
            })
            .collect()
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_report(&self, report: &ObfuscationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize obfuscation report to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(report)
                .context("Failed to serialize obfuscation report to YAML"),
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    pub fn format_languages(&self, languages: &[LanguageEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(languages)
                .context("Failed to serialize language list to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(languages)
                .context("Failed to serialize language list to YAML"),
            OutputFormat::Human => Ok(self.format_languages_human(languages)),
        }
    }

    fn format_report_human(&self, report: &ObfuscationReport) -> String {
        let mut output = String::new();

        if report.succeeded() {
            output.push_str("\u{2713} Obfuscation Report\n");
        } else {
            output.push_str("\u{2717} Obfuscation Failed\n");
        }
        output.push_str(RULE);
        output.push_str("\n\n");

        output.push_str(&format!("File:      {}\n", report.file));
        output.push_str(&format!(
            "Language:  {} ({})\n",
            report.language.name(),
            report.language
        ));
        output.push_str(&format!(
            "Size:      {} -> {} characters\n\n",
            report.input_length, report.output_length
        ));

        if report.steps.is_empty() {
            output.push_str("Steps: (none enabled)\n");
        } else {
            output.push_str("Steps:\n");
            for (i, step) in report.steps.iter().enumerate() {
                let connector = if i == report.steps.len() - 1 {
                    "\u{2514}"
                } else {
                    "\u{251C}"
                };
                let symbol = match step.status {
                    StepStatus::Completed => "\u{2713}",
                    StepStatus::Error => "\u{2717}",
                    StepStatus::Running | StepStatus::Pending => "\u{2026}",
                };
                output.push_str(&format!(
                    "{}\u{2500} {} {:<22} {}\n",
                    connector, symbol, step.name, step.message
                ));
            }
        }

        if !report.artifacts.is_empty() {
            output.push_str("\nArtifacts:\n");
            for artifact in &report.artifacts {
                output.push_str(&format!(
                    "  - {} ({} bytes)\n",
                    artifact.path.display(),
                    artifact.bytes
                ));
            }
        }

        if let Some(error) = &report.error {
            output.push_str(&format!("\nError: {}\n", error));
        }

        output.push_str(&format!("\nRun {} finished in {}ms\n", report.run_id, report.duration_ms));
        output
    }

    fn format_languages_human(&self, languages: &[LanguageEntry]) -> String {
        let mut output = String::new();

        output.push_str("Supported Languages\n");
        output.push_str(RULE);
        output.push_str("\n\n");

        for entry in languages {
            let extensions = entry
                .extensions
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!(
                "{:<12} {:<14} {:<18} {}\n",
                entry.tag.id(),
                entry.name,
                extensions,
                entry.build_tool
            ));
        }

        output.push_str(&format!("\n{} languages\n", languages.len()));
        output
    }
}
