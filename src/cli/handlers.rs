//! Command handlers
//!
//! Each handler returns the process exit code: 0 on success, 1 when the
//! pipeline or file I/O fails, 2 for configuration problems.

use super::commands::{LanguagesArgs, ObfuscateArgs};
use super::output::{LanguageEntry, ObfuscationReport, OutputFormat, OutputFormatter};
use crate::artifacts::ArtifactSet;
use crate::config::{ConfigError, ObfuscationConfig};
use crate::languages::{classify, LanguageTag, PassRegistry};
use crate::pipeline::{ObfuscationPipeline, PipelineConfig};
use crate::progress::{LoggingReporter, Reporters, StepLog, TerminalReporter};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;

/// Resolve the effective options and language for one invocation
fn resolve(args: &ObfuscateArgs, file_name: &str) -> Result<(ObfuscationConfig, LanguageTag), ConfigError> {
    let options = args.apply_to(ObfuscationConfig::load(args.config.as_deref())?);

    let language = match &args.language {
        Some(tag) => LanguageTag::from_id(tag).ok_or_else(|| ConfigError::UnknownLanguage(tag.clone()))?,
        None => classify(file_name),
    };

    Ok((options, language))
}

pub async fn handle_obfuscate(args: &ObfuscateArgs, quiet: bool) -> i32 {
    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let (options, language) = match resolve(args, &file_name) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_CONFIG;
        }
    };
    debug!(?options, language = %language, "Resolved options");

    if !options.any_pass_enabled() && !quiet {
        eprintln!("Warning: no passes enabled; output will match the input. Try --defaults.");
    }

    let source = match tokio::fs::read_to_string(&args.file).await {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Failed to read {}: {}", args.file.display(), e);
            return EXIT_FAILURE;
        }
    };

    let registry = Arc::new(PassRegistry::with_defaults());
    let pipeline_config = if args.instant {
        PipelineConfig::instant()
    } else {
        PipelineConfig::default()
    };
    let pipeline = ObfuscationPipeline::new(Arc::clone(&registry), pipeline_config);

    let format: OutputFormat = args.format.into();
    let step_log = Arc::new(StepLog::new());
    let mut reporters = Reporters::new()
        .with(step_log.clone())
        .with(Arc::new(LoggingReporter));
    if !quiet && format == OutputFormat::Human && atty::is(atty::Stream::Stderr) {
        reporters = reporters.with(Arc::new(TerminalReporter::new()));
    }

    let started_at = Utc::now();
    let start = Instant::now();
    let run_id = Uuid::new_v4();
    info!(run_id = %run_id, file = %file_name, "Starting run");

    let result = pipeline.run_as(&source, &options, language, &reporters).await;

    let mut report = ObfuscationReport {
        run_id,
        file: file_name.clone(),
        language,
        started_at,
        duration_ms: 0,
        input_length: source.chars().count(),
        output_length: 0,
        steps: step_log.steps(),
        artifacts: Vec::new(),
        error: None,
    };

    let mut exit_code = EXIT_SUCCESS;
    match result {
        Ok(text) => {
            report.output_length = text.chars().count();
            match &args.output_dir {
                Some(dir) => {
                    let artifacts = ArtifactSet::new(&file_name, language, &registry, text, &options);
                    match artifacts.write_to(dir) {
                        Ok(written) => report.artifacts = written,
                        Err(e) => {
                            error!(error = %e, "Failed to write artifacts");
                            report.error = Some(e.to_string());
                            exit_code = EXIT_FAILURE;
                        }
                    }
                }
                None => print!("{}", text),
            }
        }
        Err(e) => {
            error!(step = e.step(), "{}", e);
            report.error = Some(e.to_string());
            exit_code = EXIT_FAILURE;
        }
    }
    report.duration_ms = start.elapsed().as_millis() as u64;

    if let Some(error) = &report.error {
        eprintln!("Error: {}", error);
    }

    if !quiet || format != OutputFormat::Human {
        match OutputFormatter::new(format).format_report(&report) {
            // The report shares stdout only when the text went to files
            Ok(rendered) if args.output_dir.is_some() => println!("{}", rendered),
            Ok(rendered) => eprintln!("{}", rendered),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                return EXIT_FAILURE;
            }
        }
    }

    exit_code
}

pub async fn handle_languages(args: &LanguagesArgs) -> i32 {
    let registry = PassRegistry::with_defaults();
    let entries = LanguageEntry::list(&registry);

    match OutputFormatter::new(args.format.into()).format_languages(&entries) {
        Ok(rendered) => {
            println!("{}", rendered);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{CliArgs, Commands};
    use clap::Parser;
    use serial_test::serial;

    fn obfuscate_args(argv: &[&str]) -> ObfuscateArgs {
        match CliArgs::parse_from(argv).command {
            Commands::Obfuscate(args) => args,
            _ => panic!("Expected Obfuscate command"),
        }
    }

    #[test]
    #[serial]
    fn test_resolve_language_override() {
        std::env::remove_var("POLYMORPH_CONFIG");
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("empty.toml");
        std::fs::write(&config, "").unwrap();
        let config = config.to_string_lossy().into_owned();

        let args = obfuscate_args(&["polymorph", "obfuscate", "x.txt", "-c", &config, "-l", "Rust"]);
        let (_, language) = resolve(&args, "x.txt").unwrap();
        assert_eq!(language, LanguageTag::Rust);

        let args = obfuscate_args(&["polymorph", "obfuscate", "x.txt", "-c", &config, "-l", "cobol"]);
        assert!(matches!(
            resolve(&args, "x.txt"),
            Err(ConfigError::UnknownLanguage(ref l)) if l == "cobol"
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_config_file_is_config_error() {
        let args = obfuscate_args(&[
            "polymorph",
            "obfuscate",
            "a.js",
            "--config",
            "/nonexistent/polymorph.toml",
        ]);
        assert_eq!(handle_obfuscate(&args, true).await, EXIT_CONFIG);
    }

    #[tokio::test]
    #[serial]
    async fn test_writes_artifacts() {
        std::env::remove_var("POLYMORPH_CONFIG");
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.py");
        std::fs::write(&input, "data = 1\n").unwrap();
        let config = dir.path().join("polymorph.toml");
        std::fs::write(&config, "").unwrap();
        let out = dir.path().join("out");

        let args = obfuscate_args(&[
            "polymorph",
            "obfuscate",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--rename",
            "--exe",
            "--instant",
            "--output-dir",
            out.to_str().unwrap(),
            "--format",
            "json",
        ]);

        assert_eq!(handle_obfuscate(&args, true).await, EXIT_SUCCESS);
        assert_eq!(
            std::fs::read_to_string(out.join("sample_obfuscated.py")).unwrap(),
            "_0x0000 = 1\n"
        );
        let exe = std::fs::read_to_string(out.join("sample_obfuscated.exe")).unwrap();
        assert!(exe.contains("# Build tool: PyInstaller"));
    }

    #[tokio::test]
    #[serial]
    async fn test_api_key_with_space_is_accepted() {
        std::env::remove_var("POLYMORPH_CONFIG");
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.py");
        std::fs::write(&input, "x = 1\n").unwrap();
        let config = dir.path().join("polymorph.toml");
        std::fs::write(&config, "").unwrap();
        let out = dir.path().join("out");

        let args = obfuscate_args(&[
            "polymorph",
            "obfuscate",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--ai-mutate",
            "--openai-api-key",
            "sk abc",
            "--instant",
            "-o",
            out.to_str().unwrap(),
            "-f",
            "json",
        ]);

        assert_eq!(handle_obfuscate(&args, true).await, EXIT_SUCCESS);
        assert_eq!(
            std::fs::read_to_string(out.join("sample_obfuscated.py")).unwrap(),
            "# AI-optimized Python structure\nx = 1\n"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_input_is_failure() {
        let args = obfuscate_args(&[
            "polymorph",
            "obfuscate",
            "/nonexistent/input.js",
            "--config",
            "/dev/null",
            "--instant",
        ]);
        assert_eq!(handle_obfuscate(&args, true).await, EXIT_FAILURE);
    }

    #[tokio::test]
    #[serial]
    async fn test_languages() {
        let args = LanguagesArgs {
            format: super::super::commands::OutputFormatArg::Json,
        };
        assert_eq!(handle_languages(&args).await, EXIT_SUCCESS);
    }
}
