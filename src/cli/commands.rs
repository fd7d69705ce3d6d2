use crate::config::ObfuscationConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Multi-pass source code obfuscator
#[derive(Parser, Debug)]
#[command(
    name = "polymorph",
    about = "Multi-pass source code obfuscator",
    version,
    author,
    long_about = "polymorph rewrites a source file through a sequence of optional passes: \
                  identifier renaming, junk code injection, AI mutation, anti-tampering \
                  canaries and executable metadata generation. Over 30 languages are \
                  recognized by file extension."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Obfuscate a source file",
        long_about = "Runs the selected passes over FILE. Without --output-dir the \
                      obfuscated text is printed to stdout.\n\n\
                      Examples:\n  \
                      polymorph obfuscate app.js --defaults\n  \
                      polymorph obfuscate main.py --rename --canary --output-dir dist\n  \
                      polymorph obfuscate lib.rs --all --openai-api-key sk-... --format json"
    )]
    Obfuscate(ObfuscateArgs),

    #[command(
        about = "List supported languages",
        long_about = "Lists every language tag with its file extensions and build tool.\n\n\
                      Examples:\n  \
                      polymorph languages\n  \
                      polymorph languages --format yaml"
    )]
    Languages(LanguagesArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ObfuscateArgs {
    #[arg(value_name = "FILE", help = "Source file to obfuscate")]
    pub file: PathBuf,

    #[arg(long, help = "Rename common identifiers")]
    pub rename: bool,

    #[arg(long, help = "Inject decoy functions")]
    pub junk: bool,

    #[arg(long, help = "Apply AI mutation (requires an OpenAI API key)")]
    pub ai_mutate: bool,

    #[arg(long, help = "Inject an anti-tampering canary")]
    pub canary: bool,

    #[arg(long, help = "Generate executable build metadata")]
    pub exe: bool,

    #[arg(long, help = "Record hardware binding in artifact metadata")]
    pub hardware_binding: bool,

    #[arg(long, conflicts_with = "defaults", help = "Enable every pass")]
    pub all: bool,

    #[arg(long, help = "Use the recommended selection (rename, junk, canary, exe)")]
    pub defaults: bool,

    #[arg(long, value_name = "KEY", help = "OpenAI API key for AI mutation")]
    pub openai_api_key: Option<String>,

    #[arg(
        long,
        value_name = "KEY",
        help = "License key recorded as a fingerprint in artifact metadata"
    )]
    pub license_key: Option<String>,

    #[arg(short = 'c', long, value_name = "FILE", help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'l',
        long,
        value_name = "TAG",
        help = "Override language detection (see `polymorph languages`)"
    )]
    pub language: Option<String>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Write artifacts to DIR instead of printing the text"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Format of the step report"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "Skip the artificial pacing between passes")]
    pub instant: bool,
}

impl ObfuscateArgs {
    /// Layer the command-line selection on top of a loaded configuration
    ///
    /// Pass flags only ever switch passes on; credentials given on the
    /// command line replace those from the file or environment.
    pub fn apply_to(&self, mut config: ObfuscationConfig) -> ObfuscationConfig {
        if self.defaults {
            let recommended = ObfuscationConfig::recommended();
            config.variable_renaming |= recommended.variable_renaming;
            config.junk_code_injection |= recommended.junk_code_injection;
            config.canary_injection |= recommended.canary_injection;
            config.executable_generation |= recommended.executable_generation;
        }
        if self.all {
            config = config.enable_all();
        }

        config.variable_renaming |= self.rename;
        config.junk_code_injection |= self.junk;
        config.ai_mutation |= self.ai_mutate;
        config.canary_injection |= self.canary;
        config.executable_generation |= self.exe;
        config.hardware_binding |= self.hardware_binding;

        if let Some(key) = self.openai_api_key.as_ref().filter(|k| !k.is_empty()) {
            config.openai_api_key = key.clone();
        }
        if let Some(key) = self.license_key.as_ref().filter(|k| !k.is_empty()) {
            config.license_key = key.clone();
        }
        config
    }
}

#[derive(Parser, Debug, Clone)]
pub struct LanguagesArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn obfuscate_args(argv: &[&str]) -> ObfuscateArgs {
        match CliArgs::parse_from(argv).command {
            Commands::Obfuscate(args) => args,
            _ => panic!("Expected Obfuscate command"),
        }
    }

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_obfuscate_args() {
        let args = obfuscate_args(&["polymorph", "obfuscate", "app.js"]);

        assert_eq!(args.file, PathBuf::from("app.js"));
        assert_eq!(args.format, OutputFormatArg::Human);
        assert!(!args.rename && !args.junk && !args.ai_mutate && !args.canary && !args.exe);
        assert!(args.openai_api_key.is_none());
        assert!(args.output_dir.is_none());
        assert!(!args.instant);
    }

    #[test]
    fn test_obfuscate_with_options() {
        let args = obfuscate_args(&[
            "polymorph",
            "obfuscate",
            "main.py",
            "--rename",
            "--canary",
            "--language",
            "python",
            "--output-dir",
            "dist",
            "--format",
            "json",
            "--instant",
        ]);

        assert!(args.rename);
        assert!(args.canary);
        assert!(!args.junk);
        assert_eq!(args.language.as_deref(), Some("python"));
        assert_eq!(args.output_dir, Some(PathBuf::from("dist")));
        assert_eq!(args.format, OutputFormatArg::Json);
        assert!(args.instant);
    }

    #[test]
    fn test_all_conflicts_with_defaults() {
        let result = CliArgs::try_parse_from(["polymorph", "obfuscate", "a.js", "--all", "--defaults"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_flags_on_empty_config() {
        let args = obfuscate_args(&["polymorph", "obfuscate", "a.js", "--junk", "--exe"]);
        let config = args.apply_to(ObfuscationConfig::new());

        assert!(config.junk_code_injection);
        assert!(config.executable_generation);
        assert!(!config.variable_renaming);
        assert!(!config.ai_mutation);
    }

    #[test]
    fn test_apply_defaults_and_key() {
        let args = obfuscate_args(&[
            "polymorph",
            "obfuscate",
            "a.js",
            "--defaults",
            "--openai-api-key",
            "sk-cli",
        ]);
        let config = args.apply_to(ObfuscationConfig::new().with_openai_api_key("sk-file"));

        assert_eq!(
            ObfuscationConfig {
                openai_api_key: String::new(),
                ..config.clone()
            },
            ObfuscationConfig::recommended()
        );
        assert_eq!(config.openai_api_key, "sk-cli");
    }

    #[test]
    fn test_flags_never_disable_file_settings() {
        let args = obfuscate_args(&["polymorph", "obfuscate", "a.js"]);
        let file = ObfuscationConfig {
            canary_injection: true,
            ..Default::default()
        };
        assert!(args.apply_to(file).canary_injection);
    }

    #[test]
    fn test_languages_command() {
        let args = CliArgs::parse_from(["polymorph", "languages", "--format", "yaml"]);
        match args.command {
            Commands::Languages(languages_args) => {
                assert_eq!(languages_args.format, OutputFormatArg::Yaml);
            }
            _ => panic!("Expected Languages command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = CliArgs::parse_from(["polymorph", "-v", "languages"]);
        assert!(args.verbose);
        assert!(!args.quiet);

        let args = CliArgs::parse_from(["polymorph", "--log-level", "debug", "languages"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
