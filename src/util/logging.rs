//! Structured logging setup for polymorph
//!
//! Logs always go to stderr; stdout is reserved for obfuscated text and
//! reports.
//!
//! # Environment Variables
//!
//! - `POLYMORPH_LOG_LEVEL`: minimum level (trace, debug, info, warn, error)
//! - `POLYMORPH_LOG_JSON`: `true` for JSON lines
//! - `RUST_LOG`: full filter directives, replacing the level above
//!
//! # Example
//!
//! ```no_run
//! use polymorph::util::logging;
//!
//! logging::init_from_env();
//! tracing::info!(file = "app.js", "Obfuscating");
//! ```

use crate::config::ConfigError;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,

    /// JSON lines instead of human-readable output
    pub use_json: bool,

    /// Include the module target (e.g. polymorph::pipeline) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Read `POLYMORPH_LOG_LEVEL` and `POLYMORPH_LOG_JSON`
    pub fn from_env() -> Result<Self, ConfigError> {
        let level = match env::var("POLYMORPH_LOG_LEVEL") {
            Ok(value) if !value.is_empty() => parse_level(&value)?,
            _ => Level::INFO,
        };

        Ok(Self {
            level,
            use_json: json_from_env(),
            ..Default::default()
        })
    }

    /// Resolve the command-line switches
    ///
    /// Precedence: `--log-level`, then `-v` (debug), then `-q` (error), then
    /// the environment.
    pub fn for_cli(log_level: Option<&str>, verbose: bool, quiet: bool) -> Result<Self, ConfigError> {
        let level = if let Some(level) = log_level {
            parse_level(level)?
        } else if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            return Self::from_env();
        };

        Ok(Self {
            level,
            use_json: json_from_env(),
            ..Default::default()
        })
    }

    fn filter(&self) -> EnvFilter {
        match env::var("RUST_LOG") {
            Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
            _ => EnvFilter::new(format!("warn,polymorph={}", self.level)),
        }
    }
}

fn json_from_env() -> bool {
    env::var("POLYMORPH_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false)
}

/// Case-insensitive level name
pub fn parse_level(level_str: &str) -> Result<Level, ConfigError> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(level_str.to_string())),
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.filter();

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initialize from the environment, falling back to INFO on a bad level
pub fn init_from_env() {
    let config = LoggingConfig::from_env().unwrap_or_else(|e| {
        eprintln!("{}; defaulting to info", e);
        LoggingConfig::default()
    });
    init_logging(config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace").unwrap(), Level::TRACE);
        assert_eq!(parse_level("Debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("INFO").unwrap(), Level::INFO);
        assert_eq!(parse_level("warning").unwrap(), Level::WARN);
        assert_eq!(parse_level("error").unwrap(), Level::ERROR);
    }

    #[test]
    fn test_parse_level_invalid() {
        let err = parse_level("loud").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref l) if l == "loud"));
        assert!(parse_level("").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
    }

    #[test]
    #[serial]
    fn test_cli_precedence() {
        env::remove_var("POLYMORPH_LOG_LEVEL");
        assert_eq!(
            LoggingConfig::for_cli(Some("trace"), false, true).unwrap().level,
            Level::TRACE
        );
        assert_eq!(LoggingConfig::for_cli(None, true, false).unwrap().level, Level::DEBUG);
        assert_eq!(LoggingConfig::for_cli(None, false, true).unwrap().level, Level::ERROR);
        assert_eq!(LoggingConfig::for_cli(None, false, false).unwrap().level, Level::INFO);
        assert!(LoggingConfig::for_cli(Some("nope"), false, false).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        env::set_var("POLYMORPH_LOG_LEVEL", "warn");
        env::set_var("POLYMORPH_LOG_JSON", "true");

        let config = LoggingConfig::from_env().unwrap();
        assert_eq!(config.level, Level::WARN);
        assert!(config.use_json);

        env::set_var("POLYMORPH_LOG_LEVEL", "shouting");
        assert!(LoggingConfig::from_env().is_err());

        env::remove_var("POLYMORPH_LOG_LEVEL");
        env::remove_var("POLYMORPH_LOG_JSON");
    }
}
