//! Obfuscation configuration
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults (every pass disabled, no credentials)
//! 2. An optional TOML file, by default `<config dir>/polymorph/config.toml`
//! 3. Environment variables for credentials
//! 4. Command-line flags (applied by the CLI)
//!
//! # Environment Variables
//!
//! - `POLYMORPH_OPENAI_API_KEY`: credential checked by the AI mutation pass,
//!   falling back to `OPENAI_API_KEY`
//! - `POLYMORPH_LICENSE_KEY`: license key recorded in artifact metadata
//! - `POLYMORPH_CONFIG`: alternative config file path
//!
//! # Example
//!
//! ```toml
//! variable_renaming = true
//! junk_code_injection = true
//! canary_injection = true
//! openai_api_key = "sk-..."
//! ```

use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "polymorph";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`ObfuscationConfig`]
    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Language override does not name a known tag
    #[error("Unknown language: {0}. Run `polymorph languages` to list supported tags")]
    UnknownLanguage(String),

    #[error("Invalid log level '{0}'. Valid levels: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Feature flags and credentials for one pipeline run
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObfuscationConfig {
    #[serde(alias = "variableRenaming")]
    pub variable_renaming: bool,

    #[serde(alias = "junkCodeInjection")]
    pub junk_code_injection: bool,

    /// Requires a non-empty `openai_api_key`; the pass fails without one
    #[serde(alias = "aiMutation")]
    pub ai_mutation: bool,

    #[serde(alias = "canaryInjection")]
    pub canary_injection: bool,

    #[serde(alias = "executableGeneration")]
    pub executable_generation: bool,

    /// Recorded in artifact metadata; does not change the text
    #[serde(alias = "hardwareBinding")]
    pub hardware_binding: bool,

    #[serde(alias = "licenseKey")]
    pub license_key: String,

    #[serde(alias = "openaiApiKey")]
    pub openai_api_key: String,
}

impl fmt::Debug for ObfuscationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObfuscationConfig")
            .field("variable_renaming", &self.variable_renaming)
            .field("junk_code_injection", &self.junk_code_injection)
            .field("ai_mutation", &self.ai_mutation)
            .field("canary_injection", &self.canary_injection)
            .field("executable_generation", &self.executable_generation)
            .field("hardware_binding", &self.hardware_binding)
            .field("license_key", &redact(&self.license_key))
            .field("openai_api_key", &redact(&self.openai_api_key))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl ObfuscationConfig {
    /// Every pass disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// The product's out-of-the-box selection: renaming, junk code,
    /// canaries and executable generation
    pub fn recommended() -> Self {
        Self {
            variable_renaming: true,
            junk_code_injection: true,
            canary_injection: true,
            executable_generation: true,
            ..Self::default()
        }
    }

    /// Every pass enabled; credentials untouched
    pub fn enable_all(mut self) -> Self {
        self.variable_renaming = true;
        self.junk_code_injection = true;
        self.ai_mutation = true;
        self.canary_injection = true;
        self.executable_generation = true;
        self.hardware_binding = true;
        self
    }

    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = key.into();
        self
    }

    pub fn with_license_key(mut self, key: impl Into<String>) -> Self {
        self.license_key = key.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.is_empty()
    }

    pub fn has_license_key(&self) -> bool {
        !self.license_key.is_empty()
    }

    /// Whether any text-producing or reporting pass is enabled
    pub fn any_pass_enabled(&self) -> bool {
        self.variable_renaming
            || self.junk_code_injection
            || self.ai_mutation
            || self.canary_injection
            || self.executable_generation
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Fill empty credentials from the environment
    pub fn apply_env(mut self) -> Self {
        if self.openai_api_key.is_empty() {
            if let Some(key) = non_empty_var("POLYMORPH_OPENAI_API_KEY")
                .or_else(|| non_empty_var("OPENAI_API_KEY"))
            {
                self.openai_api_key = key;
            }
        }
        if self.license_key.is_empty() {
            if let Some(key) = non_empty_var("POLYMORPH_LICENSE_KEY") {
                self.license_key = key;
            }
        }
        self
    }

    /// Load defaults, then the config file, then the environment
    ///
    /// An explicit `path` must exist. Without one, `POLYMORPH_CONFIG` is
    /// tried, then the default location; a missing default file is not an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| non_empty_var("POLYMORPH_CONFIG").map(PathBuf::from));

        let config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        Ok(config.apply_env())
    }
}

/// `<config dir>/polymorph/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
