pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, LanguagesArgs, ObfuscateArgs};
pub use output::{OutputFormat, OutputFormatter};
