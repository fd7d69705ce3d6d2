use polymorph::cli::commands::{CliArgs, Commands};
use polymorph::cli::handlers::{handle_languages, handle_obfuscate, EXIT_CONFIG};
use polymorph::util::{init_logging, LoggingConfig};
use polymorph::VERSION;

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let logging = match LoggingConfig::for_cli(args.log_level.as_deref(), args.verbose, args.quiet) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    init_logging(logging);

    debug!("polymorph v{} starting", VERSION);

    let exit_code = match &args.command {
        Commands::Obfuscate(obfuscate_args) => handle_obfuscate(obfuscate_args, args.quiet).await,
        Commands::Languages(languages_args) => handle_languages(languages_args).await,
    };

    std::process::exit(exit_code);
}
