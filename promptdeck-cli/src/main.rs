//! PromptDeck CLI - prompt formatting toolkit.
//!
//! Commands:
//! - `promptdeck format --to <FORMAT> [FILE]`: Wrap raw text
//! - `promptdeck extract --from <FORMAT> [--strict] [FILE]`: Recover raw text
//! - `promptdeck transcode --from <FORMAT> --to <FORMAT> [FILE]`: Convert
//! - `promptdeck formats`: List the supported formats
//! - `promptdeck library [--file F] [--search S] [--category C] [--tag T] [--json]`
//! - `promptdeck config`: Show the effective configuration
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - 2: Critical error (the configuration could not be loaded)

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use promptdeck::library::LibraryOptions;
use promptdeck::{config, formats, library, text};
use promptdeck::{Cli, Commands};
use promptdeck_common::{ErrorSeverity, Severity};
use promptdeck_prompts::ConfigLoader;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("promptdeck=debug,promptdeck_prompts=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = dispatch_command(cli.command);
    std::process::exit(exit_code);
}

/// Dispatch a parsed subcommand to its handler.
fn dispatch_command(command: Commands) -> i32 {
    match command {
        Commands::Format { to, file } => result_to_exit(text::run_format(to, file.as_deref())),
        Commands::Extract { from, file, strict } => {
            result_to_exit(text::run_extract(from, file.as_deref(), strict))
        }
        Commands::Transcode { from, to, file } => {
            result_to_exit(text::run_transcode(from, to, file.as_deref()))
        }
        Commands::Formats => {
            formats::run_formats();
            0
        }
        Commands::Library {
            file,
            search,
            category,
            tag,
            json,
        } => {
            let options = LibraryOptions {
                file: file.as_deref(),
                search,
                category,
                tag,
                json,
            };
            result_to_exit(run_library_with_config(&options))
        }
        Commands::Config => result_to_exit(config::run_config(&ConfigLoader::new())),
    }
}

/// Load the configuration, then list the library under it.
fn run_library_with_config(options: &LibraryOptions<'_>) -> promptdeck_common::Result<()> {
    let editor_config = ConfigLoader::new().load()?;
    library::run_library(options, &editor_config)
}

/// Convert a `Result<(), E: Error>` to an exit code, printing the cause chain.
///
/// The error's severity picks the log level and the exit code.
fn result_to_exit<E: Error + Severity>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            let severity = e.severity();
            match severity {
                ErrorSeverity::Warning => tracing::warn!("Command rejected: {}", e),
                ErrorSeverity::Error => tracing::error!("Command failed: {}", e),
                ErrorSeverity::Critical => tracing::error!("Critical failure: {}", e),
            }
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  Caused by: {}", cause);
                source = cause.source();
            }
            exit_code(severity)
        }
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning | ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}
