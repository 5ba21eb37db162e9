//! tsgen - TypeScript SDK generator for the Go backend.
//!
//! Reads the backend's Go source and writes the TypeScript declarations
//! and the fetch-based API client used by the web frontend.
//!
//! # Examples
//!
//! ```bash
//! # Regenerate the SDK from inside backend/
//! tsgen
//!
//! # Show what would be generated
//! tsgen inspect --format json
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tsgen_cli::{Cli, Commands, commands};
use tsgen_core::cli::{ExitCode, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(cli.command_or_default(), output_format)?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honored with
/// `info` as the fallback. Logs go to stderr so stdout stays parseable.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate(args) => commands::generate::run(&args, output_format),
        Commands::Inspect { source, config } => {
            commands::inspect::run(source.as_deref(), config.as_deref(), output_format)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            Ok(commands::completions::run(shell, &mut cmd))
        }
    }
}
