//! Inspect command implementation.
//!
//! Prints the extracted records, endpoints and diagnostics without writing
//! anything, which is the quickest way to see why a handler or field is
//! missing from the generated SDK.

use super::common::{exit_code_for, extract, load_config};
use crate::formatters::format_output;
use anyhow::Result;
use std::path::Path;
use tracing::error;
use tsgen_core::cli::{ExitCode, OutputFormat};
use tsgen_core::{Extraction, GeneratorConfig};

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the extraction cannot be formatted. Input failures
/// are logged and reported through the exit code.
pub fn run(
    source: Option<&Path>,
    config: Option<&Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let extraction = match inspect(source, config) {
        Ok(extraction) => extraction,
        Err(err) => {
            error!("{err}");
            return Ok(exit_code_for(&err));
        }
    };

    println!("{}", format_output(&extraction, output_format)?);
    Ok(ExitCode::SUCCESS)
}

/// Loads the configuration and extracts the model of `source`, or of the
/// configured source when `None`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the source cannot be
/// read or parsed.
pub fn inspect(source: Option<&Path>, config: Option<&Path>) -> tsgen_core::Result<Extraction> {
    let mut config: GeneratorConfig = load_config(config)?;
    if let Some(source) = source {
        config.source = source.to_path_buf();
    }
    config.validate()?;
    extract(&config)
}
