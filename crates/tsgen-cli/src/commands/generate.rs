//! Generate command implementation.
//!
//! Runs the whole pipeline:
//! 1. Loads `tsgen.toml` (or `--config`) and applies the command-line flags
//! 2. Parses the Go source and resolves its handlers
//! 3. Renders the declaration file and the API client
//! 4. Writes each artifact, independently of the other
//!
//! A file that cannot be written is logged and left out; the run still
//! succeeds with partial output. An output directory that cannot be
//! created fails the run with [`ExitCode::OUTPUT_ERROR`].

use super::common::{exit_code_for, extract, load_config, log_diagnostics};
use crate::cli::GenerateArgs;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info, warn};
use tsgen_codegen::{GeneratedFile, TypeScriptGenerator};
use tsgen_core::GeneratorConfig;
use tsgen_core::cli::{ExitCode, OutputFormat};

/// Summary of a generation run.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    /// Go source that was read
    pub source: String,
    /// Number of records emitted as interfaces
    pub records: usize,
    /// Number of endpoints emitted as client methods
    pub endpoints: usize,
    /// Number of non-fatal findings
    pub diagnostics: usize,
    /// Outcome per artifact
    pub files: Vec<FileReport>,
}

/// Outcome of writing one artifact.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// `types` or `client`
    pub artifact: String,
    /// Destination path
    pub path: String,
    /// Content size in bytes
    pub bytes: usize,
    /// What happened to the file
    pub status: FileStatus,
    /// Write error, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of writing one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// The file was written
    Written,
    /// The directory exists but the file could not be written
    WriteFailed,
    /// The output directory could not be created
    DirectoryFailed,
}

impl GenerationReport {
    /// Returns `true` if every artifact was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.files.iter().all(|f| f.status == FileStatus::Written)
    }

    /// Returns `true` if an output directory could not be created.
    #[must_use]
    pub fn has_directory_failure(&self) -> bool {
        self.files
            .iter()
            .any(|f| f.status == FileStatus::DirectoryFailed)
    }
}

/// Runs the generate command and prints its report.
///
/// # Errors
///
/// Returns an error if the templates cannot be initialized or rendered, or
/// the report cannot be formatted. Input and write failures are logged and
/// reported through the exit code instead.
///
/// # Examples
///
/// ```no_run
/// use tsgen_cli::GenerateArgs;
/// use tsgen_cli::commands::generate;
/// use tsgen_core::cli::{ExitCode, OutputFormat};
///
/// let code = generate::run(&GenerateArgs::default(), OutputFormat::Pretty)?;
/// assert_eq!(code, ExitCode::SUCCESS);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn run(args: &GenerateArgs, output_format: OutputFormat) -> Result<ExitCode> {
    let config = match resolve_config(args) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return Ok(exit_code_for(&err));
        }
    };

    let Some(report) = generate(&config)? else {
        return Ok(ExitCode::INVALID_INPUT);
    };

    println!("{}", format_output(&report, output_format)?);

    Ok(exit_code(&report))
}

/// Maps a finished run to its exit code.
#[must_use]
pub fn exit_code(report: &GenerationReport) -> ExitCode {
    if report.has_directory_failure() {
        return ExitCode::OUTPUT_ERROR;
    }
    if report.is_complete() {
        info!(
            records = report.records,
            endpoints = report.endpoints,
            "TypeScript SDK generated"
        );
    } else {
        warn!("TypeScript SDK generated with missing files");
    }
    ExitCode::SUCCESS
}

/// Loads the configuration and applies the command-line overrides.
///
/// # Errors
///
/// Returns an error if the configuration file is unreadable or the merged
/// configuration is invalid.
pub fn resolve_config(args: &GenerateArgs) -> tsgen_core::Result<GeneratorConfig> {
    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Extracts, renders and writes both artifacts.
///
/// Returns `None` if the source could not be read or parsed; nothing is
/// written in that case.
///
/// # Errors
///
/// Returns an error if template initialization or rendering fails.
pub fn generate(config: &GeneratorConfig) -> Result<Option<GenerationReport>> {
    let extraction = match extract(config) {
        Ok(extraction) => extraction,
        Err(err) => {
            error!(source = %config.source.display(), "{err}");
            return Ok(None);
        }
    };
    log_diagnostics(&extraction);

    let generator =
        TypeScriptGenerator::new(config).context("failed to initialize TypeScript templates")?;
    let code = generator
        .generate(&extraction)
        .context("failed to render TypeScript SDK")?;

    Ok(Some(GenerationReport {
        source: config.source.display().to_string(),
        records: extraction.records.len(),
        endpoints: extraction.endpoints.len(),
        diagnostics: extraction.diagnostics.len(),
        files: code.files().map(write_file).collect(),
    }))
}

fn write_file(file: &GeneratedFile) -> FileReport {
    let (status, result) = match file.create_parent_dir() {
        Err(err) => (FileStatus::DirectoryFailed, Err(err)),
        Ok(()) => match file.write_contents() {
            Ok(()) => (FileStatus::Written, Ok(())),
            Err(err) => (FileStatus::WriteFailed, Err(err)),
        },
    };
    if let Err(err) = &result {
        error!(artifact = %file.artifact, "{err}");
    }

    FileReport {
        artifact: file.artifact.to_string(),
        path: file.path.display().to_string(),
        bytes: file.content.len(),
        status,
        error: result.err().map(|e| e.to_string()),
    }
}
