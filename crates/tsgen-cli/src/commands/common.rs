//! Helpers shared by the generate and inspect commands.

use std::path::Path;
use tracing::warn;
use tsgen_core::cli::ExitCode;
use tsgen_core::{Error, Extraction, GeneratorConfig, Result};
use tsgen_source::{Extractor, RouteTable};

/// Loads the configuration from `path`, or `./tsgen.toml` when present.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid. A missing
/// `./tsgen.toml` is not an error; an explicitly given path that does not
/// exist is.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    path.map_or_else(
        || GeneratorConfig::load_or_default(Path::new(".")),
        GeneratorConfig::load,
    )
}

/// Builds the route table from `config` and extracts its source file.
///
/// # Errors
///
/// Returns an error if a configured route is invalid, the source cannot be
/// read, or it cannot be parsed.
pub fn extract(config: &GeneratorConfig) -> Result<Extraction> {
    let routes = RouteTable::with_overrides(&config.routes)?;
    Extractor::new(&routes).extract_file(&config.source)
}

/// Logs every diagnostic of `extraction` at warn level.
pub fn log_diagnostics(extraction: &Extraction) {
    for diagnostic in &extraction.diagnostics {
        warn!(kind = diagnostic.kind(), "{diagnostic}");
    }
}

/// Maps a failure before any output was produced to an exit code.
///
/// Anything the user can fix in their input (including a source file that
/// cannot be read) is [`ExitCode::INVALID_INPUT`]; the rest is
/// [`ExitCode::ERROR`].
#[must_use]
pub const fn exit_code_for(err: &Error) -> ExitCode {
    if err.is_input_error() || err.is_io_error() {
        ExitCode::INVALID_INPUT
    } else {
        ExitCode::ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        let parse = Error::ParseError {
            line: 1,
            column: 1,
            message: "expected 'package'".to_string(),
        };
        assert_eq!(exit_code_for(&parse), ExitCode::INVALID_INPUT);

        let config = Error::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(exit_code_for(&config), ExitCode::INVALID_INPUT);

        let template = Error::TemplateError {
            message: "bad".to_string(),
        };
        assert_eq!(exit_code_for(&template), ExitCode::ERROR);
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "source = \"server.go\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.source, Path::new("server.go"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_extract_uses_configured_routes() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("main.go");
        fs::write(
            &source,
            "package main\n\nfunc handleHealth() {}\n",
        )
        .unwrap();

        let config = GeneratorConfig::from_toml_str(&format!(
            r#"
            source = "{}"

            [[routes]]
            handler = "handleHealth"
            method = "GET"
            path = "/health"
            "#,
            source.display().to_string().replace('\\', "/")
        ))
        .unwrap();

        let extraction = extract(&config).unwrap();
        assert_eq!(extraction.endpoints.len(), 1);
        assert_eq!(extraction.endpoints[0].path, "/health");
        assert!(extraction.diagnostics.is_empty());
    }

    #[test]
    fn test_extract_missing_source() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig {
            source: dir.path().join("missing.go"),
            ..Default::default()
        };
        let err = extract(&config).unwrap_err();
        assert!(err.is_io_error());
    }
}
