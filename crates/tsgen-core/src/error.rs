//! Error types for tsgen.
//!
//! One error hierarchy is shared by every library crate in the workspace,
//! carrying enough context (source positions, paths) to be reported
//! directly to the user.
//!
//! # Examples
//!
//! ```
//! use tsgen_core::{Error, Result};
//!
//! fn check_source(path: &str) -> Result<()> {
//!     if path.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "source path cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_source("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for tsgen.
#[derive(Error, Debug)]
pub enum Error {
    /// Go source could not be parsed.
    ///
    /// Raised for syntax errors, a missing package clause, or statements
    /// at top level. Positions are 1-based.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Line of the offending token
        line: usize,
        /// Column of the offending token
        column: usize,
        /// Description of what was expected or found
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when `tsgen.toml` is malformed or contains invalid values.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },

    /// Filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path that was being read or written
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a source parse error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsgen_core::Error;
    ///
    /// let err = Error::ParseError {
    ///     line: 3,
    ///     column: 7,
    ///     message: "expected '}'".to_string(),
    /// };
    /// assert!(err.is_parse_error());
    /// ```
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a filesystem error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the error was caused by user input rather than the
    /// environment: unparseable source, bad configuration, or bad arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsgen_core::Error;
    ///
    /// assert!(Error::InvalidArgument("x".into()).is_input_error());
    /// assert!(!Error::TemplateError { message: "x".into() }.is_input_error());
    /// ```
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ParseError { .. } | Self::ConfigError { .. } | Self::InvalidArgument(_)
        )
    }
}

/// Result type alias for tsgen operations.
pub type Result<T> = std::result::Result<T, Error>;
