//! Parse errors with source positions.

use std::fmt;
use thiserror::Error;

/// 1-based line and column in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    /// Line number
    pub line: usize,
    /// Column number, counted in bytes
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Error raised while parsing Go source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The grammar could not make sense of a span of source.
    #[error("syntax error near '{near}'")]
    Syntax {
        /// First line of the offending span
        near: String,
        /// Where the span starts
        pos: Position,
    },

    /// A token or construct required by the grammar is absent.
    #[error("missing {what}")]
    Missing {
        /// What was expected
        what: String,
        /// Where it was expected
        pos: Position,
    },

    /// The file does not start with `package <name>`.
    #[error("expected package clause")]
    MissingPackage {
        /// First declaration, or the start of the file
        pos: Position,
    },

    /// Something other than a declaration at top level.
    #[error("expected declaration, found {kind}")]
    UnexpectedNode {
        /// Grammar node kind, e.g. `return statement`
        kind: String,
        /// Where it was found
        pos: Position,
    },

    /// The Go grammar could not be loaded.
    #[error("cannot load Go grammar: {message}")]
    Language {
        /// Loader message
        message: String,
    },

    /// The parser stopped without producing a tree.
    #[error("parsing was aborted")]
    Aborted,
}

impl ParseError {
    /// Returns where the error was detected, `1:1` when not tied to a
    /// location.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Syntax { pos, .. }
            | Self::Missing { pos, .. }
            | Self::MissingPackage { pos }
            | Self::UnexpectedNode { pos, .. } => *pos,
            Self::Language { .. } | Self::Aborted => Position { line: 1, column: 1 },
        }
    }
}

impl From<ParseError> for tsgen_core::Error {
    fn from(err: ParseError) -> Self {
        let pos = err.position();
        Self::ParseError {
            line: pos.line,
            column: pos.column,
            message: err.to_string(),
        }
    }
}
