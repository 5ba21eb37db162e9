//! Command implementations for the tsgen CLI.
//!
//! Each command loads what it needs, runs the pipeline and reports through
//! the shared formatters, returning the process exit code.

pub mod common;
pub mod completions;
pub mod generate;
pub mod inspect;
