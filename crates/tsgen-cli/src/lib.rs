//! tsgen CLI library.
//!
//! Argument definitions, command implementations and output formatters of
//! the `tsgen` binary, exposed as a library so they can be tested.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
pub mod commands;
pub mod formatters;

pub use cli::{Cli, Commands, GenerateArgs};
