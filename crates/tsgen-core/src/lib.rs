//! Core types, configuration, and errors for tsgen.
//!
//! This crate provides the foundational types shared by the source
//! extractor, the code generator, and the CLI.
//!
//! # Architecture
//!
//! The core consists of:
//! - The intermediate model (`RecordDescription`, `EndpointDescription`,
//!   `TypeExpr`, `PayloadType`)
//! - Diagnostics reported by best-effort extraction steps
//! - Error hierarchy with contextual information
//! - Generator configuration loaded from `tsgen.toml`
//! - CLI exit codes and output formats

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod diagnostics;
mod error;
mod types;

pub mod cli;

pub use config::{CONFIG_FILE_NAME, GeneratorConfig, RouteConfig};
pub use diagnostics::Diagnostic;
pub use error::{Error, Result};
pub use types::{
    EndpointDescription, HANDLER_PREFIX, Extraction, FieldDescription, HttpMethod, PayloadType,
    RecordDescription, TypeExpr,
};
