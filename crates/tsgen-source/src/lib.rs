//! Go source extraction for tsgen.
//!
//! Reads a Go source unit and builds the intermediate model: one
//! [`RecordDescription`](tsgen_core::RecordDescription) per struct
//! declaration and one [`EndpointDescription`](tsgen_core::EndpointDescription)
//! per recognized `handle*` function.
//!
//! # Architecture
//!
//! - [`syntax`]: tree-sitter Go parse folded into the [`ast`]
//! - [`tags`]: struct tag decoding
//! - [`records`]: record model builder
//! - [`routes`]: handler name to route lookup
//! - [`extractor`]: ties the above together
//!
//! # Examples
//!
//! ```
//! use tsgen_source::{Extractor, RouteTable};
//!
//! let routes = RouteTable::builtin();
//! let extraction = Extractor::new(&routes)
//!     .extract("package main\n\nfunc handleGetUser() {}\n")
//!     .unwrap();
//!
//! assert_eq!(extraction.package, "main");
//! assert_eq!(extraction.endpoints[0].path, "/api/users");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod ast;
pub mod error;
pub mod extractor;
pub mod records;
pub mod routes;
pub mod syntax;
pub mod tags;

pub use error::{ParseError, Position};
pub use extractor::Extractor;
pub use routes::{Route, RouteTable};
