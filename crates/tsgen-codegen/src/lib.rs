//! TypeScript code generation for tsgen.
//!
//! Renders the extracted model into two files using Handlebars templates:
//! a declaration file with one `export interface` per record, and a
//! fetch-based API client with one method per endpoint.
//!
//! # Examples
//!
//! ```
//! use tsgen_codegen::TypeScriptGenerator;
//! use tsgen_core::GeneratorConfig;
//! use tsgen_source::{Extractor, RouteTable};
//!
//! let routes = RouteTable::builtin();
//! let extraction = Extractor::new(&routes)
//!     .extract("package main\n\ntype User struct {\n\tID uint `json:\"id\"`\n}\n\nfunc handleGetUser() {}\n")
//!     .unwrap();
//!
//! let generator = TypeScriptGenerator::new(&GeneratorConfig::default()).unwrap();
//! let client = generator.generate_client(&extraction).unwrap();
//! assert!(client.contains("import type { User } from '../types/api';"));
//! assert!(client.contains("async getUser(): Promise<User> {"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod client_emitter;
pub mod generator;
pub mod template_engine;
pub mod type_map;
pub mod types;
pub mod types_emitter;
pub mod typescript;

pub use client_emitter::ClientEmitter;
pub use generator::TypeScriptGenerator;
pub use template_engine::TemplateEngine;
pub use type_map::TypeMap;
pub use types::{Artifact, GeneratedCode, GeneratedFile};
pub use types_emitter::TypesEmitter;
