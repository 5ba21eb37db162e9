//! Source model extractor.
//!
//! Parses one Go source unit and produces the records and endpoints that
//! both emitters consume.

use crate::syntax::parse_file;
use crate::records::build_records;
use crate::routes::RouteTable;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tsgen_core::{Diagnostic, Error, Extraction, HANDLER_PREFIX, Result};

/// Extracts records and endpoints from Go source.
///
/// # Examples
///
/// ```
/// use tsgen_source::{Extractor, RouteTable};
///
/// let routes = RouteTable::builtin();
/// let extraction = Extractor::new(&routes)
///     .extract(r#"
/// package main
///
/// type User struct {
///     ID uint `json:"id"`
/// }
///
/// func handleGetUser() {}
/// func handleUnknown() {}
/// "#)
///     .unwrap();
///
/// assert_eq!(extraction.records.len(), 1);
/// assert_eq!(extraction.endpoints.len(), 1);
/// assert_eq!(extraction.diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    routes: &'a RouteTable,
}

impl<'a> Extractor<'a> {
    /// Creates an extractor resolving handlers through `routes`.
    #[must_use]
    pub const fn new(routes: &'a RouteTable) -> Self {
        Self { routes }
    }

    /// Extracts the model from source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if the source cannot be parsed.
    pub fn extract(&self, source: &str) -> Result<Extraction> {
        let file = parse_file(source)?;
        let mut diagnostics = Vec::new();

        let records = build_records(&file, &mut diagnostics);

        let mut endpoints = Vec::new();
        for func in file.functions() {
            if !func.name.starts_with(HANDLER_PREFIX) {
                continue;
            }
            match self.routes.endpoint(&func.name) {
                Some(endpoint) => {
                    tracing::debug!(
                        handler = %func.name,
                        method = %endpoint.method,
                        path = %endpoint.path,
                        "Resolved handler"
                    );
                    endpoints.push(endpoint);
                }
                None => diagnostics.push(Diagnostic::UnresolvedHandler {
                    handler: func.name.clone(),
                }),
            }
        }

        let record_names: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        let unknown: BTreeSet<&str> = endpoints
            .iter()
            .flat_map(|e| [e.request_type.import_name(), e.response_type.import_name()])
            .flatten()
            .filter(|name| !record_names.contains(name))
            .collect();
        diagnostics.extend(unknown.into_iter().map(|name| Diagnostic::UnknownImport {
            type_name: name.to_string(),
        }));

        for diagnostic in &diagnostics {
            tracing::debug!(kind = diagnostic.kind(), "{diagnostic}");
        }

        tracing::debug!(
            package = %file.package,
            records = records.len(),
            endpoints = endpoints.len(),
            "Extracted source model"
        );

        Ok(Extraction {
            package: file.package,
            records,
            endpoints,
            diagnostics,
        })
    }

    /// Reads and extracts a source file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::ParseError`] if it cannot be parsed.
    pub fn extract_file(&self, path: &Path) -> Result<Extraction> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Parsing Go source");
        self.extract(&source)
    }
}
