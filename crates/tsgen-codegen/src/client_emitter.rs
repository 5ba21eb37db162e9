//! Client emitter: renders endpoints as methods of a fetch-based client.

use crate::template_engine::{CLIENT_TEMPLATE, TemplateEngine};
use crate::types::{ClientContext, MethodContext};
use crate::typescript::{method_name, path_expression, path_params, string_literal};
use std::collections::{BTreeSet, HashSet};
use tsgen_core::{EndpointDescription, PayloadType, RecordDescription, Result};

/// Module specifier the client imports declarations from.
pub const DEFAULT_TYPES_IMPORT: &str = "../types/api";

/// Renders the API client.
///
/// # Examples
///
/// ```
/// use tsgen_codegen::{ClientEmitter, TemplateEngine};
/// use tsgen_core::{EndpointDescription, HttpMethod, PayloadType};
///
/// let endpoint = EndpointDescription {
///     method: HttpMethod::Get,
///     path: "/health".to_string(),
///     handler_name: "handleHealth".to_string(),
///     request_type: PayloadType::Void,
///     response_type: PayloadType::Any,
/// };
///
/// let engine = TemplateEngine::new().unwrap();
/// let output = ClientEmitter::new("make sdk", "http://localhost:3001")
///     .render(&engine, &[endpoint], &[])
///     .unwrap();
/// assert!(output.contains("async health(): Promise<any> {"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClientEmitter<'a> {
    regenerate_command: &'a str,
    base_url: &'a str,
    types_import: &'a str,
}

impl<'a> ClientEmitter<'a> {
    /// Creates an emitter importing from [`DEFAULT_TYPES_IMPORT`].
    #[must_use]
    pub const fn new(regenerate_command: &'a str, base_url: &'a str) -> Self {
        Self {
            regenerate_command,
            base_url,
            types_import: DEFAULT_TYPES_IMPORT,
        }
    }

    /// Sets the module specifier of the declaration file.
    #[must_use]
    pub const fn types_import(mut self, specifier: &'a str) -> Self {
        self.types_import = specifier;
        self
    }

    /// Returns the sorted names to import: every record referenced by an
    /// endpoint payload. Names that are not records are left out.
    #[must_use]
    pub fn imports(endpoints: &[EndpointDescription], records: &[RecordDescription]) -> Vec<String> {
        let known: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        let referenced: BTreeSet<&str> = endpoints
            .iter()
            .flat_map(|e| [e.request_type.import_name(), e.response_type.import_name()])
            .flatten()
            .collect();

        referenced
            .into_iter()
            .filter(|name| {
                let found = known.contains(name);
                if !found {
                    tracing::debug!(type_name = %name, "Dropping import of unknown type");
                }
                found
            })
            .map(str::to_string)
            .collect()
    }

    /// Builds the template context.
    #[must_use]
    pub fn context(&self, endpoints: &[EndpointDescription], records: &[RecordDescription]) -> ClientContext {
        ClientContext {
            regenerate_command: self.regenerate_command.to_string(),
            import_list: Self::imports(endpoints, records).join(", "),
            types_import: self.types_import.to_string(),
            base_url: string_literal(self.base_url),
            methods: endpoints.iter().map(method_context).collect(),
        }
    }

    /// Renders the client file.
    ///
    /// # Errors
    ///
    /// Returns [`tsgen_core::Error::TemplateError`] if rendering fails.
    pub fn render(
        &self,
        engine: &TemplateEngine<'_>,
        endpoints: &[EndpointDescription],
        records: &[RecordDescription],
    ) -> Result<String> {
        let context = self.context(endpoints, records);
        let output = engine.render(CLIENT_TEMPLATE, &context)?;
        tracing::debug!(methods = endpoints.len(), "Rendered API client");
        Ok(output)
    }
}

fn method_context(endpoint: &EndpointDescription) -> MethodContext {
    let has_body = endpoint.method.has_body() && endpoint.request_type != PayloadType::Void;

    let mut params: Vec<String> = path_params(&endpoint.path)
        .into_iter()
        .map(|name| format!("{name}: string | number"))
        .collect();
    if has_body {
        params.push(format!("data: {}", endpoint.request_type));
    }

    MethodContext {
        name: method_name(&endpoint.handler_name),
        params: params.join(", "),
        response_type: endpoint.response_type.to_string(),
        path_expr: path_expression(&endpoint.path),
        method: endpoint.method.to_string(),
        has_body,
    }
}
