//! Endpoint resolver.
//!
//! Handler functions carry no route metadata in source, so the HTTP method,
//! path and payload types are looked up by handler name. The built-in
//! table covers the backend's handlers; configuration can add or replace
//! entries. A table is immutable once built.
//!
//! # Examples
//!
//! ```
//! use tsgen_core::{HttpMethod, PayloadType};
//! use tsgen_source::RouteTable;
//!
//! let routes = RouteTable::builtin();
//! let endpoint = routes.endpoint("handleGetProjects").unwrap();
//! assert_eq!(endpoint.method, HttpMethod::Get);
//! assert_eq!(endpoint.path, "/api/projects");
//! assert_eq!(endpoint.response_type, PayloadType::parse("Project[]"));
//!
//! assert!(routes.endpoint("handleDeleteProject").is_none());
//! ```

use std::collections::HashMap;
use tsgen_core::{EndpointDescription, Error, HttpMethod, PayloadType, Result, RouteConfig};

/// Method and path of a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// HTTP method
    pub method: HttpMethod,
    /// URL path
    pub path: String,
}

/// Lookup tables from handler name to route and payload types.
///
/// Route and payload lookups are independent: a handler can have payload
/// types without a route, and vice versa.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Route>,
    requests: HashMap<String, PayloadType>,
    responses: HashMap<String, PayloadType>,
}

// handler, method, path, request, response
const BUILTIN_ROUTES: &[(&str, HttpMethod, &str, &str, &str)] = &[
    ("handleAuthInvite", HttpMethod::Post, "/api/auth/invite", "AuthRequest", "AuthResponse"),
    ("handleGetUser", HttpMethod::Get, "/api/users", "void", "User"),
    ("handleGetProjects", HttpMethod::Get, "/api/projects", "void", "Project[]"),
    ("handleGetProject", HttpMethod::Get, "/api/projects", "void", "Project"),
];

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table of the backend's known handlers.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for &(handler, method, path, request, response) in BUILTIN_ROUTES {
            table.insert(
                handler,
                Route {
                    method,
                    path: path.to_string(),
                },
                PayloadType::parse(request),
                PayloadType::parse(response),
            );
        }
        table
    }

    /// Creates the built-in table extended with configured routes.
    ///
    /// A configured route replaces the built-in entries of the same handler
    /// in all three lookups.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a configured route is invalid.
    pub fn with_overrides(overrides: &[RouteConfig]) -> Result<Self> {
        let mut table = Self::builtin();
        for config in overrides {
            config.validate()?;
            let method = config
                .method
                .parse::<HttpMethod>()
                .map_err(|e| Error::ConfigError {
                    message: format!("route '{}': {e}", config.handler),
                })?;

            if table.routes.contains_key(&config.handler) {
                tracing::debug!(handler = %config.handler, "Configured route replaces built-in entry");
            }

            table.insert(
                &config.handler,
                Route {
                    method,
                    path: config.path.clone(),
                },
                PayloadType::parse(&config.request),
                PayloadType::parse(&config.response),
            );
        }
        Ok(table)
    }

    fn insert(&mut self, handler: &str, route: Route, request: PayloadType, response: PayloadType) {
        self.routes.insert(handler.to_string(), route);
        self.requests.insert(handler.to_string(), request);
        self.responses.insert(handler.to_string(), response);
    }

    /// Returns the method and path of a handler.
    #[must_use]
    pub fn resolve(&self, handler: &str) -> Option<&Route> {
        self.routes.get(handler)
    }

    /// Returns the request payload of a handler, `any` when unknown.
    #[must_use]
    pub fn request_type(&self, handler: &str) -> PayloadType {
        self.requests.get(handler).cloned().unwrap_or(PayloadType::Any)
    }

    /// Returns the response payload of a handler, `any` when unknown.
    #[must_use]
    pub fn response_type(&self, handler: &str) -> PayloadType {
        self.responses.get(handler).cloned().unwrap_or(PayloadType::Any)
    }

    /// Builds the endpoint description of a handler, if it has a route.
    #[must_use]
    pub fn endpoint(&self, handler: &str) -> Option<EndpointDescription> {
        let route = self.resolve(handler)?;
        Some(EndpointDescription {
            method: route.method,
            path: route.path.clone(),
            handler_name: handler.to_string(),
            request_type: self.request_type(handler),
            response_type: self.response_type(handler),
        })
    }

    /// Number of handlers with a route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no handler has a route.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_config(handler: &str, method: &str, path: &str, request: &str, response: &str) -> RouteConfig {
        RouteConfig {
            handler: handler.to_string(),
            method: method.to_string(),
            path: path.to_string(),
            request: request.to_string(),
            response: response.to_string(),
        }
    }

    #[test]
    fn test_builtin_routes() {
        let routes = RouteTable::builtin();
        assert_eq!(routes.len(), 4);

        let invite = routes.resolve("handleAuthInvite").unwrap();
        assert_eq!(invite.method, HttpMethod::Post);
        assert_eq!(invite.path, "/api/auth/invite");
        assert_eq!(routes.request_type("handleAuthInvite"), PayloadType::parse("AuthRequest"));
        assert_eq!(routes.response_type("handleAuthInvite"), PayloadType::parse("AuthResponse"));

        assert_eq!(routes.request_type("handleGetUser"), PayloadType::Void);
        assert_eq!(routes.response_type("handleGetUser"), PayloadType::parse("User"));
        assert_eq!(routes.resolve("handleGetProject").unwrap().path, "/api/projects");
    }

    #[test]
    fn test_unknown_handler_defaults() {
        let routes = RouteTable::builtin();
        assert!(routes.resolve("handleDelete").is_none());
        assert!(routes.endpoint("handleDelete").is_none());
        assert_eq!(routes.request_type("handleDelete"), PayloadType::Any);
        assert_eq!(routes.response_type("handleDelete"), PayloadType::Any);
    }

    #[test]
    fn test_overrides_add_and_replace() {
        let routes = RouteTable::with_overrides(&[
            route_config("handleGetProject", "GET", "/api/projects/:id", "void", "Project"),
            route_config("handleCreateMilestone", "post", "/api/projects/:id/milestones", "Milestone", "Milestone"),
        ])
        .unwrap();

        assert_eq!(routes.len(), 5);
        assert_eq!(routes.resolve("handleGetProject").unwrap().path, "/api/projects/:id");

        let created = routes.endpoint("handleCreateMilestone").unwrap();
        assert_eq!(created.method, HttpMethod::Post);
        assert_eq!(created.request_type, PayloadType::parse("Milestone"));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let err = RouteTable::with_overrides(&[route_config("handleX", "TRACE", "/x", "void", "any")])
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_table() {
        let routes = RouteTable::new();
        assert!(routes.is_empty());
        assert!(routes.endpoint("handleGetUser").is_none());
    }
}
