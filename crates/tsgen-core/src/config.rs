//! Generator configuration.
//!
//! Defaults reproduce the fixed layout of the backend/web repository: the
//! generator runs inside `backend/`, reads `main.go` and writes into the
//! sibling `web/` project. An optional `tsgen.toml` next to the source can
//! move any of these paths, declare routes for handlers that the built-in
//! route table does not know about, and map extra Go types.
//!
//! # Examples
//!
//! ```
//! use tsgen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     base_url = "https://api.example.com"
//!
//!     [[routes]]
//!     handler = "handleGetMilestones"
//!     method = "GET"
//!     path = "/api/projects/:id/milestones"
//!     response = "Milestone[]"
//!
//!     [types]
//!     "uuid.UUID" = "string"
//! "#).unwrap();
//!
//! assert_eq!(config.base_url, "https://api.example.com");
//! assert_eq!(config.routes.len(), 1);
//! assert_eq!(config.types["uuid.UUID"], "string");
//! assert_eq!(config.source.to_str(), Some("main.go"));
//! ```

use crate::{Error, HANDLER_PREFIX, HttpMethod, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tsgen.toml";

const DEFAULT_SOURCE: &str = "main.go";
const DEFAULT_TYPES_OUTPUT: &str = "../web/src/types/api.ts";
const DEFAULT_CLIENT_OUTPUT: &str = "../web/src/utils/apiClient.ts";
const DEFAULT_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_REGENERATE_COMMAND: &str = "cd backend && tsgen generate";
const DEFAULT_TYPES_IMPORT: &str = "../types/api";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Go source file to read.
    ///
    /// Default: `main.go`
    pub source: PathBuf,

    /// Output path of the TypeScript declarations.
    ///
    /// Default: `../web/src/types/api.ts`
    pub types_output: PathBuf,

    /// Output path of the API client.
    ///
    /// Default: `../web/src/utils/apiClient.ts`
    pub client_output: PathBuf,

    /// Default `baseURL` of the generated client.
    ///
    /// Default: `http://localhost:3001`
    pub base_url: String,

    /// Command quoted in the do-not-edit header of both files.
    pub regenerate_command: String,

    /// Module specifier the client imports record types from.
    ///
    /// Default: `../types/api`
    pub types_import: String,

    /// Use the Go field name when a field has no `json` tag.
    ///
    /// Off by default, which keeps the empty key that earlier SDKs were
    /// generated with.
    pub fallback_to_field_name: bool,

    /// Extra route table entries. They override built-in entries with the
    /// same handler name.
    pub routes: Vec<RouteConfig>,

    /// Extra type table entries keyed by Go type text (`uuid.UUID`,
    /// `*decimal.Decimal`). They override built-in entries.
    pub types: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            types_output: PathBuf::from(DEFAULT_TYPES_OUTPUT),
            client_output: PathBuf::from(DEFAULT_CLIENT_OUTPUT),
            base_url: DEFAULT_BASE_URL.to_string(),
            regenerate_command: DEFAULT_REGENERATE_COMMAND.to_string(),
            types_import: DEFAULT_TYPES_IMPORT.to_string(),
            fallback_to_field_name: false,
            routes: Vec::new(),
            types: BTreeMap::new(),
        }
    }
}

/// A route declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Handler function name, e.g. `handleGetMilestones`
    pub handler: String,
    /// HTTP method name
    pub method: String,
    /// URL path, `:name` segments become client parameters
    pub path: String,
    /// Request payload (`void`, `any`, `Name` or `Name[]`)
    #[serde(default = "default_request")]
    pub request: String,
    /// Response payload (`void`, `any`, `Name` or `Name[]`)
    #[serde(default = "default_response")]
    pub response: String,
}

fn default_request() -> String {
    "void".to_string()
}

fn default_response() -> String {
    "any".to_string()
}

impl GeneratorConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the document is not valid TOML,
    /// contains unknown keys, or fails [`GeneratorConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("invalid {CONFIG_FILE_NAME}: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::ConfigError`] if its content is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded generator configuration");
        Self::from_toml_str(&content)
    }

    /// Loads `tsgen.toml` from `dir` if present, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is invalid.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!("No {CONFIG_FILE_NAME} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks paths, URL, route declarations and type overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        for (key, path) in [
            ("source", &self.source),
            ("types_output", &self.types_output),
            ("client_output", &self.client_output),
        ] {
            if path.as_os_str().is_empty() {
                return Err(config_error(format!("'{key}' cannot be empty")));
            }
        }

        if self.base_url.trim().is_empty() {
            return Err(config_error("'base_url' cannot be empty"));
        }

        if self.types_import.trim().is_empty() {
            return Err(config_error("'types_import' cannot be empty"));
        }

        for (go, typescript) in &self.types {
            if go.trim().is_empty() || typescript.trim().is_empty() {
                return Err(config_error(format!(
                    "type override '{go}' = '{typescript}' must name both types"
                )));
            }
        }

        let mut seen = HashSet::new();
        for route in &self.routes {
            route.validate()?;
            if !seen.insert(route.handler.as_str()) {
                return Err(config_error(format!(
                    "route for '{}' is declared more than once",
                    route.handler
                )));
            }
        }

        Ok(())
    }
}

impl RouteConfig {
    /// Checks a single route declaration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the handler name does not follow the
    /// `handle<Name>` convention, the method is unknown, or the path is not
    /// absolute.
    pub fn validate(&self) -> Result<()> {
        match self.handler.strip_prefix(HANDLER_PREFIX) {
            Some(rest) if !rest.is_empty() => {}
            _ => {
                return Err(config_error(format!(
                    "route handler '{}' must be named handle<Name>",
                    self.handler
                )));
            }
        }

        self.method
            .parse::<HttpMethod>()
            .map_err(|e| config_error(format!("route '{}': {e}", self.handler)))?;

        if !self.path.starts_with('/') {
            return Err(config_error(format!(
                "route '{}': path '{}' must start with '/'",
                self.handler, self.path
            )));
        }

        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> Error {
    Error::ConfigError {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_repository_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(config.source, PathBuf::from("main.go"));
        assert_eq!(config.types_output, PathBuf::from("../web/src/types/api.ts"));
        assert_eq!(
            config.client_output,
            PathBuf::from("../web/src/utils/apiClient.ts")
        );
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.types_import, "../types/api");
        assert!(!config.fallback_to_field_name);
        assert!(config.routes.is_empty());
        assert!(config.types.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            source = "cmd/server/main.go"
            fallback_to_field_name = true
            "#,
        )
        .unwrap();
        assert_eq!(config.source, PathBuf::from("cmd/server/main.go"));
        assert!(config.fallback_to_field_name);
        assert_eq!(config.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_route_payload_defaults() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            [[routes]]
            handler = "handleHealth"
            method = "get"
            path = "/health"
            "#,
        )
        .unwrap();
        let route = &config.routes[0];
        assert_eq!(route.request, "void");
        assert_eq!(route.response, "any");
    }

    #[test]
    fn test_type_overrides_table() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            types_import = "@/types/api"

            [types]
            "uuid.UUID" = "string"
            "*decimal.Decimal" = "string | null"
            "#,
        )
        .unwrap();
        assert_eq!(config.types_import, "@/types/api");
        assert_eq!(config.types.len(), 2);
        assert_eq!(config.types["*decimal.Decimal"], "string | null");
    }

    #[test]
    fn test_empty_type_override_rejected() {
        let err = GeneratorConfig::from_toml_str("[types]\n\"uuid.UUID\" = \"\"\n").unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("uuid.UUID"));
    }

    #[test]
    fn test_empty_types_import_rejected() {
        let config = GeneratorConfig {
            types_import: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GeneratorConfig::from_toml_str("output_dir = \"web\"").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_route_method_rejected() {
        let err = GeneratorConfig::from_toml_str(
            r#"
            [[routes]]
            handler = "handleTrace"
            method = "TRACE"
            path = "/trace"
            "#,
        )
        .unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("handleTrace"));
    }

    #[test]
    fn test_route_handler_must_follow_convention() {
        for handler in ["getUser", "handle"] {
            let route = RouteConfig {
                handler: handler.to_string(),
                method: "GET".to_string(),
                path: "/api/users".to_string(),
                request: default_request(),
                response: default_response(),
            };
            assert!(route.validate().is_err(), "{handler} should be rejected");
        }
    }

    #[test]
    fn test_relative_route_path_rejected() {
        let route = RouteConfig {
            handler: "handleGetUser".to_string(),
            method: "GET".to_string(),
            path: "api/users".to_string(),
            request: default_request(),
            response: default_response(),
        };
        assert!(route.validate().is_err());
    }

    #[test]
    fn test_duplicate_routes_rejected() {
        let err = GeneratorConfig::from_toml_str(
            r#"
            [[routes]]
            handler = "handleGetUser"
            method = "GET"
            path = "/api/users/:id"

            [[routes]]
            handler = "handleGetUser"
            method = "GET"
            path = "/api/users"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let config = GeneratorConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "base_url = \"http://api.internal:8080\"\n",
        )
        .unwrap();

        let config = GeneratorConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.base_url, "http://api.internal:8080");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = GeneratorConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = GeneratorConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.is_io_error());
    }
}
