//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in templates for
//! the declaration file and the API client pre-registered.
//!
//! # Examples
//!
//! ```
//! use tsgen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("banner", "// {{title}}").unwrap();
//! let result = engine.render("banner", &json!({"title": "a < b"})).unwrap();
//! assert_eq!(result, "// a < b");
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use tsgen_core::{Error, Result};

/// Name of the declaration file template.
pub const TYPES_TEMPLATE: &str = "types";

/// Name of the API client template.
pub const CLIENT_TEMPLATE: &str = "client";

/// Template engine for code generation.
///
/// Rendering is strict (missing variables are errors) and never
/// HTML-escapes, since the output is TypeScript.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsgen_codegen::template_engine::TemplateEngine;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut engine = Self { handlebars };
        engine.register_template_string(TYPES_TEMPLATE, include_str!("../templates/types.ts.hbs"))?;
        engine.register_template_string(CLIENT_TEMPLATE, include_str!("../templates/client.ts.hbs"))?;

        Ok(engine)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("rendering '{template_name}' failed: {e}"),
            })
    }

    /// Registers a custom template, replacing any template of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("failed to register template '{name}': {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // Template Engine Creation Tests
    // ========================================================================

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.has_template(TYPES_TEMPLATE));
        assert!(engine.has_template(CLIENT_TEMPLATE));
    }

    // ========================================================================
    // Built-in Template Tests
    // ========================================================================

    #[test]
    fn test_render_types_template() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "regenerate_command": "make sdk",
            "records": [{
                "name": "User",
                "fields": [
                    {"key": "id", "ts_type": "number", "required": true},
                    {"key": "bio", "ts_type": "string | null", "required": true},
                    {"key": "nickname", "ts_type": "string", "required": false}
                ]
            }]
        });

        let rendered = engine.render(TYPES_TEMPLATE, &context).unwrap();
        assert!(rendered.contains("regenerate with: make sdk"));
        assert!(rendered.contains(
            "export interface User {\n  id: number;\n  bio: string | null;\n  nickname: string | null;\n}"
        ));
    }

    #[test]
    fn test_render_client_template_without_imports() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "regenerate_command": "make sdk",
            "import_list": "",
            "types_import": "../types/api",
            "base_url": "'http://localhost:3001'",
            "methods": []
        });

        let rendered = engine.render(CLIENT_TEMPLATE, &context).unwrap();
        assert!(!rendered.contains("import type"));
        assert!(rendered.contains("const API_BASE_URL = 'http://localhost:3001';"));
        assert!(rendered.contains("export { APIClient };"));
    }

    #[test]
    fn test_no_html_escaping() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("t", "{{value}}")
            .unwrap();
        let rendered = engine.render("t", &json!({"value": "Promise<User[]> & 'x'"})).unwrap();
        assert_eq!(rendered, "Promise<User[]> & 'x'");
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render(TYPES_TEMPLATE, &json!({"records": []})).unwrap_err();
        assert!(err.is_template_error());
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("nonexistent", &json!({})).unwrap_err();
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn test_invalid_template_registration() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template_string("broken", "{{#each items}}");
        assert!(result.is_err());
    }
}
