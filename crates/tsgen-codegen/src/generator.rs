//! TypeScript SDK generator.
//!
//! Produces the declaration file and the API client from one
//! [`Extraction`]. The two artifacts are rendered independently from the
//! same read-only model, so they agree on every record name.
//!
//! # Examples
//!
//! ```
//! use tsgen_codegen::{Artifact, TypeScriptGenerator};
//! use tsgen_core::{Extraction, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let generator = TypeScriptGenerator::new(&config).unwrap();
//! let code = generator.generate(&Extraction::default()).unwrap();
//!
//! assert_eq!(code.file_count(), 2);
//! let client = code.file(Artifact::Client).unwrap();
//! assert!(client.content.contains("export const apiClient = new APIClient();"));
//! ```

use crate::client_emitter::ClientEmitter;
use crate::template_engine::TemplateEngine;
use crate::type_map::TypeMap;
use crate::types::{Artifact, GeneratedCode, GeneratedFile};
use crate::types_emitter::TypesEmitter;
use tsgen_core::{Extraction, GeneratorConfig, Result};

/// Generator for the declaration file and the API client.
#[derive(Debug)]
pub struct TypeScriptGenerator<'a> {
    engine: TemplateEngine<'a>,
    type_map: TypeMap,
    config: GeneratorConfig,
}

impl TypeScriptGenerator<'_> {
    /// Creates a generator with the built-in templates. The type table is
    /// the built-in one with the configured `[types]` entries applied.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let type_map = config
            .types
            .iter()
            .fold(TypeMap::builtin(), |map, (go, typescript)| {
                map.with_entry(go.as_str(), typescript.as_str())
            });
        if !config.types.is_empty() {
            tracing::debug!(overrides = config.types.len(), "Applied type overrides");
        }

        Ok(Self {
            engine: TemplateEngine::new()?,
            type_map,
            config: config.clone(),
        })
    }

    /// Returns the type mapping table in use.
    #[must_use]
    pub const fn type_map(&self) -> &TypeMap {
        &self.type_map
    }

    /// Renders the declaration file.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn generate_types(&self, extraction: &Extraction) -> Result<String> {
        TypesEmitter::new(&self.type_map, &self.config.regenerate_command)
            .fallback_to_field_name(self.config.fallback_to_field_name)
            .render(&self.engine, &extraction.records)
    }

    /// Renders the API client.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn generate_client(&self, extraction: &Extraction) -> Result<String> {
        ClientEmitter::new(&self.config.regenerate_command, &self.config.base_url)
            .types_import(&self.config.types_import)
            .render(&self.engine, &extraction.endpoints, &extraction.records)
    }

    /// Renders both artifacts with their configured output paths.
    ///
    /// # Errors
    ///
    /// Returns error if either template fails to render.
    pub fn generate(&self, extraction: &Extraction) -> Result<GeneratedCode> {
        tracing::info!(
            records = extraction.records.len(),
            endpoints = extraction.endpoints.len(),
            "Generating TypeScript SDK"
        );

        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile {
            artifact: Artifact::Types,
            path: self.config.types_output.clone(),
            content: self.generate_types(extraction)?,
        });
        code.add_file(GeneratedFile {
            artifact: Artifact::Client,
            path: self.config.client_output.clone(),
            content: self.generate_client(extraction)?,
        });

        Ok(code)
    }
}
