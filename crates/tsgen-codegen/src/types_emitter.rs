//! Type emitter: renders records as `export interface` declarations.

use crate::template_engine::{TYPES_TEMPLATE, TemplateEngine};
use crate::type_map::TypeMap;
use crate::types::{FieldContext, RecordContext, TypesContext};
use tsgen_core::{FieldDescription, RecordDescription, Result};

/// Renders the declaration file.
///
/// # Examples
///
/// ```
/// use tsgen_codegen::{TemplateEngine, TypeMap, TypesEmitter};
/// use tsgen_core::{FieldDescription, RecordDescription, TypeExpr};
///
/// let record = RecordDescription {
///     name: "User".to_string(),
///     fields: vec![FieldDescription {
///         name: "ID".to_string(),
///         type_expr: TypeExpr::named("uint"),
///         serialized_name: "id".to_string(),
///         required: true,
///     }],
/// };
///
/// let engine = TemplateEngine::new().unwrap();
/// let types = TypeMap::builtin();
/// let output = TypesEmitter::new(&types, "make sdk").render(&engine, &[record]).unwrap();
/// assert!(output.contains("export interface User {\n  id: number;\n}"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypesEmitter<'a> {
    type_map: &'a TypeMap,
    regenerate_command: &'a str,
    fallback_to_field_name: bool,
}

impl<'a> TypesEmitter<'a> {
    /// Creates an emitter that keeps empty keys for untagged fields.
    #[must_use]
    pub const fn new(type_map: &'a TypeMap, regenerate_command: &'a str) -> Self {
        Self {
            type_map,
            regenerate_command,
            fallback_to_field_name: false,
        }
    }

    /// Uses the Go field name as key when the serialized name is empty.
    #[must_use]
    pub const fn fallback_to_field_name(mut self, enabled: bool) -> Self {
        self.fallback_to_field_name = enabled;
        self
    }

    /// Builds the template context.
    #[must_use]
    pub fn context(&self, records: &[RecordDescription]) -> TypesContext {
        TypesContext {
            regenerate_command: self.regenerate_command.to_string(),
            records: records
                .iter()
                .map(|record| RecordContext {
                    name: record.name.clone(),
                    fields: record.fields.iter().map(|f| self.field(f)).collect(),
                })
                .collect(),
        }
    }

    fn field(&self, field: &FieldDescription) -> FieldContext {
        let key = if field.serialized_name.is_empty() && self.fallback_to_field_name {
            field.name.clone()
        } else {
            field.serialized_name.clone()
        };

        FieldContext {
            key,
            ts_type: self.type_map.map(&field.type_expr),
            required: field.required,
        }
    }

    /// Renders the declaration file.
    ///
    /// # Errors
    ///
    /// Returns [`tsgen_core::Error::TemplateError`] if rendering fails.
    pub fn render(&self, engine: &TemplateEngine<'_>, records: &[RecordDescription]) -> Result<String> {
        let context = self.context(records);
        let output = engine.render(TYPES_TEMPLATE, &context)?;
        tracing::debug!(records = records.len(), "Rendered type declarations");
        Ok(output)
    }
}
