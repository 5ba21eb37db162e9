//! Record model builder.
//!
//! Turns parsed struct declarations into [`RecordDescription`]s. Embedded
//! and untagged fields are reported as diagnostics rather than errors.

use crate::ast::{FieldNode, SourceFile, TypeNode, TypeSpec};
use crate::tags::parse_json_tag;
use tsgen_core::{Diagnostic, FieldDescription, RecordDescription, TypeExpr};

/// Converts a syntactic type into the model's type expression.
///
/// Fixed-size arrays collapse into [`TypeExpr::Array`]; every shape the
/// generator cannot express becomes [`TypeExpr::Unsupported`].
#[must_use]
pub fn type_expr(node: &TypeNode) -> TypeExpr {
    match node {
        TypeNode::Name(name) => TypeExpr::named(name.as_str()),
        TypeNode::Qualified { package, name } => TypeExpr::qualified(package.as_str(), name.as_str()),
        TypeNode::Pointer(inner) => TypeExpr::pointer(type_expr(inner)),
        TypeNode::Slice(inner) | TypeNode::Array(inner) => TypeExpr::array(type_expr(inner)),
        TypeNode::Map
        | TypeNode::Chan
        | TypeNode::Func
        | TypeNode::Interface
        | TypeNode::Generic(_)
        | TypeNode::Struct(_)
        | TypeNode::Other(_) => TypeExpr::Unsupported,
    }
}

/// Builds a record for every struct declaration, in source order.
pub fn build_records(file: &SourceFile, diagnostics: &mut Vec<Diagnostic>) -> Vec<RecordDescription> {
    file.structs()
        .map(|(spec, fields)| build_record(spec, fields, diagnostics))
        .collect()
}

fn build_record(
    spec: &TypeSpec,
    fields: &[FieldNode],
    diagnostics: &mut Vec<Diagnostic>,
) -> RecordDescription {
    let mut described = Vec::with_capacity(fields.len());

    for field in fields {
        let type_expr = type_expr(&field.ty);

        let Some(name) = field.names.first() else {
            tracing::debug!(record = %spec.name, embedded = %type_expr, "Skipping embedded field");
            diagnostics.push(Diagnostic::EmbeddedFieldSkipped {
                record: spec.name.clone(),
                type_name: type_expr.to_string(),
            });
            continue;
        };

        let (serialized_name, required) = match field.tag.as_deref().and_then(parse_json_tag) {
            Some(tag) => (tag.name, !tag.omit_empty),
            None => {
                diagnostics.push(Diagnostic::MissingJsonTag {
                    record: spec.name.clone(),
                    field: name.clone(),
                });
                (String::new(), true)
            }
        };

        described.push(FieldDescription {
            name: name.clone(),
            type_expr,
            serialized_name,
            required,
        });
    }

    RecordDescription {
        name: spec.name.clone(),
        fields: described,
    }
}
