//! Non-fatal findings from best-effort extraction.
//!
//! Unknown handlers, untagged fields and the like do not stop generation,
//! but they usually mean the generated SDK is missing something. They are
//! collected here so callers can log or assert on them.

use serde::Serialize;
use std::fmt;

/// A non-fatal finding reported while building the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A `handle*` function has no entry in the route table.
    UnresolvedHandler {
        /// Handler function name
        handler: String,
    },
    /// A struct field has no `json` tag, so its serialized name is empty.
    MissingJsonTag {
        /// Struct name
        record: String,
        /// Go field name
        field: String,
    },
    /// An embedded field was skipped.
    EmbeddedFieldSkipped {
        /// Struct name
        record: String,
        /// Embedded type as written
        type_name: String,
    },
    /// An endpoint references a type that is not a known record.
    UnknownImport {
        /// Referenced type name
        type_name: String,
    },
}

impl Diagnostic {
    /// Short machine-readable kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnresolvedHandler { .. } => "unresolved_handler",
            Self::MissingJsonTag { .. } => "missing_json_tag",
            Self::EmbeddedFieldSkipped { .. } => "embedded_field_skipped",
            Self::UnknownImport { .. } => "unknown_import",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedHandler { handler } => write!(
                f,
                "handler '{handler}' has no route entry and was left out of the client"
            ),
            Self::MissingJsonTag { record, field } => write!(
                f,
                "field '{record}.{field}' has no json tag; its serialized name is empty"
            ),
            Self::EmbeddedFieldSkipped { record, type_name } => {
                write!(f, "embedded field '{type_name}' in '{record}' was skipped")
            }
            Self::UnknownImport { type_name } => write!(
                f,
                "type '{type_name}' is referenced by an endpoint but is not a known struct"
            ),
        }
    }
}
