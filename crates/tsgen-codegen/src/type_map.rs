//! Go to TypeScript type mapping table.
//!
//! Keys are the textual encoding of [`TypeExpr`] (`uint`, `*string`,
//! `time.Time`). Lookups are fail-open: an expression without an entry is
//! emitted as written, which is correct for record names and leaves
//! uncovered compound types such as `[]Milestone` verbatim.

use std::collections::HashMap;
use tsgen_core::TypeExpr;

const NUMERIC: &[&str] = &[
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "float32", "float64", "byte", "rune",
];

/// Immutable mapping from Go type expressions to TypeScript types.
///
/// # Examples
///
/// ```
/// use tsgen_codegen::TypeMap;
/// use tsgen_core::TypeExpr;
///
/// let types = TypeMap::builtin();
/// assert_eq!(types.map(&TypeExpr::named("uint")), "number");
/// assert_eq!(types.map(&TypeExpr::pointer(TypeExpr::named("bool"))), "boolean | null");
/// assert_eq!(types.map(&TypeExpr::named("Project")), "Project");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    entries: HashMap<String, String>,
}

impl TypeMap {
    /// Creates the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for name in NUMERIC {
            entries.insert((*name).to_string(), "number".to_string());
            entries.insert(format!("*{name}"), "number | null".to_string());
        }
        for (go, ts) in [
            ("string", "string"),
            ("bool", "boolean"),
            ("time.Time", "string"),
            ("*string", "string | null"),
            ("*bool", "boolean | null"),
            ("*time.Time", "string | null"),
        ] {
            entries.insert(go.to_string(), ts.to_string());
        }
        Self { entries }
    }

    /// Returns a copy of the table with one entry added or replaced.
    #[must_use]
    pub fn with_entry(mut self, go: impl Into<String>, typescript: impl Into<String>) -> Self {
        self.entries.insert(go.into(), typescript.into());
        self
    }

    /// Looks up the TypeScript type of an expression.
    #[must_use]
    pub fn lookup(&self, expr: &TypeExpr) -> Option<&str> {
        self.entries.get(&expr.to_string()).map(String::as_str)
    }

    /// Maps an expression, falling back to its textual encoding.
    #[must_use]
    pub fn map(&self, expr: &TypeExpr) -> String {
        self.lookup(expr)
            .map_or_else(|| expr.to_string(), str::to_string)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_entries() {
        let types = TypeMap::builtin();
        for go in ["uint", "int", "int64", "float64", "byte", "uint8"] {
            assert_eq!(types.map(&TypeExpr::named(go)), "number", "{go}");
        }
        assert_eq!(types.map(&TypeExpr::named("string")), "string");
        assert_eq!(types.map(&TypeExpr::named("bool")), "boolean");
        assert_eq!(types.map(&TypeExpr::qualified("time", "Time")), "string");
    }

    #[test]
    fn test_pointer_entries_are_nullable() {
        let types = TypeMap::builtin();
        let cases = [
            (TypeExpr::named("string"), "string | null"),
            (TypeExpr::named("int"), "number | null"),
            (TypeExpr::named("uint"), "number | null"),
            (TypeExpr::named("int64"), "number | null"),
            (TypeExpr::named("bool"), "boolean | null"),
            (TypeExpr::qualified("time", "Time"), "string | null"),
        ];
        for (inner, expected) in cases {
            assert_eq!(types.map(&TypeExpr::pointer(inner)), expected);
        }
    }

    #[test]
    fn test_uncovered_compound_types_pass_through() {
        let types = TypeMap::builtin();
        assert_eq!(types.lookup(&TypeExpr::array(TypeExpr::named("Milestone"))), None);
        assert_eq!(types.map(&TypeExpr::array(TypeExpr::named("Milestone"))), "[]Milestone");
        assert_eq!(types.map(&TypeExpr::pointer(TypeExpr::named("User"))), "*User");
        assert_eq!(types.map(&TypeExpr::array(TypeExpr::named("string"))), "[]string");
        assert_eq!(types.map(&TypeExpr::qualified("uuid", "UUID")), "uuid.UUID");
    }

    #[test]
    fn test_unsupported_maps_to_any() {
        assert_eq!(TypeMap::builtin().map(&TypeExpr::Unsupported), "any");
    }

    #[test]
    fn test_with_entry_overrides() {
        let types = TypeMap::builtin().with_entry("uuid.UUID", "string");
        assert_eq!(types.map(&TypeExpr::qualified("uuid", "UUID")), "string");
        assert_eq!(types.len(), TypeMap::builtin().len() + 1);
        assert!(!types.is_empty());
    }
}
