//! Intermediate model shared between extraction and code generation.
//!
//! Records and endpoints are built once per generation run by the source
//! extractor and are read-only afterwards; both emitters borrow them.
//!
//! # Examples
//!
//! ```
//! use tsgen_core::{PayloadType, TypeExpr};
//!
//! let ty = TypeExpr::pointer(TypeExpr::qualified("time", "Time"));
//! assert_eq!(ty.to_string(), "*time.Time");
//!
//! let payload = PayloadType::parse("Project[]");
//! assert_eq!(payload.import_name(), Some("Project"));
//! ```

use crate::Diagnostic;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Name prefix that marks a Go function as an HTTP handler.
pub const HANDLER_PREFIX: &str = "handle";

/// Structural type expression of a Go struct field.
///
/// The textual encoding produced by [`fmt::Display`] is what the type
/// mapping table is keyed on: `*T` for pointers, `[]T` for slices and
/// arrays, `pkg.Name` for qualified names and `any` for every shape the
/// generator does not model (maps, channels, funcs, inline structs,
/// generic instantiations).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// Plain identifier: `string`, `User`
    Named(String),
    /// Pointer: `*T`
    Pointer(Box<TypeExpr>),
    /// Slice or fixed-size array: `[]T`, `[4]T`
    Array(Box<TypeExpr>),
    /// Package-qualified name: `time.Time`
    Qualified {
        /// Package selector
        package: String,
        /// Type name within the package
        name: String,
    },
    /// Anything else
    Unsupported,
}

impl TypeExpr {
    /// Creates a named type expression.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps `inner` in a pointer.
    #[must_use]
    pub fn pointer(inner: Self) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Wraps `inner` in an array.
    #[must_use]
    pub fn array(inner: Self) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Creates a package-qualified type expression.
    #[must_use]
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Array(inner) => write!(f, "[]{inner}"),
            Self::Qualified { package, name } => write!(f, "{package}.{name}"),
            Self::Unsupported => f.write_str("any"),
        }
    }
}

impl Serialize for TypeExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One field of a Go struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescription {
    /// Go field name
    pub name: String,
    /// Declared field type
    pub type_expr: TypeExpr,
    /// Wire name from the `json` tag, empty when the tag is absent
    pub serialized_name: String,
    /// `false` when the tag carries `omitempty`
    pub required: bool,
}

/// A Go struct declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDescription {
    /// Declared type name
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDescription>,
}

impl RecordDescription {
    /// Looks up a field by its Go name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if requests with this method carry a JSON body.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsgen_core::HttpMethod;
    ///
    /// assert!(HttpMethod::Post.has_body());
    /// assert!(!HttpMethod::Get.has_body());
    /// ```
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(crate::Error::InvalidArgument(format!(
                "unsupported HTTP method: '{s}'"
            ))),
        }
    }
}

impl Serialize for HttpMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Request or response payload of an endpoint, as a TypeScript type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PayloadType {
    /// No payload
    Void,
    /// Unknown payload
    Any,
    /// A single record
    Named(String),
    /// A list of records
    ArrayOf(String),
}

impl PayloadType {
    /// Parses the textual form used by route tables and configuration:
    /// `void`, `any`, `Name` or `Name[]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsgen_core::PayloadType;
    ///
    /// assert_eq!(PayloadType::parse("void"), PayloadType::Void);
    /// assert_eq!(PayloadType::parse("User"), PayloadType::Named("User".into()));
    /// assert_eq!(PayloadType::parse("User[]"), PayloadType::ArrayOf("User".into()));
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match s {
            "void" => Self::Void,
            "any" | "" => Self::Any,
            _ => s.strip_suffix("[]").map_or_else(
                || Self::Named(s.to_string()),
                |element| Self::ArrayOf(element.to_string()),
            ),
        }
    }

    /// Returns the record name to import for this payload, if any.
    #[must_use]
    pub fn import_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) | Self::ArrayOf(name) => Some(name),
            Self::Void | Self::Any => None,
        }
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Any => f.write_str("any"),
            Self::Named(name) => f.write_str(name),
            Self::ArrayOf(name) => write!(f, "{name}[]"),
        }
    }
}

impl Serialize for PayloadType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One HTTP route exposed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointDescription {
    /// HTTP method
    pub method: HttpMethod,
    /// URL path, possibly containing `:param` segments
    pub path: String,
    /// Go handler function name
    pub handler_name: String,
    /// Request body type
    pub request_type: PayloadType,
    /// Response body type
    pub response_type: PayloadType,
}

/// Everything extracted from one Go source unit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    /// Package name from the package clause
    pub package: String,
    /// Struct declarations in source order
    pub records: Vec<RecordDescription>,
    /// Resolved handlers in source order
    pub endpoints: Vec<EndpointDescription>,
    /// Non-fatal findings
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Looks up a record by name.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&RecordDescription> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Looks up an endpoint by handler name.
    #[must_use]
    pub fn endpoint(&self, handler: &str) -> Option<&EndpointDescription> {
        self.endpoints.iter().find(|e| e.handler_name == handler)
    }
}
