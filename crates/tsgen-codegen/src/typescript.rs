//! TypeScript naming utilities.
//!
//! Converts handler names into client method names and route paths into
//! the argument list and URL expression of a client method.

use regex::Regex;
use std::sync::LazyLock;
use tsgen_core::HANDLER_PREFIX;

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex"));

/// Derives the client method name from a handler name.
///
/// The `handle` prefix is stripped and the first remaining character is
/// lower-cased.
///
/// # Examples
///
/// ```
/// use tsgen_codegen::typescript::method_name;
///
/// assert_eq!(method_name("handleGetUser"), "getUser");
/// assert_eq!(method_name("handleAuthInvite"), "authInvite");
/// assert_eq!(method_name("handleURLCheck"), "uRLCheck");
/// ```
#[must_use]
pub fn method_name(handler: &str) -> String {
    let rest = handler.strip_prefix(HANDLER_PREFIX).unwrap_or(handler);
    let mut chars = rest.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Returns the `:name` parameters of a route path in order.
///
/// # Examples
///
/// ```
/// use tsgen_codegen::typescript::path_params;
///
/// assert_eq!(path_params("/api/projects/:projectId/milestones/:id"), ["projectId", "id"]);
/// assert!(path_params("/api/users").is_empty());
/// ```
#[must_use]
pub fn path_params(path: &str) -> Vec<String> {
    PATH_PARAM
        .captures_iter(path)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Renders a route path as a TypeScript expression.
///
/// Paths without parameters become a single-quoted string literal. Paths
/// with parameters become a template literal that URI-encodes each
/// argument.
///
/// # Examples
///
/// ```
/// use tsgen_codegen::typescript::path_expression;
///
/// assert_eq!(path_expression("/api/users"), "'/api/users'");
/// assert_eq!(
///     path_expression("/api/users/:id"),
///     "`/api/users/${encodeURIComponent(String(id))}`"
/// );
/// ```
#[must_use]
pub fn path_expression(path: &str) -> String {
    if !PATH_PARAM.is_match(path) {
        return format!("'{}'", escape_single_quoted(path));
    }

    let escaped = path.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${");
    let interpolated = PATH_PARAM.replace_all(&escaped, "$${encodeURIComponent(String($1))}");
    format!("`{interpolated}`")
}

fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escapes text for use inside a single-quoted TypeScript string.
#[must_use]
pub fn string_literal(text: &str) -> String {
    format!("'{}'", escape_single_quoted(text))
}
