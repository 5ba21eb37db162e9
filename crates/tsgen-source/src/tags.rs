//! Struct tag decoding.
//!
//! The serialized name of a field is read from the first `json:` segment of
//! its tag: the value runs up to the next space, loses its surrounding
//! quotes, and has one `,omitempty` option removed, which marks the field
//! optional. Other options stay part of the name.

const OMIT_EMPTY: &str = ",omitempty";

/// Decoded `json` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonTag {
    /// Wire name, empty when the tag omits it (`json:",omitempty"`)
    pub name: String,
    /// `omitempty` option present
    pub omit_empty: bool,
}

/// Returns the content of a Go string literal as written in source.
///
/// Raw literals (backticks) are returned verbatim. Interpreted literals have
/// their escape sequences decoded; unknown escapes are kept as-is. Input
/// that is not a quoted literal is returned unchanged.
///
/// # Examples
///
/// ```
/// use tsgen_source::tags::unquote_literal;
///
/// assert_eq!(unquote_literal("`json:\"id\"`"), "json:\"id\"");
/// assert_eq!(unquote_literal(r#""json:\"id\"""#), "json:\"id\"");
/// ```
#[must_use]
pub fn unquote_literal(literal: &str) -> String {
    if let Some(raw) = literal
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        return raw.to_string();
    }

    let Some(body) = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return literal.to_string();
    };

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(escaped @ ('"' | '\\' | '\'')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Decodes the `json` entry of a tag literal.
///
/// Returns `None` when the tag has no `json:` segment. A `json:"-"` tag
/// yields the name `-`, like any other name.
///
/// # Examples
///
/// ```
/// use tsgen_source::tags::parse_json_tag;
///
/// let tag = parse_json_tag("`json:\"bio,omitempty\" gorm:\"size:255\"`").unwrap();
/// assert_eq!(tag.name, "bio");
/// assert!(tag.omit_empty);
///
/// assert!(parse_json_tag("`gorm:\"primaryKey\"`").is_none());
/// ```
#[must_use]
pub fn parse_json_tag(literal: &str) -> Option<JsonTag> {
    let tag = unquote_literal(literal);
    let (_, after) = tag.split_once("json:")?;
    let value = after
        .split(' ')
        .next()
        .unwrap_or_default()
        .trim_matches('"');

    let omit_empty = value.contains(OMIT_EMPTY);
    let name = if omit_empty {
        value.replacen(OMIT_EMPTY, "", 1)
    } else {
        value.to_string()
    };

    Some(JsonTag { name, omit_empty })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_tag_with_multiple_keys() {
        let tag = parse_json_tag("`json:\"email\" gorm:\"uniqueIndex;not null\"`").unwrap();
        assert_eq!(
            tag,
            JsonTag {
                name: "email".to_string(),
                omit_empty: false
            }
        );
    }

    #[test]
    fn test_json_key_not_first() {
        let tag = parse_json_tag("`gorm:\"default:'active'\" json:\"status\"`").unwrap();
        assert_eq!(tag.name, "status");
    }

    #[test]
    fn test_omitempty_removed_other_options_kept() {
        let tag = parse_json_tag("`json:\"count,string,omitempty\"`").unwrap();
        assert_eq!(tag.name, "count,string");
        assert!(tag.omit_empty);
    }

    #[test]
    fn test_value_ends_at_first_space() {
        let tag = parse_json_tag("`json:\"display name\"`").unwrap();
        assert_eq!(tag.name, "display");
    }

    #[test]
    fn test_name_omitted() {
        let tag = parse_json_tag("`json:\",omitempty\"`").unwrap();
        assert_eq!(tag.name, "");
        assert!(tag.omit_empty);
    }

    #[test]
    fn test_interpreted_tag_literal() {
        let tag = parse_json_tag(r#""json:\"id\"""#).unwrap();
        assert_eq!(tag.name, "id");
    }

    #[test]
    fn test_dash_name_kept() {
        assert_eq!(parse_json_tag("`json:\"-\"`").unwrap().name, "-");
    }

    #[test]
    fn test_missing_json_segment() {
        assert!(parse_json_tag("`gorm:\"primaryKey\"`").is_none());
        assert!(parse_json_tag("``").is_none());
    }

    #[test]
    fn test_unquoted_value_accepted() {
        assert_eq!(parse_json_tag("`json:id`").unwrap().name, "id");
    }

    #[test]
    fn test_unquote_escapes() {
        assert_eq!(unquote_literal(r#""a\tb\\c""#), "a\tb\\c");
        assert_eq!(unquote_literal("plain"), "plain");
    }
}
