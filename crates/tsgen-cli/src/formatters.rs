//! Output formatters for CLI commands.
//!
//! Every command reports a serializable value; the global `--format` flag
//! picks how it is rendered on stdout.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;
use tsgen_core::cli::OutputFormat;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use tsgen_cli::formatters::format_output;
/// use tsgen_core::cli::OutputFormat;
///
/// #[derive(Serialize)]
/// struct Summary {
///     records: usize,
/// }
///
/// let output = format_output(&Summary { records: 7 }, OutputFormat::Json)?;
/// assert!(output.contains("\"records\": 7"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, Write};
    use serde_json::Value;

    /// Formats data as one `path = value` line per scalar.
    ///
    /// Nested keys are joined with `.`, array items use their index.
    /// Suitable for `grep` and `cut`.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        flatten(&value, "", &mut out)?;
        Ok(out.trim_end().to_string())
    }

    fn flatten(value: &Value, path: &str, out: &mut String) -> Result<()> {
        let child = |key: &str| {
            if path.is_empty() {
                key.to_string()
            } else {
                format!("{path}.{key}")
            }
        };

        match value {
            Value::Object(obj) => {
                for (key, val) in obj {
                    flatten(val, &child(key), out)?;
                }
            }
            Value::Array(arr) => {
                for (i, item) in arr.iter().enumerate() {
                    flatten(item, &child(&i.to_string()), out)?;
                }
            }
            Value::String(s) => writeln!(out, "{path} = {s}")?,
            scalar => writeln!(out, "{path} = {scalar}")?,
        }
        Ok(())
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Write};
    use serde_json::Value;

    /// Formats data as an indented, colorized tree.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        format_value(&value, 0, &mut out)?;
        Ok(out.trim_end().to_string())
    }

    fn format_value(value: &Value, indent: usize, out: &mut String) -> Result<()> {
        let pad = "  ".repeat(indent);

        match value {
            Value::Object(obj) => {
                for (key, val) in obj {
                    if is_nested(val) {
                        writeln!(out, "{pad}{}:", key.blue().bold())?;
                        format_value(val, indent + 1, out)?;
                    } else {
                        writeln!(out, "{pad}{}: {}", key.blue().bold(), scalar(val))?;
                    }
                }
            }
            Value::Array(arr) => {
                for item in arr {
                    if is_nested(item) {
                        writeln!(out, "{pad}{}", "-".dimmed())?;
                        format_value(item, indent + 1, out)?;
                    } else {
                        writeln!(out, "{pad}{} {}", "-".dimmed(), scalar(item))?;
                    }
                }
            }
            other => writeln!(out, "{pad}{}", scalar(other))?,
        }
        Ok(())
    }

    fn is_nested(value: &Value) -> bool {
        match value {
            Value::Object(obj) => !obj.is_empty(),
            Value::Array(arr) => !arr.is_empty(),
            _ => false,
        }
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) => "[]".dimmed().to_string(),
            Value::Object(_) => "{}".dimmed().to_string(),
        }
    }
}
