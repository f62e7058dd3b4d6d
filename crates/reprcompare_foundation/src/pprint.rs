//! Pretty-printers for values.
//!
//! [`pformat`] keeps a value on one line while it fits in 80 columns and
//! otherwise breaks containers one item per line. [`PrettyPrinter`] always
//! breaks non-empty containers, one item per line with trailing commas, which
//! makes line-level diffs of nested data easy to read.

use crate::Result;
use crate::record::RecordKind;
use crate::repr::repr;
use crate::value::Value;

const WIDTH: usize = 80;

/// Formats a value, breaking containers only when they do not fit.
///
/// # Errors
///
/// Returns the first host repr failure encountered.
pub fn pformat(value: &Value) -> Result<String> {
    let mut out = String::new();
    format_fitting(value, 0, 0, &mut out)?;
    Ok(out)
}

fn format_fitting(value: &Value, indent: usize, allowance: usize, out: &mut String) -> Result<()> {
    let rep = repr(value)?;
    if rep.chars().count() <= WIDTH.saturating_sub(indent + allowance) {
        out.push_str(&rep);
        return Ok(());
    }
    match value {
        Value::List(items) if !items.is_empty() => {
            out.push('[');
            fitting_items(items.iter(), items.len(), indent + 1, allowance + 1, out)?;
            out.push(']');
        }
        Value::Tuple(items) if !items.is_empty() => {
            out.push('(');
            fitting_items(items.iter(), items.len(), indent + 1, allowance + 1, out)?;
            if items.len() == 1 {
                out.push(',');
            }
            out.push(')');
        }
        Value::Set(items) if !items.is_empty() => {
            out.push('{');
            fitting_items(items.iter(), items.len(), indent + 1, allowance + 1, out)?;
            out.push('}');
        }
        Value::FrozenSet(items) if !items.is_empty() => {
            out.push_str("frozenset({");
            fitting_items(items.iter(), items.len(), indent + 11, allowance + 2, out)?;
            out.push_str("})");
        }
        Value::Dict(map) if !map.is_empty() => {
            out.push('{');
            let indent = indent + 1;
            let last = map.len() - 1;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                    out.push_str(&" ".repeat(indent));
                }
                let key_repr = repr(key)?;
                out.push_str(&key_repr);
                out.push_str(": ");
                let allowance = if i == last { allowance + 1 } else { 1 };
                format_fitting(item, indent + key_repr.chars().count() + 2, allowance, out)?;
            }
            out.push('}');
        }
        _ => out.push_str(&rep),
    }
    Ok(())
}

fn fitting_items<'a>(
    items: impl Iterator<Item = &'a Value>,
    len: usize,
    indent: usize,
    allowance: usize,
    out: &mut String,
) -> Result<()> {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(",\n");
            out.push_str(&" ".repeat(indent));
        }
        let allowance = if i + 1 == len { allowance } else { 1 };
        format_fitting(item, indent, allowance, out)?;
    }
    Ok(())
}

/// Always-expanding pretty-printer used for full diffs.
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    /// Number of spaces per nesting level.
    pub indent_width: usize,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl PrettyPrinter {
    /// Creates a printer with the default indentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats a value.
    ///
    /// # Errors
    ///
    /// Returns the first host repr failure encountered.
    pub fn pformat(&self, value: &Value) -> Result<String> {
        let mut out = String::new();
        self.format(value, 0, &mut out)?;
        Ok(out)
    }

    fn format(&self, value: &Value, indent: usize, out: &mut String) -> Result<()> {
        match value {
            Value::List(items) => self.items(items.iter(), indent, "[", "]", out),
            Value::Tuple(items) => self.items(items.iter(), indent, "(", ")", out),
            Value::Set(items) if !items.is_empty() => {
                self.items(items.iter(), indent, "{", "}", out)
            }
            Value::FrozenSet(items) if !items.is_empty() => {
                self.items(items.iter(), indent, "frozenset({", "})", out)
            }
            Value::Dict(map) => {
                out.push('{');
                let inner = indent + self.indent_width;
                for (key, item) in map.iter() {
                    self.newline(inner, out);
                    out.push_str(&repr(key)?);
                    out.push_str(": ");
                    self.format(item, inner, out)?;
                    out.push(',');
                }
                if !map.is_empty() {
                    self.newline(indent, out);
                }
                out.push('}');
                Ok(())
            }
            Value::Record(record) if record.kind() == RecordKind::DataClass => {
                out.push_str(record.type_name());
                out.push('(');
                let inner = indent + self.indent_width;
                for field in record.fields() {
                    self.newline(inner, out);
                    out.push_str(&field.name);
                    out.push('=');
                    self.format(&field.value, inner, out)?;
                    out.push(',');
                }
                if !record.is_empty() {
                    self.newline(indent, out);
                }
                out.push(')');
                Ok(())
            }
            other => {
                out.push_str(&repr(other)?);
                Ok(())
            }
        }
    }

    fn items<'a>(
        &self,
        items: impl Iterator<Item = &'a Value>,
        indent: usize,
        open: &str,
        close: &str,
        out: &mut String,
    ) -> Result<()> {
        out.push_str(open);
        let inner = indent + self.indent_width;
        let mut any = false;
        for item in items {
            any = true;
            self.newline(inner, out);
            self.format(item, inner, out)?;
            out.push(',');
        }
        if any {
            self.newline(indent, out);
        }
        out.push_str(close);
        Ok(())
    }

    #[allow(clippy::unused_self)]
    fn newline(&self, indent: usize, out: &mut String) {
        out.push('\n');
        out.push_str(&" ".repeat(indent));
    }
}
