//! Textual representations of values.
//!
//! - [`repr`] is the full representation and fails when host code fails.
//! - [`saferepr`] is size-bounded and never fails: host failures are
//!   rendered in place and containers are cut after a few items.
//! - [`saferepr_unlimited`] never fails and is never truncated.

use std::fmt::Write;

use crate::Result;
use crate::value::Value;

/// Default bound used when a caller does not pick one.
pub const DEFAULT_REPR_MAX_SIZE: usize = 240;

const MAX_LEVEL: usize = 6;
const MAX_SEQ_ITEMS: usize = 6;
const MAX_DICT_ITEMS: usize = 4;

/// Full representation of a value.
///
/// # Errors
///
/// Returns the first host repr failure encountered.
pub fn repr(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_repr(value, &mut out)?;
    Ok(out)
}

/// String conversion: text is returned as-is, everything else as its repr.
///
/// # Errors
///
/// Returns the first host repr failure encountered.
pub fn to_str(value: &Value) -> Result<String> {
    match value {
        Value::Str(s) => Ok(s.to_string()),
        other => repr(other),
    }
}

/// Size-bounded representation that never fails.
///
/// Containers show at most six items (four for mappings) and six levels of
/// nesting; the result is then cut in the middle to `maxsize` characters.
/// With `use_ascii`, the full representation is escaped to ASCII first.
#[must_use]
pub fn saferepr(value: &Value, maxsize: usize, use_ascii: bool) -> String {
    let s = if use_ascii {
        ascii_escape(&SafeRepr::unlimited().repr1(value, MAX_LEVEL))
    } else {
        SafeRepr::bounded(maxsize).repr1(value, MAX_LEVEL)
    };
    ellipsize(&s, maxsize)
}

/// Unbounded representation that never fails.
#[must_use]
pub fn saferepr_unlimited(value: &Value, use_ascii: bool) -> String {
    let s = SafeRepr::unlimited().repr1(value, MAX_LEVEL);
    if use_ascii { ascii_escape(&s) } else { s }
}

/// Cuts `s` to at most `maxsize` characters, keeping both ends around `...`.
#[must_use]
pub fn ellipsize(s: &str, maxsize: usize) -> String {
    let len = s.chars().count();
    if len <= maxsize {
        return s.to_string();
    }
    let head = maxsize.saturating_sub(3) / 2;
    let tail = maxsize.saturating_sub(3).saturating_sub(head);
    let mut out: String = s.chars().take(head).collect();
    out.push_str("...");
    out.extend(s.chars().skip(len - tail));
    out
}

/// Escapes every non-ASCII character the way `ascii()` does.
#[must_use]
pub fn ascii_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            push_code_escape(&mut out, c);
        }
    }
    out
}

/// Representation of a float: shortest round-trip digits, exponent form
/// outside `1e-4..1e16`.
#[must_use]
pub fn float_repr(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    pad_exponent(format!("{n:?}"))
}

/// Rewrites a Rust exponent (`1e-5`) into a signed two-digit one (`1e-05`).
pub(crate) fn pad_exponent(s: String) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// Quoted representation of text.
#[must_use]
pub fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => push_code_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Quoted representation of a byte string.
#[must_use]
pub fn bytes_repr(b: &[u8]) -> String {
    let quote = if b.contains(&b'\'') && !b.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };
    let mut out = String::with_capacity(b.len() + 3);
    out.push('b');
    out.push(char::from(quote));
    for &byte in b {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            byte if byte == quote => {
                out.push('\\');
                out.push(char::from(byte));
            }
            0x20..0x7f => out.push(char::from(byte)),
            byte => {
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
    }
    out.push(char::from(quote));
    out
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control()
        || c.is_whitespace()
        || matches!(
            c,
            '\u{ad}' | '\u{200b}'..='\u{200f}' | '\u{2060}'..='\u{2064}' | '\u{feff}'
        ))
}

fn push_code_escape(out: &mut String, c: char) {
    let code = u32::from(c);
    let _ = if code < 0x100 {
        write!(out, "\\x{code:02x}")
    } else if code < 0x10000 {
        write!(out, "\\u{code:04x}")
    } else {
        write!(out, "\\U{code:08x}")
    };
}

fn write_repr(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::None => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Int(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Float(n) => out.push_str(&float_repr(*n)),
        Value::Str(s) => out.push_str(&str_repr(s)),
        Value::Bytes(b) => out.push_str(&bytes_repr(b)),
        Value::List(items) => write_items(items.iter(), "[", "]", out)?,
        Value::Tuple(items) => {
            write_items(items.iter(), "(", "", out)?;
            if items.len() == 1 {
                out.push(',');
            }
            out.push(')');
        }
        Value::Set(items) if items.is_empty() => out.push_str("set()"),
        Value::Set(items) => write_items(items.iter(), "{", "}", out)?,
        Value::FrozenSet(items) if items.is_empty() => out.push_str("frozenset()"),
        Value::FrozenSet(items) => write_items(items.iter(), "frozenset({", "})", out)?,
        Value::Dict(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(k, out)?;
                out.push_str(": ");
                write_repr(v, out)?;
            }
            out.push('}');
        }
        Value::Record(record) => {
            out.push_str(record.type_name());
            out.push('(');
            for (i, field) in record.fields().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&field.name);
                out.push('=');
                write_repr(&field.value, out)?;
            }
            out.push(')');
        }
        Value::Object(object) => out.push_str(&object.host().repr()?),
    }
    Ok(())
}

fn write_items<'a>(
    items: impl Iterator<Item = &'a Value>,
    open: &str,
    close: &str,
    out: &mut String,
) -> Result<()> {
    out.push_str(open);
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_repr(item, out)?;
    }
    out.push_str(close);
    Ok(())
}

/// Crash-proof repr walker.
///
/// `maxsize: None` disables every limit.
struct SafeRepr {
    maxsize: Option<usize>,
}

impl SafeRepr {
    const fn bounded(maxsize: usize) -> Self {
        Self {
            maxsize: Some(maxsize),
        }
    }

    const fn unlimited() -> Self {
        Self { maxsize: None }
    }

    fn repr1(&self, value: &Value, level: usize) -> String {
        match value {
            Value::Str(s) => self.limit(str_repr(s)),
            Value::List(items) => self.iterable(items.iter(), items.len(), level, "[", "]", ""),
            Value::Tuple(items) => self.iterable(items.iter(), items.len(), level, "(", ")", ","),
            Value::Set(items) if items.is_empty() => "set()".to_string(),
            Value::Set(items) => self.iterable(items.iter(), items.len(), level, "{", "}", ""),
            Value::FrozenSet(items) if items.is_empty() => "frozenset()".to_string(),
            Value::FrozenSet(items) => {
                self.iterable(items.iter(), items.len(), level, "frozenset({", "})", "")
            }
            Value::Dict(map) => {
                if map.is_empty() {
                    return "{}".to_string();
                }
                if self.maxsize.is_some() && level == 0 {
                    return "{...}".to_string();
                }
                let next = level.saturating_sub(1);
                let limit = self.item_limit(MAX_DICT_ITEMS);
                let mut pieces: Vec<String> = map
                    .iter()
                    .take(limit)
                    .map(|(k, v)| format!("{}: {}", self.repr1(k, next), self.repr1(v, next)))
                    .collect();
                if map.len() > limit {
                    pieces.push("...".to_string());
                }
                format!("{{{}}}", pieces.join(", "))
            }
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) => {
                repr(value).unwrap_or_default()
            }
            Value::Bytes(_) | Value::Record(_) | Value::Object(_) => {
                let s = repr(value).unwrap_or_else(|err| {
                    format!("<[{err} raised in repr()] {} object>", value.type_name())
                });
                self.limit(s)
            }
        }
    }

    fn iterable<'a>(
        &self,
        items: impl Iterator<Item = &'a Value>,
        len: usize,
        level: usize,
        open: &str,
        close: &str,
        trail: &str,
    ) -> String {
        let body = if self.maxsize.is_some() && level == 0 && len > 0 {
            "...".to_string()
        } else {
            let next = level.saturating_sub(1);
            let limit = self.item_limit(MAX_SEQ_ITEMS);
            let mut pieces: Vec<String> = items.take(limit).map(|v| self.repr1(v, next)).collect();
            if len > limit {
                pieces.push("...".to_string());
            }
            pieces.join(", ")
        };
        let trail = if len == 1 { trail } else { "" };
        format!("{open}{body}{trail}{close}")
    }

    fn item_limit(&self, bounded: usize) -> usize {
        if self.maxsize.is_some() {
            bounded
        } else {
            usize::MAX
        }
    }

    fn limit(&self, s: String) -> String {
        match self.maxsize {
            Some(maxsize) => ellipsize(&s, maxsize),
            None => s,
        }
    }
}
