//! Core value type for assertion operands.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::Result;
use crate::collections::{PMap, PSet, PVec};
use crate::object::{HostObject, Object};
use crate::record::Record;

/// An operand of a failed comparison.
///
/// Values are immutable and cheaply cloneable. `PartialEq`/`Ord` are
/// structural and total so values can key sets and maps; [`Value::try_eq`]
/// is the fallible native equality that explanations reason about.
#[derive(Clone)]
pub enum Value {
    /// The absent value.
    None,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text.
    Str(Arc<str>),
    /// Byte string.
    Bytes(Arc<[u8]>),
    /// Mutable-style ordered sequence.
    List(PVec<Value>),
    /// Immutable ordered sequence.
    Tuple(PVec<Value>),
    /// Set.
    Set(PSet<Value>),
    /// Frozen set.
    FrozenSet(PSet<Value>),
    /// Mapping.
    Dict(PMap<Value, Value>),
    /// Record-like value with named fields.
    Record(Record),
    /// Host-defined value.
    Object(Object),
}

impl Value {
    /// Creates a text value.
    #[must_use]
    pub fn str(s: impl Into<Arc<str>>) -> Self {
        Self::Str(s.into())
    }

    /// Creates a byte string value.
    #[must_use]
    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    /// Creates a list from anything convertible to values.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Creates a tuple from anything convertible to values.
    pub fn tuple<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Creates a set from anything convertible to values.
    pub fn set<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Creates a frozen set from anything convertible to values.
    pub fn frozenset<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::FrozenSet(items.into_iter().map(Into::into).collect())
    }

    /// Creates a mapping from key-value pairs.
    pub fn dict<K: Into<Value>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps a host object.
    #[must_use]
    pub fn object(object: impl HostObject + 'static) -> Self {
        Self::Object(Object::new(object))
    }

    /// Returns the name of this value's type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::None => "NoneType",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Set(_) => "set",
            Self::FrozenSet(_) => "frozenset",
            Self::Dict(_) => "dict",
            Self::Record(r) => r.type_name(),
            Self::Object(o) => o.type_name(),
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract the elements of a set or frozen set.
    #[must_use]
    pub const fn as_set(&self) -> Option<&PSet<Value>> {
        match self {
            Self::Set(s) | Self::FrozenSet(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a mapping.
    #[must_use]
    pub const fn as_dict(&self) -> Option<&PMap<Value, Value>> {
        match self {
            Self::Dict(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a record.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Number of items in an ordered sequence (list, tuple, bytes, named tuple).
    #[must_use]
    pub fn seq_len(&self) -> Option<usize> {
        match self {
            Self::List(v) | Self::Tuple(v) => Some(v.len()),
            Self::Bytes(b) => Some(b.len()),
            Self::Record(r) if r.is_named_tuple() => Some(r.len()),
            _ => None,
        }
    }

    /// Item `index` of an ordered sequence. Bytes yield their integer values.
    #[must_use]
    pub fn seq_item(&self, index: usize) -> Option<Value> {
        match self {
            Self::List(v) | Self::Tuple(v) => v.get(index).cloned(),
            Self::Bytes(b) => b.get(index).map(|byte| Self::Int(i64::from(*byte))),
            Self::Record(r) if r.is_named_tuple() => {
                r.fields().nth(index).map(|f| f.value.clone())
            }
            _ => None,
        }
    }

    /// Items produced by iterating this value.
    ///
    /// `None` means the value is not iterable. Mappings iterate their keys;
    /// text is iterable here, callers exclude it where needed.
    #[must_use]
    pub fn iter_values(&self) -> Option<Result<Vec<Value>>> {
        match self {
            Self::Str(s) => Some(Ok(s.chars().map(|c| Self::str(c.to_string())).collect())),
            Self::Bytes(_) | Self::List(_) | Self::Tuple(_) => {
                let len = self.seq_len().unwrap_or(0);
                Some(Ok((0..len).filter_map(|i| self.seq_item(i)).collect()))
            }
            Self::Record(r) if r.is_named_tuple() => {
                Some(Ok(r.fields().map(|f| f.value.clone()).collect()))
            }
            Self::Set(s) | Self::FrozenSet(s) => Some(Ok(s.iter().cloned().collect())),
            Self::Dict(m) => Some(Ok(m.keys().cloned().collect())),
            Self::Object(o) => o.host().iterate(),
            _ => None,
        }
    }

    /// Native equality, which may run host code and therefore fail.
    ///
    /// Numbers compare by value across int/float, named tuples compare as
    /// tuples unless given custom equality, and host objects decide for
    /// themselves.
    ///
    /// # Errors
    ///
    /// Propagates failures of host equality.
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn try_eq(&self, other: &Value) -> Result<bool> {
        match (self, other) {
            (Self::Object(a), Self::Object(b)) if a.ptr_eq(b) => Ok(true),
            (Self::Object(a), _) => a.host().eq_value(other),
            (_, Self::Object(b)) => b.host().eq_value(self),
            (Self::Record(a), _) if !a.is_named_tuple() || !a.has_default_eq() => {
                a.try_eq(other)
            }
            (_, Self::Record(b)) if !b.is_named_tuple() || !b.has_default_eq() => {
                b.try_eq(self)
            }
            (Self::Float(a), Self::Float(b)) => Ok(a == b),
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => {
                Ok(*a as f64 == *b)
            }
            (Self::List(_), Self::List(_)) => items_eq(self, other),
            (
                Self::Tuple(_) | Self::Record(_),
                Self::Tuple(_) | Self::Record(_),
            ) => items_eq(self, other),
            (Self::Dict(a), Self::Dict(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (key, left) in a.iter() {
                    let Some(right) = b.get(key) else {
                        return Ok(false);
                    };
                    if !left.try_eq(right)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            (Self::Set(a) | Self::FrozenSet(a), Self::Set(b) | Self::FrozenSet(b)) => Ok(a == b),
            _ => Ok(self == other),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Str(_) => 3,
            Self::Bytes(_) => 4,
            Self::List(_) => 5,
            Self::Tuple(_) => 6,
            Self::Set(_) => 7,
            Self::FrozenSet(_) => 8,
            Self::Dict(_) => 9,
            Self::Record(_) => 10,
            Self::Object(_) => 11,
        }
    }
}

fn items_eq(left: &Value, right: &Value) -> Result<bool> {
    let (Some(len), Some(other_len)) = (left.seq_len(), right.seq_len()) else {
        return Ok(false);
    };
    if len != other_len {
        return Ok(false);
    }
    for i in 0..len {
        let (Some(a), Some(b)) = (left.seq_item(i), right.seq_item(i)) else {
            return Ok(false);
        };
        if !a.try_eq(&b)? {
            return Ok(false);
        }
    }
    Ok(true)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    // Ints and floats interleave numerically so mixed sets list in numeric
    // order; at equal magnitude the int sorts first.
    #[allow(clippy::cast_precision_loss)]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::None, Self::None) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b).then(Ordering::Less),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)).then(Ordering::Greater),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Bytes(a), Self::Bytes(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a.cmp(b),
            (Self::Set(a), Self::Set(b)) | (Self::FrozenSet(a), Self::FrozenSet(b)) => a.cmp(b),
            (Self::Dict(a), Self::Dict(b)) => a.cmp(b),
            (Self::Record(a), Self::Record(b)) => a.cmp(b),
            (Self::Object(a), Self::Object(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "b{b:?}"),
            Self::List(v) => write!(f, "{v:?}"),
            Self::Tuple(v) => write!(f, "tuple{v:?}"),
            Self::Set(s) => write!(f, "{s:?}"),
            Self::FrozenSet(s) => write!(f, "frozenset{s:?}"),
            Self::Dict(m) => write!(f, "{m:?}"),
            Self::Record(r) => write!(f, "{r:?}"),
            Self::Object(o) => write!(f, "{o:?}"),
        }
    }
}

/// Displays the unbounded, crash-safe repr.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::repr::saferepr_unlimited(self, false))
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::None, Into::into)
    }
}
