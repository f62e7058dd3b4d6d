//! Shape classification of operands.
//!
//! Every operand is classified exactly once per explanation into a closed
//! [`Shape`]; explainers dispatch on shapes instead of probing values.

use crate::record::RecordKind;
use crate::value::Value;

/// The comparison-relevant shape of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Text.
    Text,
    /// Byte string.
    Bytes,
    /// Set or frozen set.
    Set,
    /// Mapping.
    Mapping,
    /// List or tuple.
    Sequence,
    /// Record with named comparable fields.
    Record(RecordKind),
    /// Host value that explains its own comparisons.
    Tolerance,
    /// Host value that can be iterated.
    Iterable,
    /// Nothing specialized is known about the value.
    Opaque,
}

impl Shape {
    /// Classifies a value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Str(_) => Self::Text,
            Value::Bytes(_) => Self::Bytes,
            Value::Set(_) | Value::FrozenSet(_) => Self::Set,
            Value::Dict(_) => Self::Mapping,
            Value::List(_) | Value::Tuple(_) => Self::Sequence,
            Value::Record(r) => Self::Record(r.kind()),
            Value::Object(o) if o.host().as_tolerance().is_some() => Self::Tolerance,
            Value::Object(o) if matches!(o.host().iterate(), Some(Ok(_))) => Self::Iterable,
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Object(_) => {
                Self::Opaque
            }
        }
    }

    /// Text shape.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Ordered sequence other than text; named tuples included.
    #[must_use]
    pub const fn is_sequence(self) -> bool {
        matches!(
            self,
            Self::Bytes | Self::Sequence | Self::Record(RecordKind::NamedTuple)
        )
    }

    /// Mapping shape.
    #[must_use]
    pub const fn is_mapping(self) -> bool {
        matches!(self, Self::Mapping)
    }

    /// Set shape.
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Set)
    }

    /// Named tuple shape.
    #[must_use]
    pub const fn is_namedtuple(self) -> bool {
        matches!(self, Self::Record(RecordKind::NamedTuple))
    }

    /// Data record or attrs record, the shapes with field-level equality.
    #[must_use]
    pub const fn is_field_record(self) -> bool {
        matches!(
            self,
            Self::Record(RecordKind::DataClass | RecordKind::Attrs)
        )
    }

    /// Tolerance-aware shape.
    #[must_use]
    pub const fn is_tolerance(self) -> bool {
        matches!(self, Self::Tolerance)
    }

    /// Iteration succeeds and the value is not text.
    #[must_use]
    pub const fn is_iterable(self) -> bool {
        matches!(
            self,
            Self::Bytes
                | Self::Set
                | Self::Mapping
                | Self::Sequence
                | Self::Record(RecordKind::NamedTuple)
                | Self::Iterable
        )
    }
}

/// Returns true unless the value is a record whose equality was hand-written.
///
/// Values without field-level equality count as default.
#[must_use]
pub fn has_default_eq(value: &Value) -> bool {
    value.as_record().is_none_or(crate::record::Record::has_default_eq)
}
