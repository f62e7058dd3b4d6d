//! Record-like values: named tuples, data records and attrs-style records.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::collections::PVec;
use crate::value::Value;
use crate::{Error, Result};

/// The flavor of a record type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    /// A tuple subtype exposing field names.
    NamedTuple,
    /// A data record with generated equality over its comparable fields.
    DataClass,
    /// An attrs-style record with generated equality over its `eq` fields.
    Attrs,
}

/// A single named field of a record.
#[derive(Clone, Debug)]
pub struct Field {
    /// Field name.
    pub name: Arc<str>,
    /// Field value.
    pub value: Value,
    /// Whether the field takes part in generated equality.
    pub compare: bool,
}

/// Custom equality supplied by the host in place of the generated one.
pub type CustomEq = Arc<dyn Fn(&Record, &Value) -> Result<bool> + Send + Sync>;

/// How a record type decides equality.
#[derive(Clone, Default)]
pub enum RecordEq {
    /// The equality synthesized for the record shape.
    #[default]
    Generated,
    /// Hand-written equality; its reasoning cannot be inferred from fields.
    Custom(CustomEq),
}

impl fmt::Debug for RecordEq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated => write!(f, "Generated"),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// An instance of a record type.
#[derive(Clone, Debug)]
pub struct Record {
    type_name: Arc<str>,
    kind: RecordKind,
    fields: PVec<Field>,
    eq: RecordEq,
}

impl Record {
    /// Starts building a named tuple instance.
    #[must_use]
    pub fn named_tuple(type_name: impl Into<Arc<str>>) -> RecordBuilder {
        RecordBuilder::new(type_name, RecordKind::NamedTuple)
    }

    /// Starts building a data record instance.
    #[must_use]
    pub fn dataclass(type_name: impl Into<Arc<str>>) -> RecordBuilder {
        RecordBuilder::new(type_name, RecordKind::DataClass)
    }

    /// Starts building an attrs-style record instance.
    #[must_use]
    pub fn attrs(type_name: impl Into<Arc<str>>) -> RecordBuilder {
        RecordBuilder::new(type_name, RecordKind::Attrs)
    }

    /// Returns the record's type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the record's flavor.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Returns true for named tuples.
    #[must_use]
    pub fn is_named_tuple(&self) -> bool {
        self.kind == RecordKind::NamedTuple
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| &*field.name == name)
            .map(|field| &field.value)
    }

    /// Names of the fields eligible for field-by-field comparison.
    ///
    /// Named tuples compare every field.
    #[must_use]
    pub fn fields_to_compare(&self) -> Vec<Arc<str>> {
        self.fields
            .iter()
            .filter(|field| self.is_named_tuple() || field.compare)
            .map(|field| Arc::clone(&field.name))
            .collect()
    }

    /// Returns true if equality is the one generated for the record shape.
    #[must_use]
    pub fn has_default_eq(&self) -> bool {
        matches!(self.eq, RecordEq::Generated)
    }

    /// Native equality of this record against any value.
    ///
    /// Custom equality decides alone. Generated equality compares the fields
    /// of records of the same type and kind.
    ///
    /// # Errors
    ///
    /// Propagates failures from custom equality or from field equality.
    pub fn try_eq(&self, other: &Value) -> Result<bool> {
        if let RecordEq::Custom(eq) = &self.eq {
            return eq(self, other);
        }
        let Value::Record(other) = other else {
            return Ok(false);
        };
        if other.type_name != self.type_name || other.kind != self.kind {
            return Ok(false);
        }
        for name in self.fields_to_compare() {
            let (Some(left), Some(right)) = (self.get(&name), other.get(&name)) else {
                return Ok(false);
            };
            if !left.try_eq(right)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Looks up `name` on any value, failing the way attribute access does.
///
/// # Errors
///
/// Returns [`crate::ErrorKind::MissingField`] when the value has no such field.
pub fn field_of<'v>(value: &'v Value, name: &str) -> Result<&'v Value> {
    match value {
        Value::Record(record) => record
            .get(name)
            .ok_or_else(|| Error::missing_field(record.type_name(), name)),
        other => Err(Error::missing_field(other.type_name(), name)),
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_name
            .cmp(&other.type_name)
            .then(self.kind.cmp(&other.kind))
            .then_with(|| {
                self.fields
                    .iter()
                    .map(|f| (&f.name, &f.value))
                    .cmp(other.fields.iter().map(|f| (&f.name, &f.value)))
            })
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

/// Builder for [`Record`] instances.
#[derive(Debug)]
pub struct RecordBuilder {
    type_name: Arc<str>,
    kind: RecordKind,
    fields: Vec<Field>,
    eq: RecordEq,
}

impl RecordBuilder {
    fn new(type_name: impl Into<Arc<str>>, kind: RecordKind) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
            fields: Vec::new(),
            eq: RecordEq::Generated,
        }
    }

    /// Adds a comparable field.
    #[must_use]
    pub fn field(self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.field_with(name, value, true)
    }

    /// Adds a field, choosing whether it takes part in equality.
    #[must_use]
    pub fn field_with(
        mut self,
        name: impl Into<Arc<str>>,
        value: impl Into<Value>,
        compare: bool,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            compare,
        });
        self
    }

    /// Replaces the generated equality with a custom one.
    #[must_use]
    pub fn custom_eq(
        mut self,
        eq: impl Fn(&Record, &Value) -> Result<bool> + Send + Sync + 'static,
    ) -> Self {
        self.eq = RecordEq::Custom(Arc::new(eq));
        self
    }

    /// Finishes the record.
    #[must_use]
    pub fn build(self) -> Record {
        Record {
            type_name: self.type_name,
            kind: self.kind,
            fields: self.fields.into_iter().collect(),
            eq: self.eq,
        }
    }
}
