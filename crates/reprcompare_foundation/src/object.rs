//! Host-defined operands.
//!
//! Anything the value model cannot express natively (custom classes,
//! generators, tolerance values) enters as a [`HostObject`]. Its repr and
//! equality are fallible because the host code behind them may fail.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::Result;
use crate::value::Value;

/// A value whose behavior is supplied by the host.
pub trait HostObject: Send + Sync {
    /// Name of the host type, as shown in reprs and error messages.
    fn type_name(&self) -> &str;

    /// Full representation of the object.
    ///
    /// # Errors
    ///
    /// Returns an error when the host's repr fails.
    fn repr(&self) -> Result<String>;

    /// Native equality against any other value.
    ///
    /// Identity is checked before this is called, so the default treats
    /// every other value as unequal.
    ///
    /// # Errors
    ///
    /// Returns an error when the host's equality fails.
    fn eq_value(&self, _other: &Value) -> Result<bool> {
        Ok(false)
    }

    /// Items produced by iterating the object.
    ///
    /// `None` means the object is not iterable at all.
    fn iterate(&self) -> Option<Result<Vec<Value>>> {
        None
    }

    /// Tolerance capability, for values that explain their own comparisons.
    fn as_tolerance(&self) -> Option<&dyn Tolerance> {
        None
    }
}

/// A value with approximate-equality semantics that can explain its own
/// comparison failures.
pub trait Tolerance {
    /// Explanation lines for a failed comparison against `other`.
    ///
    /// # Errors
    ///
    /// Returns an error when rendering either side fails.
    fn repr_compare(&self, other: &Value) -> Result<Vec<String>>;
}

/// Shared handle to a host object.
#[derive(Clone)]
pub struct Object(Arc<dyn HostObject>);

impl Object {
    /// Wraps a host object.
    #[must_use]
    pub fn new(object: impl HostObject + 'static) -> Self {
        Self(Arc::new(object))
    }

    /// Returns the host type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    /// Returns the underlying host object.
    #[must_use]
    pub fn host(&self) -> &dyn HostObject {
        self.0.as_ref()
    }

    /// Returns true if both handles point at the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }

    fn address(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Object {}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_name()
            .cmp(other.type_name())
            .then_with(|| self.address().cmp(&other.address()))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object>", self.type_name())
    }
}
