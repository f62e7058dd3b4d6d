//! Error types for comparison explanations.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure that can
//! happen while drilling into a value (a faulty repr, a faulty equality, an
//! iteration that raises) is an [`Error`]; the dispatcher decides which kinds
//! are rendered and which propagate.

use thiserror::Error;

/// The main error type for reprcompare operations.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a repr failure error.
    #[must_use]
    pub fn repr_failed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReprFailed {
            type_name: type_name.into(),
            message: message.into(),
        })
    }

    /// Creates an equality failure error.
    #[must_use]
    pub fn eq_failed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EqFailed {
            type_name: type_name.into(),
            message: message.into(),
        })
    }

    /// Creates an iteration failure error.
    #[must_use]
    pub fn iter_failed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IterFailed {
            type_name: type_name.into(),
            message: message.into(),
        })
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField {
            type_name: type_name.into(),
            field: field.into(),
        })
    }

    /// Creates an unknown operator error.
    #[must_use]
    pub fn unknown_operator(symbol: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownOperator(symbol.into()))
    }

    /// Creates a session exit request.
    ///
    /// Exit requests are never swallowed by the dispatcher.
    #[must_use]
    pub fn exit(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Exit(reason.into()))
    }

    /// Returns true if this error asks the whole test session to stop.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self.kind, ErrorKind::Exit(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Computing the representation of a value failed.
    #[error("{type_name}.__repr__ failed: {message}")]
    ReprFailed {
        /// Type of the value whose repr failed.
        type_name: String,
        /// What the host reported.
        message: String,
    },

    /// Evaluating equality between two values failed.
    #[error("{type_name}.__eq__ failed: {message}")]
    EqFailed {
        /// Type of the value whose equality failed.
        type_name: String,
        /// What the host reported.
        message: String,
    },

    /// Iterating a value failed.
    #[error("iterating {type_name} failed: {message}")]
    IterFailed {
        /// Type of the value that could not be iterated.
        type_name: String,
        /// What the host reported.
        message: String,
    },

    /// A record field was looked up on a value that does not have it.
    #[error("'{type_name}' object has no attribute '{field}'")]
    MissingField {
        /// Type of the value that was queried.
        type_name: String,
        /// The missing field name.
        field: String,
    },

    /// Operator symbol is not one of the supported comparison operators.
    #[error("unsupported comparison operator: {0:?}")]
    UnknownOperator(String),

    /// The host asked the whole test session to stop.
    #[error("session exit requested: {0}")]
    Exit(String),
}
