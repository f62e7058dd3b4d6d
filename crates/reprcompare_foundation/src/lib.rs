//! Value model, shape predicates, and safe representations for reprcompare.
//!
//! This crate provides:
//! - [`Value`] - The operand model explained by the comparison engine
//! - [`Record`] - Named tuples, data records, and attrs-style records
//! - [`HostObject`] - The seam through which foreign values plug in
//! - [`Shape`] - Closed classification of operands
//! - [`repr`] - Fallible, size-bounded, and unbounded representations
//! - [`pprint`] - Line-breaking pretty-printers
//! - [`Error`] - Failures raised by host code while explaining
//! - Persistent collections ([`PVec`], [`PSet`], [`PMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod approx;
pub mod collections;
pub mod error;
pub mod object;
pub mod pprint;
pub mod record;
pub mod repr;
pub mod shape;
pub mod value;

pub use approx::Approx;
pub use collections::{PMap, PSet, PVec};
pub use error::{Error, ErrorKind};
pub use object::{HostObject, Object, Tolerance};
pub use pprint::{PrettyPrinter, pformat};
pub use record::{CustomEq, Field, Record, RecordBuilder, RecordEq, RecordKind, field_of};
pub use repr::{DEFAULT_REPR_MAX_SIZE, saferepr, saferepr_unlimited};
pub use shape::Shape;
pub use value::Value;

/// Result type alias using the foundation error type.
pub type Result<T> = std::result::Result<T, Error>;
