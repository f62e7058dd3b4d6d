//! Comparison failure explanations for reprcompare.
//!
//! Given the operator and both operands of a failed assertion, this crate
//! produces the lines a test report shows under the assertion:
//!
//! ```text
//! [1, 2] == [1, 3]
//!
//! At index 1 diff: 2 != 3
//! Use -v to get more diff
//! ```
//!
//! - [`explain`] / [`explain_with`] - The dispatcher
//! - [`Config`] - Verbosity, CI, and color settings
//! - [`Highlight`] - Terminal highlighting of reprs and diffs
//! - Shape explainers: [`text`], [`sequence`], [`mapping`], [`set`],
//!   [`record`], [`iterable`], [`notin`], combined by [`equality`]
//! - [`hooks`] - Process-wide hook slots for the host

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod diff;
pub mod dispatch;
pub mod env;
pub mod equality;
pub mod highlight;
pub mod hooks;
pub mod iterable;
pub mod mapping;
pub mod notin;
pub mod operator;
pub mod record;
pub mod sequence;
pub mod set;
pub mod text;

pub use config::{Config, VerbosityKind, VerbosityProvider};
pub use context::Context;
pub use dispatch::{explain, explain_with, summary};
pub use env::running_on_ci;
pub use equality::compare_eq_any;
pub use highlight::{AnsiHighlighter, Highlight, Lexer, PlainHighlighter};
pub use operator::Operator;
pub use text::diff_text;
