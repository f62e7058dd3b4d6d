//! Explanation markup formatter for reprcompare.
//!
//! Explanations produced while an assertion is evaluated are nested: a
//! failing call explains its arguments, which explain their attributes.
//! They are written in a small line-oriented markup and flattened here into
//! indented report text with `where`/`and` clauses.
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `\n{`  | open a nested clause |
//! | `\n}`  | close the clause, appending the rest to its parent line |
//! | `\n~`  | continuation line, indented one level deeper |
//! | `\n>`  | continuation line at the current level |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod markup;

pub use markup::{format_explanation, format_lines, split_explanation};
