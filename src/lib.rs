//! reprcompare - Explanations for failed test assertions
//!
//! This crate re-exports all layers of the reprcompare system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: reprcompare_explain     - Dispatcher, shape explainers, config, hooks
//! Layer 1: reprcompare_format      - Explanation markup formatter
//! Layer 0: reprcompare_foundation  - Value model, shapes, safe repr, Error
//! ```

pub use reprcompare_explain as explain;
pub use reprcompare_format as format;
pub use reprcompare_foundation as foundation;
