//! Integration tests for Layer 0: Foundation
//!
//! Tests for the value model: Value, Record, host objects, shapes, safe repr,
//! pretty printing, Error, and persistent collections.

mod collections;
mod errors;
mod records;
mod repr;
mod values;
