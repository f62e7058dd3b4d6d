//! Integration tests for Layer 1: Format
//!
//! Tests flattening explanation markup into indented report text.

mod markup;
