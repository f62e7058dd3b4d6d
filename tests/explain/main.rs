//! Integration tests for Layer 2: Explain
//!
//! Tests the dispatcher end to end and each shape explainer through it.

mod dispatch;
mod explainers;
mod session;
