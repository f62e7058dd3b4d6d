//! Approximate scalar comparison.

use crate::object::{HostObject, Tolerance};
use crate::repr::{float_repr, pad_exponent, to_str};
use crate::value::Value;
use crate::Result;

const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-6;
const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-12;

/// A number that compares equal to anything within a tolerance of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Approx {
    expected: f64,
    rel: Option<f64>,
    abs: Option<f64>,
}

impl Approx {
    /// Creates an approximate value with the default tolerances.
    #[must_use]
    pub const fn new(expected: f64) -> Self {
        Self {
            expected,
            rel: None,
            abs: None,
        }
    }

    /// Builder method to set the relative tolerance.
    #[must_use]
    pub const fn with_rel(mut self, rel: f64) -> Self {
        self.rel = Some(rel);
        self
    }

    /// Builder method to set the absolute tolerance.
    #[must_use]
    pub const fn with_abs(mut self, abs: f64) -> Self {
        self.abs = Some(abs);
        self
    }

    /// The effective tolerance around the expected value.
    ///
    /// An explicit absolute tolerance without a relative one is used alone.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        let absolute = self.abs.unwrap_or(DEFAULT_ABSOLUTE_TOLERANCE);
        if self.rel.is_none() && self.abs.is_some() {
            return absolute;
        }
        let relative = self.rel.unwrap_or(DEFAULT_RELATIVE_TOLERANCE) * self.expected.abs();
        relative.max(absolute)
    }

    /// Returns true if `actual` is within tolerance of the expected value.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches(&self, actual: f64) -> bool {
        if actual == self.expected {
            return true;
        }
        if self.expected.is_infinite() {
            return false;
        }
        (self.expected - actual).abs() <= self.tolerance()
    }
}

impl HostObject for Approx {
    fn type_name(&self) -> &str {
        "ApproxScalar"
    }

    fn repr(&self) -> Result<String> {
        if self.expected.is_infinite() {
            return Ok(float_repr(self.expected));
        }
        Ok(format!(
            "{} ± {}",
            float_repr(self.expected),
            exp_repr(self.tolerance())
        ))
    }

    fn eq_value(&self, other: &Value) -> Result<bool> {
        Ok(match other {
            Value::Int(_) | Value::Float(_) => other.as_number().is_some_and(|n| self.matches(n)),
            _ => false,
        })
    }

    fn as_tolerance(&self) -> Option<&dyn Tolerance> {
        Some(self)
    }
}

impl Tolerance for Approx {
    fn repr_compare(&self, other: &Value) -> Result<Vec<String>> {
        Ok(vec![
            "comparison failed".to_string(),
            format!("Obtained: {}", to_str(other)?),
            format!("Expected: {}", self.repr()?),
        ])
    }
}

/// One-decimal exponent notation with a signed two-digit exponent.
fn exp_repr(n: f64) -> String {
    pad_exponent(format!("{n:.1e}"))
}

impl From<Approx> for Value {
    fn from(approx: Approx) -> Self {
        Self::object(approx)
    }
}
