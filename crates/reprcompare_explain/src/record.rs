//! Field-by-field differences between two records.

use std::sync::Arc;

use reprcompare_foundation::pprint::pformat;
use reprcompare_foundation::repr::repr;
use reprcompare_foundation::shape::has_default_eq;
use reprcompare_foundation::{Result, Value, field_of};

use crate::context::Context;
use crate::equality::compare_eq_any;
use crate::highlight::Lexer;

const INDENT: &str = "  ";

/// Field names of a record pair, split by whether their values are equal.
///
/// `same` and `differing` are disjoint and both follow the declaration order
/// of the compared fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldComparison {
    /// Every field eligible for comparison.
    pub fields_to_compare: Vec<Arc<str>>,
    /// Fields whose values are equal.
    pub same: Vec<Arc<str>>,
    /// Fields whose values differ.
    pub differing: Vec<Arc<str>>,
}

impl FieldComparison {
    /// Compares the fields of `left` against the same-named fields of `right`.
    ///
    /// Returns `None` when `left` is not a record.
    ///
    /// # Errors
    ///
    /// Fails when `right` lacks one of the fields or field equality fails.
    pub fn of(left: &Value, right: &Value) -> Result<Option<Self>> {
        let Some(record) = left.as_record() else {
            return Ok(None);
        };
        let mut comparison = Self {
            fields_to_compare: record.fields_to_compare(),
            ..Self::default()
        };
        for name in &comparison.fields_to_compare {
            let l = field_of(left, name)?;
            let r = field_of(right, name)?;
            if l.try_eq(r)? {
                comparison.same.push(Arc::clone(name));
            } else {
                comparison.differing.push(Arc::clone(name));
            }
        }
        Ok(Some(comparison))
    }
}

/// Explains which fields of two records match and drills into the ones
/// that differ.
///
/// Records with hand-written equality explain nothing.
///
/// # Errors
///
/// Fails when `right` lacks a compared field, or when equality or repr of a
/// field value fails.
pub fn compare_eq_cls(left: &Value, right: &Value, ctx: &Context<'_>) -> Result<Vec<String>> {
    if !has_default_eq(left) {
        return Ok(Vec::new());
    }
    let Some(FieldComparison { same, differing, .. }) = FieldComparison::of(left, right)? else {
        return Ok(Vec::new());
    };

    let mut explanation = Vec::new();
    if !same.is_empty() || !differing.is_empty() {
        explanation.push(String::new());
    }
    if !same.is_empty() && ctx.verbose < 2 {
        explanation.push(format!(
            "Omitting {} identical items, use -vv to show",
            same.len()
        ));
    } else if !same.is_empty() {
        explanation.push("Matching attributes:".to_string());
        explanation.extend(ctx.hl_lines(&pformat(&names(&same))?, Lexer::Python));
    }

    if !differing.is_empty() {
        explanation.push("Differing attributes:".to_string());
        explanation.extend(ctx.hl_lines(&pformat(&names(&differing))?, Lexer::Python));
        for field in &differing {
            let field_left = field_of(left, field)?;
            let field_right = field_of(right, field)?;
            explanation.push(String::new());
            explanation.push(format!("Drill down into differing attribute {field}:"));
            explanation.push(format!(
                "{INDENT}{field}: {} != {}",
                ctx.hl(&repr(field_left)?),
                ctx.hl(&repr(field_right)?)
            ));
            explanation.extend(
                compare_eq_any(field_left, field_right, ctx)?
                    .into_iter()
                    .map(|line| format!("{INDENT}{line}")),
            );
        }
    }
    Ok(explanation)
}

fn names(fields: &[Arc<str>]) -> Value {
    Value::list(fields.iter().cloned())
}
