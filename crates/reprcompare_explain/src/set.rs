//! Relationships between two sets.

use reprcompare_foundation::repr::{DEFAULT_REPR_MAX_SIZE, saferepr};
use reprcompare_foundation::{PSet, Value};

use crate::context::Context;
use crate::operator::Operator;

/// Explains why a set comparison under `op` failed.
///
/// Items are reported in the value order, each on its own line. Non-set
/// operands and `not in` explain nothing.
#[must_use]
pub fn compare(op: Operator, left: &Value, right: &Value, ctx: &Context<'_>) -> Vec<String> {
    let (Some(left), Some(right)) = (left.as_set(), right.as_set()) else {
        return Vec::new();
    };
    match op {
        Operator::Eq => {
            let mut explanation = one_sided_diff("left", left, right, ctx);
            explanation.extend(one_sided_diff("right", right, left, ctx));
            explanation
        }
        Operator::Ne => both_equal(),
        Operator::Ge => one_sided_diff("right", right, left, ctx),
        Operator::Le => one_sided_diff("left", left, right, ctx),
        Operator::Gt => or_equal(one_sided_diff("right", right, left, ctx)),
        Operator::Lt => or_equal(one_sided_diff("left", left, right, ctx)),
        Operator::NotIn => Vec::new(),
    }
}

fn one_sided_diff(side: &str, this: &PSet<Value>, other: &PSet<Value>, ctx: &Context<'_>) -> Vec<String> {
    let extra = this.difference(other);
    if extra.is_empty() {
        return Vec::new();
    }
    let mut explanation = vec![format!("Extra items in the {side} set:")];
    explanation.extend(
        extra
            .iter()
            .map(|item| ctx.hl(&saferepr(item, DEFAULT_REPR_MAX_SIZE, false))),
    );
    explanation
}

fn or_equal(explanation: Vec<String>) -> Vec<String> {
    if explanation.is_empty() {
        both_equal()
    } else {
        explanation
    }
}

fn both_equal() -> Vec<String> {
    vec!["Both sets are equal".to_string()]
}
