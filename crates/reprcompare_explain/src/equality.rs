//! Explanation of a failed `==`, routed by operand shape.

use reprcompare_foundation::{Result, Shape, Tolerance, Value};

use crate::context::Context;
use crate::iterable::compare_eq_iterable;
use crate::mapping::compare_eq_dict;
use crate::record::compare_eq_cls;
use crate::sequence::compare_eq_sequence;
use crate::text::diff_text;

/// The two operands of a comparison with their shapes.
#[derive(Clone, Copy, Debug)]
pub struct Operands<'v> {
    /// Left operand, the actual value.
    pub left: &'v Value,
    /// Right operand, the expected value.
    pub right: &'v Value,
    /// Shape of the left operand.
    pub left_shape: Shape,
    /// Shape of the right operand.
    pub right_shape: Shape,
}

impl<'v> Operands<'v> {
    /// Classifies both operands.
    #[must_use]
    pub fn new(left: &'v Value, right: &'v Value) -> Self {
        Self {
            left,
            right,
            left_shape: Shape::of(left),
            right_shape: Shape::of(right),
        }
    }
}

type Predicate = fn(&Operands<'_>) -> bool;
type Handler = fn(&Operands<'_>, &Context<'_>) -> Result<Vec<String>>;

/// One row of the equality table.
struct Rule {
    name: &'static str,
    applies: Predicate,
    explain: Handler,
    /// Skip the full iterable diff appendix.
    terminal: bool,
}

/// Tried top to bottom; the first applicable rule wins.
const RULES: &[Rule] = &[
    Rule {
        name: "text",
        applies: both_text,
        explain: explain_text,
        terminal: true,
    },
    Rule {
        name: "tolerance",
        applies: either_tolerance,
        explain: explain_tolerance,
        terminal: false,
    },
    Rule {
        name: "named_tuple",
        applies: left_named_tuple,
        explain: explain_record,
        terminal: false,
    },
    Rule {
        name: "sequence",
        applies: both_sequences,
        explain: explain_sequence,
        terminal: false,
    },
    Rule {
        name: "mapping",
        applies: both_mappings,
        explain: explain_mapping,
        terminal: false,
    },
    Rule {
        name: "record",
        applies: same_field_record_type,
        explain: explain_record,
        terminal: false,
    },
];

/// Explains why two values are not equal.
///
/// Picks the first applicable explainer by shape, then appends the full
/// iterable diff when both operands are iterable. Text operands get only the
/// text diff.
///
/// # Errors
///
/// Propagates failures of host repr, equality, or iteration.
pub fn compare_eq_any(left: &Value, right: &Value, ctx: &Context<'_>) -> Result<Vec<String>> {
    let operands = Operands::new(left, right);
    let mut explanation = Vec::new();

    if let Some(rule) = RULES.iter().find(|rule| (rule.applies)(&operands)) {
        tracing::trace!(rule = rule.name, "equality rule matched");
        explanation = (rule.explain)(&operands, ctx)?;
        if rule.terminal {
            return Ok(explanation);
        }
    }

    if operands.left_shape.is_iterable() && operands.right_shape.is_iterable() {
        explanation.extend(compare_eq_iterable(left, right, ctx)?);
    }
    Ok(explanation)
}

fn both_text(o: &Operands<'_>) -> bool {
    o.left_shape.is_text() && o.right_shape.is_text()
}

fn either_tolerance(o: &Operands<'_>) -> bool {
    o.left_shape.is_tolerance() || o.right_shape.is_tolerance()
}

fn left_named_tuple(o: &Operands<'_>) -> bool {
    o.left_shape.is_namedtuple()
}

fn both_sequences(o: &Operands<'_>) -> bool {
    o.left_shape.is_sequence() && o.right_shape.is_sequence()
}

fn both_mappings(o: &Operands<'_>) -> bool {
    o.left_shape.is_mapping() && o.right_shape.is_mapping()
}

fn same_field_record_type(o: &Operands<'_>) -> bool {
    o.left_shape.is_field_record()
        && o.left_shape == o.right_shape
        && o.left.type_name() == o.right.type_name()
}

#[allow(clippy::unnecessary_wraps)]
fn explain_text(o: &Operands<'_>, ctx: &Context<'_>) -> Result<Vec<String>> {
    let (Some(left), Some(right)) = (o.left.as_str(), o.right.as_str()) else {
        return Ok(Vec::new());
    };
    Ok(diff_text(left, right, ctx))
}

/// The right operand explains first when both are tolerance values.
fn explain_tolerance(o: &Operands<'_>, _ctx: &Context<'_>) -> Result<Vec<String>> {
    if let Some(tolerance) = tolerance_of(o.right) {
        return tolerance.repr_compare(o.left);
    }
    match tolerance_of(o.left) {
        Some(tolerance) => tolerance.repr_compare(o.right),
        None => Ok(Vec::new()),
    }
}

fn tolerance_of(value: &Value) -> Option<&dyn Tolerance> {
    match value {
        Value::Object(object) => object.host().as_tolerance(),
        _ => None,
    }
}

fn explain_record(o: &Operands<'_>, ctx: &Context<'_>) -> Result<Vec<String>> {
    compare_eq_cls(o.left, o.right, ctx)
}

fn explain_sequence(o: &Operands<'_>, ctx: &Context<'_>) -> Result<Vec<String>> {
    compare_eq_sequence(o.left, o.right, ctx)
}

fn explain_mapping(o: &Operands<'_>, ctx: &Context<'_>) -> Result<Vec<String>> {
    compare_eq_dict(o.left, o.right, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reprcompare_foundation::{Approx, Record};

    fn explain(left: &Value, right: &Value, verbose: i32) -> Vec<String> {
        compare_eq_any(left, right, &Context::plain(verbose)).unwrap()
    }

    #[test]
    fn text_gets_only_the_text_diff() {
        assert_eq!(explain(&"a".into(), &"b".into(), 1), vec!["- b", "+ a"]);
    }

    #[test]
    fn sequence_gets_appendix_hint() {
        assert_eq!(
            explain(&Value::list([1, 2]), &Value::list([1, 3]), 0),
            vec!["At index 1 diff: 2 != 3", "Use -v to get more diff"]
        );
    }

    #[test]
    fn tolerance_on_either_side() {
        let approx: Value = Approx::new(1.0).into();
        let right_side = explain(&Value::Float(1.5), &approx, 0);
        let left_side = explain(&approx, &Value::Float(1.5), 0);
        assert_eq!(right_side[0], "comparison failed");
        assert_eq!(right_side, left_side);
    }

    #[test]
    fn named_tuple_compares_fields() {
        let p = |y: i64| -> Value { Record::named_tuple("P").field("x", 1).field("y", y).build().into() };
        let out = explain(&p(2), &p(3), 0);
        assert!(out.contains(&"Differing attributes:".to_string()));
        assert_eq!(out.last().map(String::as_str), Some("Use -v to get more diff"));
    }

    #[test]
    fn different_record_types_explain_nothing() {
        let a: Value = Record::dataclass("A").field("x", 1).build().into();
        let b: Value = Record::dataclass("B").field("x", 2).build().into();
        assert!(explain(&a, &b, 0).is_empty());
    }

    #[test]
    fn mixed_sequence_and_set_only_get_appendix() {
        assert_eq!(
            explain(&Value::list([1]), &Value::set([2]), 0),
            vec!["Use -v to get more diff"]
        );
    }

    #[test]
    fn scalars_explain_nothing() {
        assert!(explain(&Value::Int(1), &Value::Int(2), 2).is_empty());
    }

    #[test]
    fn rules_are_tried_in_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["text", "tolerance", "named_tuple", "sequence", "mapping", "record"]
        );
    }
}
