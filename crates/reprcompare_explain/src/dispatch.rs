//! Entry point: explains a failed comparison.
//!
//! The dispatcher renders a one-line summary of the comparison, routes the
//! operands to at most one explainer through an ordered rule table, and
//! assembles the final lines. Failures of host code while explaining are
//! turned into a fixed two-line note; session exit requests propagate.

use reprcompare_foundation::repr::{saferepr, saferepr_unlimited};
use reprcompare_foundation::{Error, Result, Shape, Value};
use unicode_normalization::UnicodeNormalization;

use crate::config::{Config, VerbosityKind, VerbosityProvider};
use crate::context::Context;
use crate::env::running_on_ci;
use crate::equality::{Operands, compare_eq_any};
use crate::highlight::Highlight;
use crate::notin::notin_text;
use crate::operator::Operator;
use crate::set;

/// Width of the report the summary line has to fit in.
const SUMMARY_WIDTH: usize = 80;
/// Columns taken by the report's own prefix before the summary.
const SUMMARY_INDENT: usize = 15;

/// Explains a failed `left op right` comparison using a [`Config`].
///
/// Returns `Ok(None)` when no specialized explanation applies.
///
/// # Errors
///
/// Only a session exit request raised by host code is returned as an error.
pub fn explain(
    config: &Config,
    op: Operator,
    left: &Value,
    right: &Value,
) -> Result<Option<Vec<String>>> {
    explain_with(config, config.highlighter(), op, left, right)
}

/// Explains a failed `left op right` comparison.
///
/// The first line of the result is a summary of the comparison. A blank line
/// separates it from the details unless the details already start with one.
///
/// # Errors
///
/// Only a session exit request raised by host code is returned as an error.
pub fn explain_with(
    verbosity: &dyn VerbosityProvider,
    highlighter: &dyn Highlight,
    op: Operator,
    left: &Value,
    right: &Value,
) -> Result<Option<Vec<String>>> {
    let verbose = verbosity.get_verbosity(VerbosityKind::Assertions);
    let on_ci = verbosity.ci_override().unwrap_or_else(running_on_ci);
    let ctx = Context::new(highlighter, verbose, on_ci);
    let summary = summary(op, left, right, verbose);

    let explanation = match dispatch(op, left, right, &ctx) {
        Ok(explanation) => explanation,
        Err(err) if err.is_exit() => {
            tracing::debug!(%op, error = %err, "explanation aborted by exit request");
            return Err(err);
        }
        Err(err) => {
            tracing::warn!(%op, error = %err, "representation of details failed");
            representation_failed(&err)
        }
    };

    if explanation.is_empty() {
        return Ok(None);
    }
    let mut lines = Vec::with_capacity(explanation.len() + 2);
    lines.push(summary);
    if explanation.first().is_some_and(|line| !line.is_empty()) {
        lines.push(String::new());
    }
    lines.extend(explanation);
    Ok(Some(lines))
}

/// One-line `left op right` summary.
///
/// Each side is bounded so the line fits the report width, except at
/// verbosity 2 and above, or when both sides are text that only differs in
/// Unicode normalization; those are shown in full and the latter escaped.
#[must_use]
pub fn summary(op: Operator, left: &Value, right: &Value, verbose: i32) -> String {
    let use_ascii = normalization_equal(left, right);
    let (left_repr, right_repr) = if verbose > 1 || use_ascii {
        (
            saferepr_unlimited(left, use_ascii),
            saferepr_unlimited(right, use_ascii),
        )
    } else {
        let maxsize = summary_maxsize(op);
        (
            saferepr(left, maxsize, use_ascii),
            saferepr(right, maxsize, use_ascii),
        )
    };
    format!("{left_repr} {op} {right_repr}")
}

/// Width available for each side of the summary around `op`.
#[must_use]
pub fn summary_maxsize(op: Operator) -> usize {
    SUMMARY_WIDTH.saturating_sub(SUMMARY_INDENT + op.symbol().len() + 2) / 2
}

/// Both text, not identical, and equal after canonical decomposition.
fn normalization_equal(left: &Value, right: &Value) -> bool {
    match (left.as_str(), right.as_str()) {
        (Some(l), Some(r)) => l != r && l.nfd().eq(r.nfd()),
        _ => false,
    }
}

type Predicate = fn(Operator, &Operands<'_>) -> bool;
type Handler = fn(Operator, &Operands<'_>, &Context<'_>) -> Result<Vec<String>>;

/// One row of the dispatch table.
struct Route {
    name: &'static str,
    applies: Predicate,
    explain: Handler,
}

/// Tried top to bottom; the first applicable route wins.
const ROUTES: &[Route] = &[
    Route {
        name: "set",
        applies: both_sets,
        explain: explain_set,
    },
    Route {
        name: "equality",
        applies: is_equality,
        explain: explain_equality,
    },
    Route {
        name: "not_in",
        applies: text_not_in_text,
        explain: explain_not_in,
    },
];

fn both_sets(op: Operator, o: &Operands<'_>) -> bool {
    op.is_set_comparison() && o.left_shape.is_set() && o.right_shape.is_set()
}

fn is_equality(op: Operator, _: &Operands<'_>) -> bool {
    op == Operator::Eq
}

fn text_not_in_text(op: Operator, o: &Operands<'_>) -> bool {
    op == Operator::NotIn && o.left_shape == Shape::Text && o.right_shape == Shape::Text
}

#[allow(clippy::unnecessary_wraps)]
fn explain_set(op: Operator, o: &Operands<'_>, ctx: &Context<'_>) -> Result<Vec<String>> {
    Ok(set::compare(op, o.left, o.right, ctx))
}

fn explain_equality(_: Operator, o: &Operands<'_>, ctx: &Context<'_>) -> Result<Vec<String>> {
    compare_eq_any(o.left, o.right, ctx)
}

#[allow(clippy::unnecessary_wraps)]
fn explain_not_in(_: Operator, o: &Operands<'_>, ctx: &Context<'_>) -> Result<Vec<String>> {
    let (Some(term), Some(text)) = (o.left.as_str(), o.right.as_str()) else {
        return Ok(Vec::new());
    };
    Ok(notin_text(term, text, ctx.verbose))
}

fn dispatch(op: Operator, left: &Value, right: &Value, ctx: &Context<'_>) -> Result<Vec<String>> {
    let operands = Operands::new(left, right);
    let Some(route) = ROUTES.iter().find(|route| (route.applies)(op, &operands)) else {
        tracing::debug!(%op, verbose = ctx.verbose, "no explanation applies");
        return Ok(Vec::new());
    };
    tracing::debug!(route = route.name, %op, verbose = ctx.verbose, "explaining comparison");
    (route.explain)(op, &operands, ctx)
}

fn representation_failed(err: &Error) -> Vec<String> {
    vec![
        format!("(reprcompare: representation of details failed: {err}."),
        " Probably an object has a faulty __repr__.)".to_string(),
    ]
}
