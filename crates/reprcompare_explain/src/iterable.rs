//! Full pretty-printed diff of two iterables.

use reprcompare_foundation::{PrettyPrinter, Result, Value};

use crate::context::{Context, splitlines};
use crate::diff::ndiff;

/// Diffs the expanded pretty-printed forms of two iterables.
///
/// Below verbosity 1 and off CI this only hints at `-v`.
///
/// # Errors
///
/// Propagates repr failures while pretty-printing.
pub fn compare_eq_iterable(left: &Value, right: &Value, ctx: &Context<'_>) -> Result<Vec<String>> {
    if ctx.verbose <= 0 && !ctx.on_ci {
        return Ok(vec!["Use -v to get more diff".to_string()]);
    }

    let printer = PrettyPrinter::new();
    let left_formatting = splitlines(&printer.pformat(left)?);
    let right_formatting = splitlines(&printer.pformat(right)?);

    let mut explanation = vec![String::new(), "Full diff:".to_string()];
    let diff = ndiff(&right_formatting, &left_formatting)
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    explanation.extend(splitlines(&ctx.hl_diff(&diff)));
    Ok(explanation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_when_quiet() {
        let out = compare_eq_iterable(&Value::list([1]), &Value::list([2]), &Context::plain(0)).unwrap();
        assert_eq!(out, vec!["Use -v to get more diff"]);
    }

    #[test]
    fn full_diff_when_verbose() {
        let out = compare_eq_iterable(&Value::list([1, 2]), &Value::list([1, 3]), &Context::plain(1)).unwrap();
        assert_eq!(
            out,
            vec![
                "",
                "Full diff:",
                "  [",
                "      1,",
                "-     3,",
                "?     ^",
                "+     2,",
                "?     ^",
                "  ]",
            ]
        );
    }

    #[test]
    fn full_diff_on_ci() {
        let ctx = Context::new(&crate::highlight::PlainHighlighter, 0, true);
        let out = compare_eq_iterable(&Value::list([1]), &Value::list([2]), &ctx).unwrap();
        assert_eq!(out[1], "Full diff:");
    }
}
