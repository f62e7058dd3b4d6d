//! Integration tests for explanation markup
//!
//! Tests `where`/`and` clauses, nesting, closing text, and continuations.

use reprcompare_format::{format_explanation, format_lines, split_explanation};

// =============================================================================
// Clauses
// =============================================================================

#[test]
fn call_result_is_explained() {
    let out = format_explanation("assert False\n{False = is_even(3)\n}");
    assert_eq!(out, "assert False\n +  where False = is_even(3)");
}

#[test]
fn sibling_and_nested_clauses() {
    let out = format_explanation("assert a == b\n{a = f(1)\n}\n{b = g(2)\n{g = h\n}\n}");
    assert_eq!(
        out,
        "assert a == b\n +  where a = f(1)\n +  and   b = g(2)\n +    where g = h"
    );
}

#[test]
fn closing_text_rejoins_parent_line() {
    let out = format_explanation("assert x\n{x = y\n{y = z\n} .attr\n}");
    assert_eq!(out, "assert x\n +  where x = y .attr\n +    where y = z");
}

// =============================================================================
// Continuations
// =============================================================================

#[test]
fn comparison_details_are_indented() {
    let out = format_explanation(
        "assert [1] == [2]\n~At index 0 diff: 1 != 2\n~Use -v to get more diff",
    );
    assert_eq!(
        out,
        "assert [1] == [2]\n  At index 0 diff: 1 != 2\n  Use -v to get more diff"
    );
}

#[test]
fn raw_newlines_stay_on_their_line() {
    let lines = split_explanation("assert 'a\nb' == c\n{c = d\n}");
    assert_eq!(lines, vec!["assert 'a\\nb' == c", "{c = d", "}"]);
}

// =============================================================================
// Malformed Markup
// =============================================================================

#[test]
#[should_panic(expected = "1 clause(s) left open")]
fn unclosed_clause() {
    let _ = format_explanation("assert a\n{a = b\n{b = c\n}");
}

#[test]
#[should_panic(expected = "line without marker")]
fn line_without_marker() {
    let _ = format_lines(&["assert a", "a = b"]);
}
