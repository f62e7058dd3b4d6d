//! Explanation for text unexpectedly containing a substring.

use reprcompare_foundation::Value;
use reprcompare_foundation::repr::saferepr;

use crate::context::Context;
use crate::text::diff_text;

const TERM_MAX_SIZE: usize = 42;

/// Shows where `term` occurs in `text`.
///
/// Diffs the text against itself with the first occurrence removed and keeps
/// only the lines that show the occurrence. A term that does not occur
/// explains nothing.
#[must_use]
pub fn notin_text(term: &str, text: &str, verbose: i32) -> Vec<String> {
    let Some(index) = text.find(term) else {
        return Vec::new();
    };
    let corrected = format!("{}{}", &text[..index], &text[index + term.len()..]);
    let diff = diff_text(text, &corrected, &Context::plain(verbose));

    let mut explanation = vec![format!(
        "{} is contained here:",
        saferepr(&Value::str(term), TERM_MAX_SIZE, false)
    )];
    for line in diff {
        if line.starts_with("Skipping") || line.starts_with("- ") {
            continue;
        }
        match line.strip_prefix("+ ") {
            Some(rest) => explanation.push(format!("  {rest}")),
            None => explanation.push(line),
        }
    }
    explanation
}
