//! Differences between two texts.

use reprcompare_foundation::repr::str_repr;

use crate::context::{Context, splitlines, splitlines_keepends};
use crate::diff::ndiff;

/// Identical leading or trailing runs longer than this are skipped.
const SKIP_THRESHOLD: usize = 42;
/// Characters of a skipped run kept as context.
const SKIP_CONTEXT: usize = 10;

/// Explains the difference between two texts as a line diff.
///
/// The right text is the expected baseline the left one is compared against.
/// Below verbosity 1, long identical leading and trailing runs are skipped.
/// Identical texts produce no lines.
#[must_use]
pub fn diff_text(left: &str, right: &str, ctx: &Context<'_>) -> Vec<String> {
    if left == right {
        return Vec::new();
    }

    let mut explanation = Vec::new();
    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();
    let mut left = left_chars.as_slice();
    let mut right = right_chars.as_slice();

    if ctx.verbose < 1 {
        let leading = common_prefix(left, right);
        if leading > SKIP_THRESHOLD {
            let skip = leading - SKIP_CONTEXT;
            explanation.push(format!(
                "Skipping {skip} identical leading characters in diff, use -v to show"
            ));
            left = &left[skip..];
            right = &right[skip..];
        }
        if left.len() == right.len() {
            let trailing = common_suffix(left, right);
            if trailing > SKIP_THRESHOLD {
                let skip = trailing - SKIP_CONTEXT;
                explanation.push(format!(
                    "Skipping {skip} identical trailing characters in diff, use -v to show"
                ));
                left = &left[..left.len() - skip];
                right = &right[..right.len() - skip];
            }
        }
    }

    let mut left: String = left.iter().collect();
    let mut right: String = right.iter().collect();
    if is_space(&left) || is_space(&right) {
        left = str_repr(&left);
        right = str_repr(&right);
        explanation.push("Strings contain only whitespace, escaping them using repr()".to_string());
    }

    let diff = ndiff(&splitlines_keepends(&right), &splitlines_keepends(&left));
    let joined = diff
        .iter()
        .map(|line| line.trim_matches('\n'))
        .collect::<Vec<_>>()
        .join("\n");
    explanation.extend(splitlines(&ctx.hl_diff(&joined)));
    explanation
}

fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter().rev().zip(b.iter().rev()).take_while(|(x, y)| x == y).count()
}

/// Non-empty and whitespace only.
fn is_space(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_whitespace)
}
