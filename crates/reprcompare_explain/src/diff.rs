//! Line diffs in `ndiff` style.
//!
//! Every output line starts with a two-character code:
//!
//! | Code  | Meaning |
//! |-------|---------|
//! | `"- "` | line only in the first sequence |
//! | `"+ "` | line only in the second sequence |
//! | `"  "` | line common to both |
//! | `"? "` | guide marking intraline changes of the line above |
//!
//! Guide lines are emitted when a replaced line closely resembles its
//! replacement. Input lines are copied as given, line endings included.
//!
//! All comparisons of one [`ndiff`] call share a time budget. Past it, the
//! diff is still complete but no longer minimal, and similarity scores only
//! count the common prefix and suffix of a pair, so long dissimilar lines
//! fall back to a plain replacement.

use std::ops::Range;
use std::time::{Duration, Instant};

use similar::{Algorithm, DiffTag, capture_diff_slices_deadline, get_diff_ratio};

/// Pairs scoring at or below this are never considered similar.
const RATIO_FLOOR: f32 = 0.74;
/// Pairs must score at least this to get guide lines.
const RATIO_CUTOFF: f32 = 0.75;
/// Upper bound on line pairs scored within one replaced block.
const MAX_PAIRINGS: usize = 10_000;
/// Time budget for all comparisons of one diff.
const DIFF_BUDGET: Duration = Duration::from_millis(250);

/// Compares two sequences of lines.
#[must_use]
pub fn ndiff<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> Vec<String> {
    let a: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
    let b: Vec<&str> = b.iter().map(AsRef::as_ref).collect();
    let deadline = Instant::now().checked_add(DIFF_BUDGET);
    let mut differ = Differ {
        a: &a,
        b: &b,
        deadline,
        out: Vec::new(),
    };
    for op in capture_diff_slices_deadline(Algorithm::Myers, &a, &b, deadline) {
        let (tag, old, new) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => differ.dump(' ', Side::A, old),
            DiffTag::Delete => differ.dump('-', Side::A, old),
            DiffTag::Insert => differ.dump('+', Side::B, new),
            DiffTag::Replace => differ.fancy_replace(old, new),
        }
    }
    differ.out
}

#[derive(Clone, Copy)]
enum Side {
    A,
    B,
}

struct Differ<'a> {
    a: &'a [&'a str],
    b: &'a [&'a str],
    deadline: Option<Instant>,
    out: Vec<String>,
}

impl Differ<'_> {
    fn dump(&mut self, code: char, side: Side, range: Range<usize>) {
        let lines = match side {
            Side::A => &self.a[range],
            Side::B => &self.b[range],
        };
        for line in lines {
            self.out.push(format!("{code} {line}"));
        }
    }

    fn plain_replace(&mut self, a: Range<usize>, b: Range<usize>) {
        if b.len() < a.len() {
            self.dump('+', Side::B, b);
            self.dump('-', Side::A, a);
        } else {
            self.dump('-', Side::A, a);
            self.dump('+', Side::B, b);
        }
    }

    /// Replaces block `a` with block `b`, synchronizing on the most similar
    /// pair of lines and recursing on both sides of it.
    fn fancy_replace(&mut self, a: Range<usize>, b: Range<usize>) {
        if a.len().saturating_mul(b.len()) > MAX_PAIRINGS {
            self.plain_replace(a, b);
            return;
        }

        let a_chars: Vec<Vec<char>> = a.clone().map(|i| self.a[i].chars().collect()).collect();
        let mut best_ratio = RATIO_FLOOR;
        let mut best = None;
        let mut identical = None;
        for j in b.clone() {
            let bj: Vec<char> = self.b[j].chars().collect();
            for (offset, ai) in a_chars.iter().enumerate() {
                let i = a.start + offset;
                if self.a[i] == self.b[j] {
                    identical.get_or_insert((i, j));
                    continue;
                }
                if quick_ratio_bound(ai.len(), bj.len()) <= best_ratio {
                    continue;
                }
                let ratio = char_ratio(ai, &bj, self.deadline);
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best = Some((i, j));
                }
            }
        }

        let (best_i, best_j, is_identical) = match (best, identical) {
            (Some((i, j)), _) if best_ratio >= RATIO_CUTOFF => (i, j, false),
            (_, Some((i, j))) => (i, j, true),
            _ => {
                self.plain_replace(a, b);
                return;
            }
        };

        self.fancy_helper(a.start..best_i, b.start..best_j);
        let (a_line, b_line) = (self.a[best_i], self.b[best_j]);
        if is_identical {
            self.out.push(format!("  {a_line}"));
        } else {
            let (a_tags, b_tags) = intraline_tags(a_line, b_line, self.deadline);
            self.qformat(a_line, b_line, &a_tags, &b_tags);
        }
        self.fancy_helper(best_i + 1..a.end, best_j + 1..b.end);
    }

    fn fancy_helper(&mut self, a: Range<usize>, b: Range<usize>) {
        match (a.is_empty(), b.is_empty()) {
            (false, false) => self.fancy_replace(a, b),
            (false, true) => self.dump('-', Side::A, a),
            (true, false) => self.dump('+', Side::B, b),
            (true, true) => {}
        }
    }

    fn qformat(&mut self, a_line: &str, b_line: &str, a_tags: &str, b_tags: &str) {
        let a_tags = keep_original_whitespace(a_line, a_tags);
        let b_tags = keep_original_whitespace(b_line, b_tags);
        self.out.push(format!("- {a_line}"));
        if !a_tags.is_empty() {
            self.out.push(format!("? {a_tags}"));
        }
        self.out.push(format!("+ {b_line}"));
        if !b_tags.is_empty() {
            self.out.push(format!("? {b_tags}"));
        }
    }
}

/// Upper bound of [`char_ratio`] from the lengths alone.
#[allow(clippy::cast_precision_loss)]
fn quick_ratio_bound(a_len: usize, b_len: usize) -> f32 {
    let total = a_len + b_len;
    if total == 0 {
        1.0
    } else {
        2.0 * a_len.min(b_len) as f32 / total as f32
    }
}

/// Similarity of two lines in `0.0..=1.0`: twice the matched characters
/// over the total number of characters.
fn char_ratio(a: &[char], b: &[char], deadline: Option<Instant>) -> f32 {
    let ops = capture_diff_slices_deadline(Algorithm::Myers, a, b, deadline);
    get_diff_ratio(&ops, a.len(), b.len())
}

/// Guide strings for a replaced pair: `^` changed, `-` deleted, `+` inserted.
fn intraline_tags(a_line: &str, b_line: &str, deadline: Option<Instant>) -> (String, String) {
    let a: Vec<char> = a_line.chars().collect();
    let b: Vec<char> = b_line.chars().collect();
    let mut a_tags = String::new();
    let mut b_tags = String::new();
    for op in capture_diff_slices_deadline(Algorithm::Myers, &a, &b, deadline) {
        let (tag, old, new) = op.as_tag_tuple();
        let (a_mark, b_mark) = match tag {
            DiffTag::Replace => ('^', '^'),
            DiffTag::Delete => ('-', ' '),
            DiffTag::Insert => (' ', '+'),
            DiffTag::Equal => (' ', ' '),
        };
        a_tags.extend(std::iter::repeat_n(a_mark, old.len()));
        b_tags.extend(std::iter::repeat_n(b_mark, new.len()));
    }
    (a_tags, b_tags)
}

/// Copies tabs and other whitespace of `line` into the blank positions of
/// `tags`, so the guide lines up under the line, then trims the end.
fn keep_original_whitespace(line: &str, tags: &str) -> String {
    let kept: String = line
        .chars()
        .zip(tags.chars())
        .map(|(c, tag)| if tag == ' ' && c.is_whitespace() { c } else { tag })
        .collect();
    kept.trim_end().to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn both_sides_are_recoverable(
            a in proptest::collection::vec("[a-c]{0,4}", 0..6),
            b in proptest::collection::vec("[a-c]{0,4}", 0..6),
        ) {
            let out = ndiff(&a, &b);
            let left: Vec<&str> = out
                .iter()
                .filter(|l| l.starts_with("- ") || l.starts_with("  "))
                .map(|l| &l[2..])
                .collect();
            let right: Vec<&str> = out
                .iter()
                .filter(|l| l.starts_with("+ ") || l.starts_with("  "))
                .map(|l| &l[2..])
                .collect();
            prop_assert_eq!(left, a.iter().map(String::as_str).collect::<Vec<_>>());
            prop_assert_eq!(right, b.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
