//! Per-call explanation settings shared by every explainer.

use crate::highlight::{Highlight, Lexer, PlainHighlighter};

/// Settings threaded through one explanation.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Highlighter applied to reprs and diffs.
    pub highlighter: &'a dyn Highlight,
    /// Assertion verbosity.
    pub verbose: i32,
    /// Whether to behave as on CI.
    pub on_ci: bool,
}

impl<'a> Context<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(highlighter: &'a dyn Highlight, verbose: i32, on_ci: bool) -> Self {
        Self {
            highlighter,
            verbose,
            on_ci,
        }
    }

    /// Highlights a value representation.
    #[must_use]
    pub fn hl(&self, source: &str) -> String {
        self.highlighter.highlight(source, Lexer::Python)
    }

    /// Highlights a diff.
    #[must_use]
    pub fn hl_diff(&self, source: &str) -> String {
        self.highlighter.highlight(source, Lexer::Diff)
    }

    /// Highlights `source` and splits it into lines.
    #[must_use]
    pub fn hl_lines(&self, source: &str, lexer: Lexer) -> Vec<String> {
        splitlines(&self.highlighter.highlight(source, lexer))
    }
}

impl Context<'static> {
    /// Plain context at the given verbosity, off CI.
    #[must_use]
    pub fn plain(verbose: i32) -> Self {
        Self::new(&PlainHighlighter, verbose, false)
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("verbose", &self.verbose)
            .field("on_ci", &self.on_ci)
            .finish_non_exhaustive()
    }
}

/// Splits text at line boundaries, keeping the line endings.
///
/// Recognizes `\n`, `\r\n`, `\r`, and the other Unicode line separators.
#[must_use]
pub fn splitlines_keepends(s: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\r' if chars.peek().is_some_and(|&(_, n)| n == '\n') => {
                chars.next();
                i + 2
            }
            c if is_line_break(c) => i + c.len_utf8(),
            _ => continue,
        };
        lines.push(&s[start..end]);
        start = end;
    }
    if start < s.len() {
        lines.push(&s[start..]);
    }
    lines
}

/// Splits text at line boundaries, dropping the line endings.
#[must_use]
pub fn splitlines(s: &str) -> Vec<String> {
    splitlines_keepends(s)
        .into_iter()
        .map(|line| line.trim_end_matches(is_line_break).to_string())
        .collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
