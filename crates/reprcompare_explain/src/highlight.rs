//! Syntax highlighting of explanation text.
//!
//! Highlighters only insert escape sequences; they never add or remove
//! newlines, so highlighted text splits into the same lines as the input.

/// The syntax a piece of text is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lexer {
    /// Value representations.
    #[default]
    Python,
    /// Line diffs with `+`, `-`, `?` and ` ` prefixes.
    Diff,
}

/// Colors explanation text for the terminal.
pub trait Highlight {
    /// Highlights `source` written in the syntax of `lexer`.
    fn highlight(&self, source: &str, lexer: Lexer) -> String;
}

/// Returns text unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainHighlighter;

impl Highlight for PlainHighlighter {
    fn highlight(&self, source: &str, _lexer: Lexer) -> String {
        source.to_string()
    }
}

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";

/// Highlights with ANSI escape sequences.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiHighlighter;

impl Highlight for AnsiHighlighter {
    fn highlight(&self, source: &str, lexer: Lexer) -> String {
        match lexer {
            Lexer::Python => highlight_repr(source),
            Lexer::Diff => highlight_diff(source),
        }
    }
}

fn highlight_diff(source: &str) -> String {
    let mut result = String::with_capacity(source.len() * 2);
    for (i, line) in source.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        let color = match line.chars().next() {
            Some('+') => Some(GREEN),
            Some('-') => Some(RED),
            Some('?') => Some(CYAN),
            _ => None,
        };
        match color {
            Some(color) => {
                result.push_str(color);
                result.push_str(line);
                result.push_str(RESET);
            }
            None => result.push_str(line),
        }
    }
    result
}

#[allow(clippy::too_many_lines)]
fn highlight_repr(source: &str) -> String {
    let mut result = String::with_capacity(source.len() * 2);
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            result.push(c);
            if c == '\\' {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            } else if c == q {
                result.push_str(RESET);
                quote = None;
            } else if c == '\n' {
                // Reprs never span lines; an unterminated quote ends here.
                result.insert_str(result.len() - 1, RESET);
                quote = None;
            }
            continue;
        }

        match c {
            // Strings
            '\'' | '"' => {
                result.push_str(YELLOW);
                result.push(c);
                quote = Some(c);
            }

            // Numbers
            c if c.is_ascii_digit() => {
                result.push_str(MAGENTA);
                result.push(c);
                push_number_tail(&mut chars, &mut result);
                result.push_str(RESET);
            }

            // Negative numbers
            '-' if chars.peek().is_some_and(char::is_ascii_digit) => {
                result.push_str(MAGENTA);
                result.push(c);
                push_number_tail(&mut chars, &mut result);
                result.push_str(RESET);
            }

            // Delimiters
            '(' | ')' | '[' | ']' | '{' | '}' => {
                result.push_str(BOLD);
                result.push(c);
                result.push_str(RESET);
            }

            // Names, constants, and byte-string prefixes
            c if c.is_alphabetic() || c == '_' => {
                let mut word = String::new();
                word.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '_' {
                        word.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }

                let is_prefix = word == "b" && chars.peek().is_some_and(|n| *n == '\'' || *n == '"');
                if is_prefix {
                    result.push_str(YELLOW);
                    result.push_str(&word);
                    if let Some(q) = chars.next() {
                        result.push(q);
                        quote = Some(q);
                    }
                    continue;
                }

                match word.as_str() {
                    "True" | "False" | "None" => {
                        result.push_str(CYAN);
                        result.push_str(&word);
                        result.push_str(RESET);
                    }
                    _ => result.push_str(&word),
                }
            }

            _ => result.push(c),
        }
    }

    if quote.is_some() {
        result.push_str(RESET);
    }
    result
}

fn push_number_tail(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, result: &mut String) {
    while let Some(&next) = chars.peek() {
        if next.is_ascii_alphanumeric() || next == '.' || next == '_' {
            result.push(next);
            chars.next();
        } else if (next == '-' || next == '+') && result.ends_with('e') {
            result.push(next);
            chars.next();
        } else {
            break;
        }
    }
}
