//! Flattening of explanation markup into report lines.

/// Characters that, directly after a newline, start a markup line.
const MARKERS: [char; 4] = ['{', '}', '~', '>'];

/// Formats an explanation written in markup into report text.
///
/// Newlines that do not start a markup line are escaped to the two
/// characters `\n`, so a stray newline inside a repr cannot break the layout.
///
/// # Panics
///
/// Panics if the `{`/`}` markers are unbalanced.
#[must_use]
pub fn format_explanation(explanation: &str) -> String {
    let lines = split_explanation(explanation);
    format_lines(&lines).join("\n")
}

/// Splits an explanation into its markup lines.
///
/// The text is split only at newlines directly followed by one of `{`, `}`,
/// `~` or `>`; every other newline is kept in the current line as a literal
/// `\n`.
#[must_use]
pub fn split_explanation(explanation: &str) -> Vec<String> {
    let mut raw = explanation.split('\n');
    let mut lines = vec![raw.next().unwrap_or_default().to_string()];
    for piece in raw {
        if piece.starts_with(MARKERS) {
            lines.push(piece.to_string());
        } else if let Some(last) = lines.last_mut() {
            last.push_str("\\n");
            last.push_str(piece);
        }
    }
    lines
}

/// One open `{` clause.
struct Frame {
    /// Index of the result line text closing `}` markers append to.
    anchor: usize,
    /// Number of clauses already opened directly inside this one.
    children: usize,
}

/// Renders split markup lines.
///
/// The first line is taken verbatim. Every following line must start with
/// one of the markers.
///
/// # Panics
///
/// Panics if a `}` has no matching `{`, if a `{` is never closed, or if a
/// line after the first does not start with a marker.
#[must_use]
pub fn format_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut result: Vec<String> = lines.iter().take(1).map(|l| l.as_ref().to_string()).collect();
    let mut stack = vec![Frame {
        anchor: 0,
        children: 0,
    }];

    for line in lines.iter().skip(1) {
        let line = line.as_ref();
        let mut chars = line.chars();
        let marker = chars.next();
        let rest = chars.as_str();
        match marker {
            Some('{') => {
                let Some(parent) = stack.last_mut() else {
                    panic!("explanation markup: clause opened after the root was closed");
                };
                let joiner = if parent.children > 0 { "and   " } else { "where " };
                parent.children += 1;
                stack.push(Frame {
                    anchor: result.len(),
                    children: 0,
                });
                let depth = stack.len() - 1;
                result.push(format!(" +{}{joiner}{rest}", "  ".repeat(depth)));
            }
            Some('}') => {
                stack.pop();
                let Some(parent) = stack.last() else {
                    panic!("explanation markup: unmatched closing marker");
                };
                result[parent.anchor].push_str(rest);
            }
            Some(marker @ ('~' | '>')) => {
                let Some(frame) = stack.last_mut() else {
                    panic!("explanation markup: continuation after the root was closed");
                };
                frame.anchor += 1;
                let indent = if marker == '~' {
                    stack.len()
                } else {
                    stack.len() - 1
                };
                result.push(format!("{}{rest}", "  ".repeat(indent)));
            }
            _ => panic!("explanation markup: line without marker: {line:?}"),
        }
    }

    assert!(
        stack.len() == 1,
        "explanation markup: {} clause(s) left open",
        stack.len().saturating_sub(1)
    );
    result
}
