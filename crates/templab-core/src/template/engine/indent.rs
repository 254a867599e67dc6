//! Indentation normalization for multi-line text
//!
//! Block text is usually written indented to match the surrounding source,
//! e.g. a template literal nested three levels deep. Normalization strips
//! that common indentation (the baseline) and re-indents with the ambient
//! indentation of the point where the text is inserted.
//!
//! ## Rules
//!
//! - Single-line text is returned unchanged.
//! - A blank first line is an artifact of how the literal was opened and is
//!   dropped. The baseline is then the width of the first non-blank line.
//! - Otherwise the first line is kept verbatim (it continues whatever
//!   precedes the insertion point) and the baseline is the minimum width of
//!   the remaining non-blank lines.
//! - Widths count spaces as 1 and tabs up to the next tab stop.
//! - Every line after the first kept line gets the ambient indentation
//!   prepended unless it is blank.

use tracing::trace;

/// Split on `\r\n`, `\r` or `\n`, keeping empty segments
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\r' => {
                lines.push(&text[start..i]);
                if let Some((_, '\n')) = chars.peek() {
                    chars.next();
                    start = i + 2;
                } else {
                    start = i + 1;
                }
            }
            '\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    lines.push(&text[start..]);

    lines
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Width contributed by `c` when it starts at `column`
fn char_width(c: char, column: usize, tab_width: usize) -> usize {
    if c == '\t' {
        tab_width - (column % tab_width)
    } else {
        1
    }
}

/// Width of the leading whitespace of `line`
pub(crate) fn indentation_width(line: &str, tab_width: usize) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .fold(0, |width, c| width + char_width(c, width, tab_width))
}

/// Strip leading whitespace until `width` columns have been removed
///
/// Stops early at the first non-whitespace character. A tab that crosses
/// the target is removed whole.
pub(crate) fn remove_indentation(line: &str, width: usize, tab_width: usize) -> &str {
    let mut removed = 0;
    for (i, c) in line.char_indices() {
        if removed >= width || !c.is_whitespace() {
            return &line[i..];
        }
        removed += char_width(c, removed, tab_width);
    }
    ""
}

fn baseline_width(lines: &[&str], tab_width: usize, removed_first_line: bool) -> usize {
    let mut rest = lines.iter().skip(1).filter(|line| !is_blank(line));

    if removed_first_line {
        rest.next()
            .map_or(0, |line| indentation_width(line, tab_width))
    } else {
        rest.map(|line| indentation_width(line, tab_width))
            .min()
            .unwrap_or(0)
    }
}

/// Re-baseline `text` and indent continuation lines with `ambient`
///
/// Lines are rejoined with `newline`, whatever breaks the input used.
///
/// # Example
///
/// ```text
/// "\n    if x:\n        y"   ambient "  "   →   "if x:\n      y"
/// ```
pub(crate) fn normalize(text: &str, tab_width: usize, ambient: &str, newline: &str) -> String {
    let lines = split_lines(text);
    if lines.len() == 1 {
        return text.to_string();
    }

    let removed_first_line = is_blank(lines[0]);
    let first_index = usize::from(removed_first_line);
    let baseline = baseline_width(&lines, tab_width, removed_first_line);
    trace!(
        lines = lines.len(),
        baseline,
        removed_first_line,
        "normalizing indentation"
    );

    let mut output = Vec::with_capacity(lines.len() - first_index);
    for (i, line) in lines.iter().copied().enumerate().skip(first_index) {
        let line = if removed_first_line || i > first_index {
            remove_indentation(line, baseline, tab_width)
        } else {
            line
        };

        if i > first_index && !is_blank(line) {
            output.push(format!("{}{}", ambient, line));
        } else {
            output.push(line.to_string());
        }
    }

    output.join(newline)
}
