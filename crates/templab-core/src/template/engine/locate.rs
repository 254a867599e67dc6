//! Locating a token in rendered text and describing the line it sits on

use std::ops::Range;

/// Where a token was found and what its line looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Location {
    /// Byte span of the token itself
    pub found: Range<usize>,
    /// Byte span that removes the token's whole line plus one adjacent
    /// line break (none when the line is the entire text)
    pub line_replace: Range<usize>,
    /// Everything between the line start and the token, with non-whitespace
    /// characters turned into spaces so continuation lines align with the
    /// token's column
    pub indentation: String,
    /// Only whitespace shares the line with the token
    pub occupies_entire_line: bool,
    /// The token's line starts at offset 0
    pub is_first_line: bool,
}

pub(crate) fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Find the first occurrence of `token` in `text` and analyze its line
///
/// Tokens are unique, so the first occurrence is the only one.
///
/// # Line breaks
///
/// `\r\n`, `\r` and `\n` all end a line. The deletion span takes the
/// break after the line when there is one, otherwise the break before it,
/// so removing a whole line never leaves an empty line behind.
///
/// # Performance
///
/// One substring search plus a scan of the token's own line. The engine
/// calls this once per placeholder against the current text, because
/// earlier splices move later tokens.
pub(crate) fn locate(text: &str, token: &str) -> Option<Location> {
    let found_start = text.find(token)?;
    let found_end = found_start + token.len();

    let mut line_start = found_start;
    let mut indentation_rev = Vec::new();
    let mut content_before = false;
    for (i, c) in text[..found_start].char_indices().rev() {
        if is_line_break(c) {
            break;
        }
        if c.is_whitespace() {
            indentation_rev.push(c);
        } else {
            content_before = true;
            indentation_rev.push(' ');
        }
        line_start = i;
    }

    let mut line_end = found_end;
    let mut content_after = false;
    for (i, c) in text[found_end..].char_indices() {
        if is_line_break(c) {
            break;
        }
        if !c.is_whitespace() {
            content_after = true;
        }
        line_end = found_end + i + c.len_utf8();
    }

    let is_first_line = line_start == 0;
    let is_last_line = line_end == text.len();

    // Swallow one line break so deleting the line leaves no blank line:
    // the following one when there is one, otherwise the preceding one.
    let mut line_replace = line_start..line_end;
    if !is_last_line {
        line_replace.end += if text[line_end..].starts_with("\r\n") { 2 } else { 1 };
    } else if !is_first_line {
        line_replace.start -= if text[..line_start].ends_with("\r\n") { 2 } else { 1 };
    }

    Some(Location {
        found: found_start..found_end,
        line_replace,
        indentation: indentation_rev.into_iter().rev().collect(),
        occupies_entire_line: !content_before && !content_after,
        is_first_line,
    })
}
