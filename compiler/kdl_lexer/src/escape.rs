//! Escape sequence decoding for quoted strings.
//!
//! The scanner copies `\` and the character after it verbatim while
//! scanning, and decodes the whole literal here once the closing `"` is
//! found. Recognized escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\b`, `\f`.
//! `\u` introduces a code-point escape, which is not supported yet and is
//! rejected. Any other `\x` decodes to `x`.

use crate::LexError;

/// Resolve a single escape character to its replacement.
///
/// Returns `None` for characters with no special meaning.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        _ => None,
    }
}

/// Decode the raw content of a quoted string.
///
/// `content_start` is the char offset of the first content character (just
/// past the opening `"`), used to locate errors.
pub fn unescape(content: &str, content_start: usize) -> Result<String, LexError> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().enumerate();

    while let Some((_, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((i, 'u')) => {
                // Offset of the backslash, one before the escape letter.
                return Err(LexError::unsupported_escape(content_start + i - 1, 'u'));
            }
            Some((_, esc)) => result.push(resolve_escape(esc).unwrap_or(esc)),
            None => result.push('\\'),
        }
    }

    Ok(result)
}
