//! Character classification tables.
//!
//! These lists are part of the KDL wire format: every implementation must
//! agree on exactly which code points are whitespace, newlines, punctuation,
//! and identifier characters. Change them only together with the format.

use crate::TokenKind;

/// Single-character punctuation and the token each one produces.
pub const SYMBOLS: [(char, TokenKind); 5] = [
    ('{', TokenKind::LParen),
    ('}', TokenKind::RParen),
    ('=', TokenKind::Equals),
    ('\u{FF1D}', TokenKind::Equals), // FULLWIDTH EQUALS SIGN
    (';', TokenKind::Semicolon),
];

/// Unicode whitespace (not including newlines).
pub const WHITESPACE: [char; 18] = [
    '\u{0009}', '\u{0020}', '\u{00A0}', '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}',
    '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}',
    '\u{200A}', '\u{202F}', '\u{205F}', '\u{3000}',
];

/// Line terminators other than carriage return.
///
/// `\r` is classified separately because `\r\n` forms a single newline.
pub const NEWLINES: [char; 5] = ['\u{000A}', '\u{0085}', '\u{000C}', '\u{2028}', '\u{2029}'];

/// Characters that can never appear in an identifier, besides the symbol
/// characters and U+0000..=U+0020.
pub const NON_IDENTIFIER_CHARS: [char; 7] = ['\\', '<', '>', '[', ']', '"', ','];

/// The token kind for a punctuation character.
#[inline]
pub fn symbol_kind(c: char) -> Option<TokenKind> {
    SYMBOLS
        .iter()
        .find_map(|&(sym, kind)| (sym == c).then_some(kind))
}

#[inline]
pub fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Newline-set membership. Does not include `\r`.
#[inline]
pub fn is_newline(c: char) -> bool {
    NEWLINES.contains(&c)
}

/// Returns `true` if `c` may continue an identifier.
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c > '\u{0020}' && symbol_kind(c).is_none() && !NON_IDENTIFIER_CHARS.contains(&c)
}

/// Returns `true` if `c` may start an identifier: any continuation
/// character except an ASCII digit.
#[inline]
pub fn is_initial_identifier_char(c: char) -> bool {
    is_identifier_char(c) && !c.is_ascii_digit()
}
