//! Token types produced by the scanner.
//!
//! [`TokenKind`] is the contract with the grammar parser: the set of kinds is
//! fixed and its names (`LPAREN`, `SLASHDASH`, ...) are shared with other KDL
//! implementations.

use std::fmt;

/// The kind of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Punctuation ===
    /// `{`
    LParen,
    /// `}`
    RParen,
    /// `=` or fullwidth `＝`
    Equals,
    /// `;`
    Semicolon,
    /// `/-`, discards the next element.
    Slashdash,

    // === Trivia ===
    /// A line terminator (or a line comment ending in one).
    Newline,
    /// A run of whitespace, possibly interrupted by block comments and line
    /// continuations.
    Ws,

    // === Literals ===
    Ident,
    String,
    RawString,
    Integer,
    Float,
    True,
    False,
    Null,

    /// End of the document. Produced exactly once.
    Eof,
}

impl TokenKind {
    /// The canonical upper-case name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Equals => "EQUALS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slashdash => "SLASHDASH",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Ws => "WS",
            TokenKind::Ident => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::RawString => "RAWSTRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whitespace and newlines: tokens a parser uses only as separators.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Ws | TokenKind::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal payload of a token.
///
/// Mapping these into document-model values is the parser's job.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// Punctuation, `/-`, EOF.
    None,
    /// Identifier text, decoded string, verbatim raw string, whitespace run,
    /// or newline text.
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl TokenValue {
    /// The string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Str(s) => write!(f, "{s:?}"),
            TokenValue::Int(n) => write!(f, "{n}"),
            TokenValue::Float(x) => write!(f, "{x:?}"),
            TokenValue::Bool(b) => write!(f, "{b}"),
            TokenValue::Null => f.write_str("null"),
        }
    }
}

/// Half-open range of char offsets `start..end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at `pos`.
    pub const fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A scanned token: kind, literal value, and location.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// A token with no literal payload.
    pub fn bare(kind: TokenKind, span: Span) -> Self {
        Self::new(kind, TokenValue::None, span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{} @ {}", self.kind, self.span),
            ref value => write!(f, "{} {value} @ {}", self.kind, self.span),
        }
    }
}
