//! Lexer error type.
//!
//! Every failure carries:
//! - WHERE: `pos`, the char offset at which scanning stopped
//! - WHAT: `kind`, what went wrong
//! - WHY: `context`, the lexical context the scanner was in
//!
//! A scanner that has returned a `LexError` is faulted and yields only the
//! end-marker afterwards. Callers surface the message as a syntax error at
//! `pos`.

use thiserror::Error;

use crate::number::NumberBase;
use crate::scanner::LexContext;

/// A lexical error with its location and scanning context.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind} at offset {pos}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE scanning stopped (char offset).
    pub pos: usize,
    /// WHY: the context being scanned when the error occurred.
    pub context: LexContext,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    // === String Errors ===
    /// End of input before the closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// End of input before the closing `"` and fence.
    #[error("unterminated rawstring literal")]
    UnterminatedRawString,
    /// A code-point escape such as `\u{1F600}`. Not supported yet.
    #[error("unsupported escape '\\{escape}'")]
    UnsupportedEscape { escape: char },

    // === Comment Errors ===
    /// End of input inside `/* ... */`.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    // === Character Errors ===
    /// A character that cannot start any token.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
    /// `\` not followed by (optional whitespace and) a newline.
    #[error("unexpected '\\'")]
    UnexpectedBackslash,

    // === Numeric Errors ===
    /// The accumulated text is not a valid number in its base.
    #[error("invalid {base} literal {text:?}")]
    InvalidNumber { text: String, base: NumberBase },
    /// The literal does not fit in a 64-bit signed integer.
    #[error("{base} literal {text:?} does not fit in 64 bits")]
    NumberOverflow { text: String, base: NumberBase },
}

impl LexError {
    fn new(kind: LexErrorKind, pos: usize, context: LexContext) -> Self {
        Self { kind, pos, context }
    }

    #[cold]
    pub fn unterminated_string(pos: usize) -> Self {
        Self::new(
            LexErrorKind::UnterminatedString,
            pos,
            LexContext::QuotedString,
        )
    }

    #[cold]
    pub fn unterminated_raw_string(pos: usize) -> Self {
        Self::new(
            LexErrorKind::UnterminatedRawString,
            pos,
            LexContext::RawString,
        )
    }

    #[cold]
    pub fn unsupported_escape(pos: usize, escape: char) -> Self {
        Self::new(
            LexErrorKind::UnsupportedEscape { escape },
            pos,
            LexContext::QuotedString,
        )
    }

    #[cold]
    pub fn unterminated_block_comment(pos: usize) -> Self {
        Self::new(
            LexErrorKind::UnterminatedBlockComment,
            pos,
            LexContext::BlockComment,
        )
    }

    #[cold]
    pub fn unexpected_character(pos: usize, found: char) -> Self {
        Self::new(
            LexErrorKind::UnexpectedCharacter { found },
            pos,
            LexContext::Initial,
        )
    }

    #[cold]
    pub fn unexpected_backslash(pos: usize) -> Self {
        Self::new(LexErrorKind::UnexpectedBackslash, pos, LexContext::Initial)
    }

    #[cold]
    pub fn invalid_number(pos: usize, text: impl Into<String>, base: NumberBase) -> Self {
        Self::new(
            LexErrorKind::InvalidNumber {
                text: text.into(),
                base,
            },
            pos,
            LexContext::Number(base),
        )
    }

    #[cold]
    pub fn number_overflow(pos: usize, text: impl Into<String>, base: NumberBase) -> Self {
        Self::new(
            LexErrorKind::NumberOverflow {
                text: text.into(),
                base,
            },
            pos,
            LexContext::Number(base),
        )
    }

    /// Replace the recorded context.
    #[must_use]
    pub fn with_context(mut self, context: LexContext) -> Self {
        self.context = context;
        self
    }

    /// Replace the recorded offset (numeric decoders report 0).
    #[must_use]
    pub fn at(mut self, pos: usize) -> Self {
        self.pos = pos;
        self
    }

    /// The human-readable message, without the location suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
