//! Lexical analysis for KDL documents.
//!
//! Converts document text into the token stream consumed by a KDL grammar
//! parser. The crate is standalone: formatters, highlighters and parsers can
//! depend on it without anything else from this workspace.
//!
//! # Usage
//!
//! ```
//! use kdl_lexer::{tokenize, TokenKind, TokenValue};
//!
//! let tokens = tokenize("node 0x1A")?;
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Ident, TokenKind::Ws, TokenKind::Integer, TokenKind::Eof]
//! );
//! assert_eq!(tokens[2].value, TokenValue::Int(26));
//! # Ok::<(), kdl_lexer::LexError>(())
//! ```
//!
//! For incremental consumption, drive a [`Scanner`] directly:
//!
//! ```
//! use kdl_lexer::{Scanner, SourceBuffer, TokenKind};
//!
//! let source = SourceBuffer::new("a; b");
//! let mut scanner = Scanner::new(&source);
//! while let Some(token) = scanner.next_token()? {
//!     if token.kind == TokenKind::Eof {
//!         assert_eq!(scanner.position(), source.len());
//!     }
//! }
//! # Ok::<(), kdl_lexer::LexError>(())
//! ```
//!
//! # Debugging
//!
//! The scanner emits `tracing` events. With a subscriber installed:
//! - `RUST_LOG=kdl_lexer=debug`: line continuations and failures.
//! - `RUST_LOG=kdl_lexer=trace`: every token and context change.

pub mod char_class;
mod cursor;
mod escape;
mod lex_error;
pub mod number;
mod scanner;
mod source_buffer;
mod stack;
mod token;

pub use cursor::Cursor;
pub use escape::unescape;
pub use lex_error::{LexError, LexErrorKind};
pub use number::{Number, NumberBase};
pub use scanner::{LexContext, Scanner};
pub use source_buffer::SourceBuffer;
pub use token::{Span, Token, TokenKind, TokenValue};

/// Tokenize a whole document.
///
/// The returned tokens end with exactly one [`TokenKind::Eof`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(source);
    Scanner::new(&buffer).collect()
}
