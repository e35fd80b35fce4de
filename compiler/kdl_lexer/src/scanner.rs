//! Context-sensitive KDL scanner.
//!
//! The scanner is a pull-based finite-state machine over a [`SourceBuffer`].
//! Each call to [`Scanner::next_token()`] starts in [`LexContext::Initial`],
//! dispatches on the current character into a context (identifier, string,
//! number, comment, whitespace run, ...), and runs that context until it
//! emits a token.
//!
//! # Design
//!
//! Each context has a focused `scan_*` method that consumes as much input
//! as it can and returns a [`Step`]: `Ok(Some(token))` to emit,
//! `Ok(None)` to keep looping (the context may have changed), or an error.
//!
//! Block comments are transparent: entering one records the active context,
//! and closing the outermost `*/` resumes it. That is how a comment can sit
//! in the middle of a whitespace run without splitting it.
//!
//! # Line continuations
//!
//! A `\` is only valid when followed by a newline, optionally after
//! whitespace (and comments). Deciding that needs real scanning, so the
//! scanner builds a second, independent `Scanner` just past the backslash,
//! pulls at most two tokens from it, and on success fast-forwards to the
//! lookahead's position. Nothing is emitted for the continuation.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::char_class::{
    is_identifier_char, is_initial_identifier_char, is_newline, is_whitespace, symbol_kind,
};
use crate::cursor::Cursor;
use crate::escape::unescape;
use crate::number::{self, Number, NumberBase};
use crate::stack::ensure_sufficient_stack;
use crate::{LexError, SourceBuffer, Span, Token, TokenKind, TokenValue};

/// Lexical context: what the scanner is in the middle of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexContext {
    /// Between tokens.
    #[default]
    Initial,
    Identifier,
    /// Inside `"..."`.
    QuotedString,
    /// Inside `r#"..."#`.
    RawString,
    Number(NumberBase),
    /// Inside `// ...`.
    LineComment,
    /// Inside `/* ... */`, possibly nested.
    BlockComment,
    /// Inside a run of whitespace.
    Whitespace,
}

/// Outcome of one state-machine step.
type Step = Result<Option<Token>, LexError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Scanning,
    /// EOF has been emitted.
    Exhausted,
    /// An error has been returned; the scanner must not be resumed.
    Faulted,
}

/// Pull-based KDL scanner.
///
/// Call [`next_token()`](Self::next_token) until it returns `Ok(None)`, or
/// use the scanner as an iterator. The read position only moves forward.
///
/// A `Scanner` mutates its state on every call and is meant to be owned by
/// one parser at a time.
pub struct Scanner<'a> {
    source: &'a SourceBuffer,
    cursor: Cursor<'a>,
    context: LexContext,
    /// Context to resume when the current block comment closes.
    previous_context: LexContext,
    /// Text of the token in progress.
    buffer: String,
    /// Number of `#` around the current raw string.
    raw_fence: usize,
    /// Nesting depth of the current block comment.
    comment_depth: usize,
    /// Offset where the token in progress began.
    token_start: usize,
    phase: Phase,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source`.
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self::at_offset(source, 0)
    }

    /// Create a scanner that starts reading at char offset `offset`.
    pub fn at_offset(source: &'a SourceBuffer, offset: usize) -> Self {
        let cursor = source.cursor_at(offset);
        Self {
            source,
            token_start: cursor.pos(),
            cursor,
            context: LexContext::Initial,
            previous_context: LexContext::Initial,
            buffer: String::new(),
            raw_fence: 0,
            comment_depth: 0,
            phase: Phase::Scanning,
        }
    }

    /// Current read position (char offset). Never decreases.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// The context the scanner is currently in.
    #[inline]
    pub fn context(&self) -> LexContext {
        self.context
    }

    /// Returns `true` once EOF has been emitted or an error returned.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase != Phase::Scanning
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(Some(_))` for every token up to and including a single
    /// [`TokenKind::Eof`], then `Ok(None)` on every later call. After an
    /// `Err`, every later call also returns `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.phase != Phase::Scanning {
            return Ok(None);
        }

        self.context = LexContext::Initial;
        self.previous_context = LexContext::Initial;

        loop {
            if self.context == LexContext::Initial {
                self.token_start = self.cursor.pos();
            }

            let step = match self.context {
                LexContext::Initial => self.scan_initial(),
                LexContext::Identifier => Ok(Some(self.scan_identifier())),
                LexContext::QuotedString => self.scan_quoted_string(),
                LexContext::RawString => self.scan_raw_string(),
                LexContext::Number(base) => self.scan_number(base).map(Some),
                LexContext::LineComment => Ok(Some(self.scan_line_comment())),
                LexContext::BlockComment => self.scan_block_comment().map(|()| None),
                LexContext::Whitespace => self.scan_whitespace(),
            };

            match step {
                Ok(Some(token)) => {
                    trace!(kind = %token.kind, span = %token.span, "token");
                    return Ok(Some(token));
                }
                Ok(None) => {}
                Err(err) => {
                    debug!(%err, context = ?self.context, "scan failed");
                    self.phase = Phase::Faulted;
                    return Err(err);
                }
            }
        }
    }

    // ─── Context Bookkeeping ────────────────────────────────────────

    fn enter(&mut self, context: LexContext) {
        trace!(from = ?self.context, to = ?context, pos = self.cursor.pos(), "enter");
        self.previous_context = self.context;
        self.context = context;
    }

    /// Enter `context` with a fresh buffer, optionally seeded with `first`.
    fn begin(&mut self, context: LexContext, first: Option<char>) {
        self.buffer.clear();
        self.buffer.extend(first);
        self.enter(context);
    }

    fn resume_previous_context(&mut self) {
        trace!(to = ?self.previous_context, pos = self.cursor.pos(), "resume");
        self.context = self.previous_context;
        self.previous_context = LexContext::Initial;
    }

    #[inline]
    fn span(&self) -> Span {
        Span::new(self.token_start, self.cursor.pos())
    }

    fn token(&self, kind: TokenKind, value: TokenValue) -> Token {
        Token::new(kind, value, self.span())
    }

    fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn eof(&mut self) -> Token {
        self.phase = Phase::Exhausted;
        Token::bare(TokenKind::Eof, Span::point(self.cursor.pos()))
    }

    /// Consume a line terminator at the cursor (`\r\n` counts as one) and
    /// emit it as NEWLINE. The token's value is the terminator text only.
    fn newline(&mut self) -> Token {
        let terminator_start = self.cursor.pos();
        let len = match (self.cursor.current(), self.cursor.peek()) {
            (Some('\r'), Some('\n')) => 2,
            _ => 1,
        };
        self.cursor.advance_n(len);
        let text = self.source.slice(terminator_start, self.cursor.pos());
        self.token(TokenKind::Newline, TokenValue::Str(text))
    }

    // ─── Initial ────────────────────────────────────────────────────

    fn scan_initial(&mut self) -> Step {
        let Some(c) = self.cursor.current() else {
            return Ok(Some(self.eof()));
        };

        match c {
            '"' => {
                self.cursor.advance();
                self.begin(LexContext::QuotedString, None);
            }
            'r' => {
                if !self.raw_string_opener() {
                    self.cursor.advance();
                    self.begin(LexContext::Identifier, Some(c));
                }
            }
            '0'..='9' | '+' | '-' => {
                let prefixed = match self.cursor.peek() {
                    Some(p) if c == '0' => NumberBase::from_prefix(p),
                    _ => None,
                };
                if let Some(base) = prefixed {
                    self.cursor.advance_n(2);
                    self.begin(LexContext::Number(base), None);
                } else {
                    self.cursor.advance();
                    self.begin(LexContext::Number(NumberBase::Decimal), Some(c));
                }
            }
            '\\' => self.line_continuation()?,
            '\r' => return Ok(Some(self.newline())),
            '/' => return Ok(self.slash()),
            _ => {
                if let Some(kind) = symbol_kind(c) {
                    self.cursor.advance();
                    return Ok(Some(self.token(kind, TokenValue::None)));
                }
                if is_newline(c) {
                    return Ok(Some(self.newline()));
                }
                if is_whitespace(c) {
                    self.cursor.advance();
                    self.begin(LexContext::Whitespace, Some(c));
                } else if is_initial_identifier_char(c) {
                    self.cursor.advance();
                    self.begin(LexContext::Identifier, Some(c));
                } else {
                    return Err(LexError::unexpected_character(self.cursor.pos(), c));
                }
            }
        }

        Ok(None)
    }

    /// Try to open a raw string at an `r`: `r"`, `r#"`, `r##"`, ...
    ///
    /// On success the fence length is fixed and the cursor sits just past
    /// the opening quote. On failure nothing is consumed.
    fn raw_string_opener(&mut self) -> bool {
        let hashes = self.cursor.count_run(1, '#');
        if self.cursor.peek_nth(1 + hashes) != Some('"') {
            return false;
        }
        self.cursor.advance_n(2 + hashes);
        self.raw_fence = hashes;
        self.begin(LexContext::RawString, None);
        true
    }

    /// `//`, `/*`, `/-`, or an identifier starting with `/`.
    fn slash(&mut self) -> Option<Token> {
        match self.cursor.peek() {
            Some('/') => {
                self.cursor.advance_n(2);
                self.enter(LexContext::LineComment);
                None
            }
            Some('*') => {
                self.cursor.advance_n(2);
                self.comment_depth = 1;
                self.enter(LexContext::BlockComment);
                None
            }
            Some('-') => {
                self.cursor.advance_n(2);
                Some(self.token(TokenKind::Slashdash, TokenValue::None))
            }
            _ => {
                self.cursor.advance();
                self.begin(LexContext::Identifier, Some('/'));
                None
            }
        }
    }

    // ─── Line Continuation ──────────────────────────────────────────

    /// Resolve a `\` at the cursor as a line continuation, or fail.
    fn line_continuation(&mut self) -> Result<(), LexError> {
        let backslash = self.cursor.pos();
        let source = self.source;
        let resume = ensure_sufficient_stack(move || continuation_end(source, backslash + 1));

        if let Some(pos) = resume {
            debug!(backslash, resume = pos, "line continuation");
            self.cursor.fast_forward(pos);
            Ok(())
        } else {
            debug!(backslash, "backslash not followed by a newline");
            Err(LexError::unexpected_backslash(backslash).with_context(self.context))
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────

    fn scan_identifier(&mut self) -> Token {
        let rest = self.cursor.eat_while(is_identifier_char);
        self.buffer.extend(rest);

        let keyword = match self.buffer.as_str() {
            "true" => Some((TokenKind::True, TokenValue::Bool(true))),
            "false" => Some((TokenKind::False, TokenValue::Bool(false))),
            "null" => Some((TokenKind::Null, TokenValue::Null)),
            _ => None,
        };

        if let Some((kind, value)) = keyword {
            self.token(kind, value)
        } else {
            let text = self.take_buffer();
            self.token(TokenKind::Ident, TokenValue::Str(text))
        }
    }

    // ─── Strings ────────────────────────────────────────────────────

    fn scan_quoted_string(&mut self) -> Step {
        let content = self.cursor.eat_while(|c| c != '\\' && c != '"');
        self.buffer.extend(content);

        match self.cursor.current() {
            Some('\\') => {
                // Keep the escape verbatim; decoding happens on close.
                let Some(escaped) = self.cursor.peek() else {
                    return Err(LexError::unterminated_string(self.source.len()));
                };
                self.buffer.push('\\');
                self.buffer.push(escaped);
                self.cursor.advance_n(2);
                Ok(None)
            }
            Some(_) => {
                self.cursor.advance(); // closing '"'
                let value = unescape(&self.buffer, self.token_start + 1)?;
                Ok(Some(self.token(TokenKind::String, TokenValue::Str(value))))
            }
            None => Err(LexError::unterminated_string(self.cursor.pos())),
        }
    }

    fn scan_raw_string(&mut self) -> Step {
        let content = self.cursor.eat_while(|c| c != '"');
        self.buffer.extend(content);

        if self.cursor.is_eof() {
            return Err(LexError::unterminated_raw_string(self.cursor.pos()));
        }

        let hashes = self.cursor.count_run(1, '#').min(self.raw_fence);
        if hashes == self.raw_fence {
            self.cursor.advance_n(1 + hashes);
            let text = self.take_buffer();
            return Ok(Some(self.token(TokenKind::RawString, TokenValue::Str(text))));
        }

        // A quote with a short fence is content.
        self.buffer.push('"');
        self.cursor.advance();
        Ok(None)
    }

    // ─── Numbers ────────────────────────────────────────────────────

    fn scan_number(&mut self, base: NumberBase) -> Result<Token, LexError> {
        let digits = self.cursor.eat_while(|c| base.accepts(c));
        self.buffer.extend(digits);

        let number = number::decode(base, &self.buffer).map_err(|err| err.at(self.token_start))?;
        Ok(match number {
            Number::Integer(n) => self.token(TokenKind::Integer, TokenValue::Int(n)),
            Number::Float(x) => self.token(TokenKind::Float, TokenValue::Float(x)),
        })
    }

    // ─── Comments ───────────────────────────────────────────────────

    /// Skip comment text; the terminating newline is the token.
    fn scan_line_comment(&mut self) -> Token {
        self.cursor.eat_while(|c| c != '\r' && !is_newline(c));
        if self.cursor.is_eof() {
            self.eof()
        } else {
            self.newline()
        }
    }

    fn scan_block_comment(&mut self) -> Result<(), LexError> {
        self.cursor.eat_while(|c| c != '/' && c != '*');

        match (self.cursor.current(), self.cursor.peek()) {
            (None, _) => {
                return Err(LexError::unterminated_block_comment(self.cursor.pos()));
            }
            (Some('/'), Some('*')) => {
                self.cursor.advance_n(2);
                self.comment_depth += 1;
            }
            (Some('*'), Some('/')) => {
                self.cursor.advance_n(2);
                self.comment_depth -= 1;
                if self.comment_depth == 0 {
                    self.resume_previous_context();
                }
            }
            _ => self.cursor.advance(),
        }

        Ok(())
    }

    // ─── Whitespace ─────────────────────────────────────────────────

    fn scan_whitespace(&mut self) -> Step {
        let run = self.cursor.eat_while(is_whitespace);
        self.buffer.extend(run);

        match (self.cursor.current(), self.cursor.peek()) {
            (Some('\\'), _) => {
                self.line_continuation()?;
                Ok(None)
            }
            (Some('/'), Some('*')) => {
                self.cursor.advance_n(2);
                self.comment_depth = 1;
                self.enter(LexContext::BlockComment);
                Ok(None)
            }
            _ => {
                let text = self.take_buffer();
                Ok(Some(self.token(TokenKind::Ws, TokenValue::Str(text))))
            }
        }
    }
}

/// Scan ahead from just past a `\` and return where a valid continuation
/// ends: right after a newline, or after whitespace followed by a newline.
fn continuation_end(source: &SourceBuffer, start: usize) -> Option<usize> {
    let mut lookahead = Scanner::at_offset(source, start);
    let accepted = match lookahead.next_token() {
        Ok(Some(tok)) if tok.kind == TokenKind::Newline => true,
        Ok(Some(tok)) if tok.kind == TokenKind::Ws => matches!(
            lookahead.next_token(),
            Ok(Some(next)) if next.kind == TokenKind::Newline
        ),
        _ => false,
    };
    accepted.then(|| lookahead.position())
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl FusedIterator for Scanner<'_> {}
