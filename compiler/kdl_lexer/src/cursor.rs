//! Forward-only cursor over a decoded char buffer.
//!
//! The cursor never rewinds. [`fast_forward()`](Cursor::fast_forward) is the
//! only way to jump, and it only jumps forward: the scanner uses it to splice
//! in the position reached by a lookahead sub-scan.

/// Forward-only cursor over a `&[char]`.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor) or
/// [`SourceBuffer::cursor_at()`](crate::SourceBuffer::cursor_at).
/// The cursor is [`Copy`], so a scanner can hand out cheap snapshots.
///
/// # Invariant
///
/// `pos <= chars.len()`. Reads at `chars.len()` return `None` (EOF).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(chars: &'a [char], pos: usize) -> Self {
        debug_assert!(
            pos <= chars.len(),
            "cursor position {pos} out of bounds (max {})",
            chars.len()
        );
        Self { chars, pos }
    }

    /// The char at the current position, `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The char one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// The char `n` positions ahead of current (`peek_nth(0) == current()`).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// Advance by one char. A no-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` chars, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    /// Jump forward to `pos`.
    ///
    /// # Contract
    ///
    /// `pos` must not be behind the current position: the cursor is
    /// monotonically non-decreasing for its whole lifetime.
    #[inline]
    pub fn fast_forward(&mut self, pos: usize) {
        debug_assert!(
            pos >= self.pos,
            "cursor cannot rewind from {} to {pos}",
            self.pos
        );
        self.pos = pos.clamp(self.pos, self.chars.len());
    }

    /// Returns `true` once every char has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Current char offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Advance while `pred` holds for the current char, returning the chars
    /// consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a [char] {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += 1;
        }
        &self.chars[start..self.pos]
    }

    /// Count consecutive occurrences of `c` starting `offset` chars ahead,
    /// without moving the cursor.
    ///
    /// Used to measure raw-string fences (`r##"` / `"##`).
    pub fn count_run(&self, offset: usize, c: char) -> usize {
        self.chars
            .get(self.pos + offset..)
            .map_or(0, |rest| rest.iter().take_while(|&&x| x == c).count())
    }
}
