//! Immutable, char-addressed source buffer.
//!
//! KDL offsets are counted in Unicode scalar values, not bytes: the scanner
//! peeks up to a handful of characters ahead (`r##"`, `\r\n`, `/*`) and the
//! lookahead sub-scan restarts at an arbitrary offset. Decoding the UTF-8
//! text once into a `Vec<char>` makes every one of those reads an O(1)
//! index instead of a re-walk of the byte string.
//!
//! # Layout
//!
//! ```text
//! [c0, c1, c2, ..., cN-1]
//!  ^                    ^
//!  0                    len (one past the end: EOF)
//! ```
//!
//! Reads at or past `len` return `None`, which the scanner treats as EOF.

use crate::Cursor;

/// Immutable source buffer addressed by char offset.
///
/// Built once per document and shared by reference between the outer
/// scanner and any lookahead scanners it constructs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    chars: Vec<char>,
}

impl SourceBuffer {
    /// Decode `source` into a char-addressed buffer.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
        }
    }

    /// Number of chars in the document.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` for an empty document.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The char at `pos`, or `None` past the end.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// Collect the chars in `start..end` into a `String`.
    ///
    /// Out-of-range bounds are clamped to the buffer, so a span that ends at
    /// EOF can be passed directly.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Create a cursor at the start of the buffer.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.chars, 0)
    }

    /// Create a cursor at `pos`.
    ///
    /// `pos` may equal `len()` (a cursor sitting at EOF); larger offsets are
    /// clamped to `len()`.
    #[inline]
    pub fn cursor_at(&self, pos: usize) -> Cursor<'_> {
        Cursor::new(&self.chars, pos.min(self.chars.len()))
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests;
