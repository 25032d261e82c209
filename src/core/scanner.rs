//! SIMD-accelerated delimiter scanning using memchr
//!
//! Uses the memchr crate for fast byte searching with SIMD acceleration:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)
//!
//! The scanner searches raw UTF-8 bytes but reports character offsets,
//! since published tag positions are indices into the decoded text. Both
//! tag delimiters (`<`, `>`) are single ASCII bytes, so every offset the
//! scanner is advanced to lands on a char boundary.

use memchr::memchr;

/// Cursor over document text tracking byte and character offsets together
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    chars: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Scanner {
            input,
            pos: 0,
            chars: 0,
        }
    }

    /// Current byte offset
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Character offset corresponding to the current byte offset
    #[inline]
    pub fn char_position(&self) -> usize {
        self.chars
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte at an absolute offset
    #[inline]
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.input.as_bytes().get(pos).copied()
    }

    /// Find next '<' at or after the current position, using SIMD
    #[inline]
    pub fn find_tag_start(&self) -> Option<usize> {
        memchr(b'<', &self.input.as_bytes()[self.pos..]).map(|i| self.pos + i)
    }

    /// Find next '>' at or after `from`, using SIMD
    #[inline]
    pub fn find_tag_end_from(&self, from: usize) -> Option<usize> {
        if from > self.input.len() {
            return None;
        }
        memchr(b'>', &self.input.as_bytes()[from..]).map(|i| from + i)
    }

    /// Advance to an absolute byte offset, keeping the character count in
    /// step. `target` must be a char boundary at or after the current
    /// position; callers only pass offsets of ASCII delimiters or one byte
    /// past them.
    #[inline]
    pub fn advance_to(&mut self, target: usize) {
        debug_assert!(target >= self.pos);
        self.chars += self.input[self.pos..target].chars().count();
        self.pos = target;
    }

    /// Slice between two byte offsets (both on char boundaries)
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }
}
