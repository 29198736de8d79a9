//! Conversion token scratch buffer.
//!
//! Every numeric directive renders into a [`Token`] on the stack before it
//! is padded and streamed. The capacity is the worst case over all
//! conversions, derived from the converters' own limits.

use crate::math::float::{F32_MAX_INTEGER_DIGITS, MAX_FRACTION_DIGITS, MAX_SIGNIFICANT_FIGURES};
use crate::stdlib::conversion::MAX_RADIX_DIGITS;

/// Longest integer token: sign plus the octal digits of `u64::MAX`.
pub const MAX_INT_TOKEN_LEN: usize = 1 + MAX_RADIX_DIGITS;

/// Longest float token: sign plus the widest of
/// - every integer digit of `f32::MAX`, plus one for a rounding carry,
/// - `sig` digits, a carry digit and the point, before trailing zeros go,
/// - `0.` followed by the full fraction.
pub const MAX_FLOAT_TOKEN_LEN: usize = 1 + max(
    F32_MAX_INTEGER_DIGITS + 1,
    max(
        MAX_SIGNIFICANT_FIGURES as usize + 2,
        2 + MAX_FRACTION_DIGITS,
    ),
);

/// Scratch capacity shared by every conversion.
pub const TOKEN_CAPACITY: usize = max(MAX_INT_TOKEN_LEN, MAX_FLOAT_TOKEN_LEN);

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

/// Fixed-capacity byte buffer holding one unpadded conversion.
///
/// Pushing past [`TOKEN_CAPACITY`] panics; the converters never do so.
#[derive(Clone, Copy)]
pub struct Token {
    buf: [u8; TOKEN_CAPACITY],
    len: usize,
}

impl Token {
    /// Empty token.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; TOKEN_CAPACITY],
            len: 0,
        }
    }

    /// Append one byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// Append a run of bytes.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
    }

    /// Append `count` copies of `byte`.
    pub fn fill(&mut self, byte: u8, count: usize) {
        self.buf[self.len..self.len + count].fill(byte);
        self.len += count;
    }

    /// Remove and return the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buf[self.len])
    }

    /// Last byte, if any.
    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Token")
            .field(&core::str::from_utf8(self.as_bytes()).unwrap_or("<bin>"))
            .finish()
    }
}

impl PartialEq<[u8]> for Token {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Token {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
