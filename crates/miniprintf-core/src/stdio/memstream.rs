//! Memory-backed stream.
//!
//! Redirects formatted output into a caller-owned byte slice. The write
//! cursor (`eos`, end of string) only advances while it is below the
//! capacity; later bytes are refused and the buffer is left untouched.
//!
//! Invariants:
//! - `eos <= capacity <= buffer.len()`
//! - bytes at `buffer[eos..]` are never written

use core::fmt;

use super::stream::{Stream, StreamError};

/// Bounded stream over a borrowed buffer.
#[derive(Debug)]
pub struct MemoryStream<'a> {
    buffer: &'a mut [u8],
    capacity: usize,
    eos: usize,
}

impl<'a> MemoryStream<'a> {
    /// Stream over the whole of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        let capacity = buffer.len();
        Self::with_eos(buffer, capacity, 0)
    }

    /// Stream limited to the first `capacity` bytes of `buffer`.
    ///
    /// `capacity` is clamped to the buffer length.
    pub fn with_capacity(buffer: &'a mut [u8], capacity: usize) -> Self {
        Self::with_eos(buffer, capacity, 0)
    }

    /// Stream whose cursor starts at `eos`, for buffers that already hold
    /// `eos` bytes of content.
    pub fn with_eos(buffer: &'a mut [u8], capacity: usize, eos: usize) -> Self {
        let capacity = capacity.min(buffer.len());
        Self {
            buffer,
            capacity,
            eos: eos.min(capacity),
        }
    }

    /// Current end-of-string offset.
    pub fn eos(&self) -> usize {
        self.eos
    }

    /// Maximum number of bytes the stream will store.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes that can still be stored.
    pub fn remaining(&self) -> usize {
        self.capacity - self.eos
    }

    /// True once the cursor has reached the capacity.
    pub fn is_full(&self) -> bool {
        self.eos == self.capacity
    }

    /// The stored prefix of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.eos]
    }

    /// Rewind the cursor. Buffer contents are left as they are.
    pub fn reset(&mut self) {
        self.eos = 0;
    }
}

impl Stream for MemoryStream<'_> {
    fn put(&mut self, byte: u8) -> Result<(), StreamError> {
        if self.eos >= self.capacity {
            return Err(StreamError::Full);
        }
        self.buffer[self.eos] = byte;
        self.eos += 1;
        Ok(())
    }
}

impl fmt::Write for MemoryStream<'_> {
    /// Truncates silently once the stream is full.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let n = s.len().min(self.remaining());
        self.buffer[self.eos..self.eos + n].copy_from_slice(&s.as_bytes()[..n]);
        self.eos += n;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
