//! Sequential byte streams.
//!
//! A [`Stream`] accepts one byte at a time and reports whether the byte was
//! taken. The formatting engine never inspects the result: it counts every
//! byte it offers, so callers that care about device failures keep their own
//! status inside the stream and check it after the call.

/// Reason a stream refused a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A bounded stream has reached its capacity.
    #[error("stream is full")]
    Full,
    /// The underlying device rejected the byte.
    #[error("device rejected byte")]
    Rejected,
}

/// A byte sink.
pub trait Stream {
    /// Offer a single byte to the stream.
    fn put(&mut self, byte: u8) -> Result<(), StreamError>;

    /// Offer each byte of `bytes` in order.
    ///
    /// Returns the number of bytes the stream accepted. Rejected bytes do
    /// not stop the loop.
    fn write(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().filter(|&&b| self.put(b).is_ok()).count()
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    fn put(&mut self, byte: u8) -> Result<(), StreamError> {
        (**self).put(byte)
    }
}

/// Stream that accepts and discards every byte.
///
/// Formatting into a `NullStream` yields the output length without storing
/// anything, the equivalent of `snprintf(NULL, 0, ...)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStream;

impl Stream for NullStream {
    fn put(&mut self, _byte: u8) -> Result<(), StreamError> {
        Ok(())
    }
}

#[cfg(any(feature = "alloc", test))]
impl Stream for alloc::vec::Vec<u8> {
    fn put(&mut self, byte: u8) -> Result<(), StreamError> {
        self.push(byte);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    struct Flaky {
        accepted: Vec<u8>,
        calls: usize,
    }

    impl Stream for Flaky {
        fn put(&mut self, byte: u8) -> Result<(), StreamError> {
            self.calls += 1;
            if self.calls % 2 == 0 {
                return Err(StreamError::Rejected);
            }
            self.accepted.push(byte);
            Ok(())
        }
    }

    #[test]
    fn test_null_stream_accepts_everything() {
        let mut s = NullStream;
        assert_eq!(s.write(b"hello"), 5);
    }

    #[test]
    fn test_vec_stream_appends() {
        let mut v = Vec::new();
        assert_eq!(v.write(b"abc"), 3);
        assert_eq!(v.put(b'd'), Ok(()));
        assert_eq!(&v, b"abcd");
    }

    #[test]
    fn test_write_keeps_going_after_rejection() {
        let mut s = Flaky {
            accepted: Vec::new(),
            calls: 0,
        };
        assert_eq!(s.write(b"abcd"), 2);
        assert_eq!(s.calls, 4);
        assert_eq!(&s.accepted, b"ac");
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn emit<S: Stream>(mut s: S) {
            s.put(b'x').unwrap();
        }
        let mut v = Vec::new();
        emit(&mut v);
        assert_eq!(&v, b"x");
    }

    #[test]
    fn test_error_display() {
        use std::string::ToString;
        assert_eq!(StreamError::Full.to_string(), "stream is full");
        assert_eq!(StreamError::Rejected.to_string(), "device rejected byte");
    }
}
