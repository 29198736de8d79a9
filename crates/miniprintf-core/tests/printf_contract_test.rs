//! Integration test: printf engine contract
//!
//! Drives the public entry points the way an embedded caller would: a
//! custom device stream, bounded buffers, and the variadic macros.
//!
//! Run: cargo test -p miniprintf-core --test printf_contract_test

use miniprintf_core::stdio::printf::{Conversion, Directive};
use miniprintf_core::stdlib::Radix;
use miniprintf_core::{Arg, ArgList, MemoryStream, NullStream, Stream, StreamError};

/// Device that records bytes and refuses everything after `limit`,
/// keeping its own failure tally.
struct Uart {
    sent: Vec<u8>,
    limit: usize,
    dropped: usize,
}

impl Uart {
    fn new(limit: usize) -> Self {
        Self {
            sent: Vec::new(),
            limit,
            dropped: 0,
        }
    }
}

impl Stream for Uart {
    fn put(&mut self, byte: u8) -> Result<(), StreamError> {
        if self.sent.len() >= self.limit {
            self.dropped += 1;
            return Err(StreamError::Rejected);
        }
        self.sent.push(byte);
        Ok(())
    }
}

fn render(fmt: &str, args: &[Arg<'_>]) -> (String, usize) {
    let mut uart = Uart::new(usize::MAX);
    let n = miniprintf_core::printf(&mut uart, fmt.as_bytes(), args);
    (String::from_utf8(uart.sent).unwrap(), n)
}

// -----------------------------------------------------------------
// Padding and sign placement
// -----------------------------------------------------------------

#[test]
fn zero_fill_places_sign_first() {
    assert_eq!(render("%05d", &[Arg::Int(5)]).0, "00005");
    assert_eq!(render("%-5d", &[Arg::Int(5)]).0, "5    ");
    assert_eq!(render("%05d", &[Arg::Int(-5)]).0, "-0005");
    assert_eq!(render("%08ld", &[Arg::Long(-123)]).0, "-0000123");
}

#[test]
fn mixed_directives_in_one_line() {
    let args = [
        Arg::from("temp"),
        Arg::Int(-4),
        Arg::UInt(0x2A),
        Arg::Char(b'C'),
    ];
    let (out, n) = render("%-6s|%4d|0x%04x|%c", &args);
    assert_eq!(out, "temp  |  -4|0x002A|C");
    assert_eq!(n, out.len());
}

#[cfg(feature = "float")]
#[test]
fn float_reparses_to_shortest_form() {
    let (out, _) = render("%f", &[Arg::Float(3.5)]);
    assert_eq!(out, "3.5");
    let parsed: f32 = out.parse().unwrap();
    assert_eq!(parsed, 3.5);

    let (out, _) = render("%f", &[Arg::from(1.0f64 / 3.0)]);
    assert_eq!(out, "0.333333343");
    let parsed: f32 = out.parse().unwrap();
    assert_eq!(parsed, 1.0f32 / 3.0);
}

// -----------------------------------------------------------------
// Counting and device failure
// -----------------------------------------------------------------

#[test]
fn count_includes_rejected_bytes() {
    let mut uart = Uart::new(3);
    let n = miniprintf_core::printf(&mut uart, b"%s", &[Arg::from("abcdef")]);
    assert_eq!(n, 6);
    assert_eq!(uart.sent, b"abc");
    assert_eq!(uart.dropped, 3);
}

#[test]
fn null_stream_sizes_output() {
    let n = miniprintf_core::printf(&mut NullStream, b"%5d:%s", &[Arg::Int(1), Arg::Str(None)]);
    assert_eq!(n, 12);
}

#[test]
fn identical_calls_identical_output() {
    let args = [Arg::Int(7), Arg::from("seven"), Arg::Long(-7)];
    let first = render("%03u %.2s %ld", &args);
    let second = render("%03u %.2s %ld", &args);
    assert_eq!(first, second);
    assert_eq!(first.0, "007 se -7");
}

// -----------------------------------------------------------------
// Bounded buffers
// -----------------------------------------------------------------

#[test]
fn snprintf_truncates_and_terminates() {
    let mut buf = [0x55u8; 6];
    let n = miniprintf_core::snprintf(&mut buf, b"%s", &[Arg::from("overflowing")]);
    assert_eq!(n, 11);
    assert_eq!(&buf, b"overf\0");
}

#[test]
fn snprintf_zero_capacity_is_untouched() {
    let n = miniprintf_core::snprintf(&mut [], b"%d", &[Arg::Int(12345)]);
    assert_eq!(n, 5);
}

#[test]
fn memory_stream_appends_after_existing_content() {
    let mut buf = *b"ab......";
    let mut stream = MemoryStream::with_eos(&mut buf, 6, 2);
    let n = miniprintf_core::printf(&mut stream, b"%x", &[Arg::ULong(0xCAFEBABE)]);
    assert_eq!(n, 8);
    assert_eq!(stream.as_bytes(), b"abCAFE");
    assert!(stream.is_full());
}

#[test]
fn vsnprintf_shares_cursor_across_calls() {
    let args = [Arg::Int(1), Arg::Int(2)];
    let mut list = ArgList::new(&args);
    let mut first = [0u8; 4];
    let mut second = [0u8; 4];
    miniprintf_core::vsnprintf(&mut first, b"%d", &mut list);
    miniprintf_core::vsnprintf(&mut second, b"%d", &mut list);
    assert_eq!(&first[..2], b"1\0");
    assert_eq!(&second[..2], b"2\0");
}

// -----------------------------------------------------------------
// Macros and parser surface
// -----------------------------------------------------------------

#[test]
fn macros_accept_rust_values() {
    let mut buf = [0u8; 32];
    let n = miniprintf_core::snprintf!(&mut buf, "%s:%d:%lu", "id", -3i8, u64::MAX);
    let text = "id:-3:18446744073709551615";
    assert_eq!(n, text.len());
    assert_eq!(&buf[..n], text.as_bytes());
    assert_eq!(buf[n], 0);

    let mut uart = Uart::new(usize::MAX);
    miniprintf_core::printf!(&mut uart, "%c%c", 'o', b'k');
    assert_eq!(uart.sent, b"ok");
}

#[test]
fn directive_parse_is_public() {
    let mut args = ArgList::new(&[]);
    let (d, used) = Directive::parse(b"-12O", &mut args).unwrap();
    assert_eq!(used, 4);
    assert!(d.left_align && d.is_long);
    assert_eq!(d.width, 12);
    assert_eq!(d.conversion, Conversion::Unsigned(Radix::Octal));
}
