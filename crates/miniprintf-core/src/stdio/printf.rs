//! printf formatting engine.
//!
//! Interprets the format mini-language
//! `%[-][0][width|*][.precision|*][l|L]conv` in a single left-to-right pass
//! and streams the result one byte at a time.
//!
//! Design:
//! - each directive renders into a stack [`Token`] (or borrows the string
//!   argument directly), then is padded while it is streamed;
//! - the returned count covers every byte offered to the stream, whether or
//!   not the stream accepted it;
//! - malformed directives are echoed, never rejected.
//!
//! Invariants: no allocation, no `unsafe`, arguments consumed strictly in
//! directive order with `*` fields taking theirs where they appear.

use super::args::{Arg, ArgList};
use super::memstream::MemoryStream;
use super::stream::Stream;
use super::token::Token;
use crate::stdlib::conversion::{Radix, magnitude, push_radix_digits};

#[cfg(feature = "float")]
use crate::math::float::{push_fixed_point, significant_figures};

/// Effective bound for `%s` when no precision is given.
pub const MAX_STRING_PRECISION: usize = 32767;

/// Substituted for a null `%s` argument.
pub const NULL_TEXT: &[u8] = b"(null)";

// ---------------------------------------------------------------------------
// Directive
// ---------------------------------------------------------------------------

/// What a directive converts its argument into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `c`
    Char,
    /// `s`
    Str,
    /// `d`, `i`, `D`, `I`
    Signed,
    /// `u`, `x`, `o` and their uppercase long forms.
    Unsigned(Radix),
    /// `f`
    #[cfg(feature = "float")]
    Float,
    /// Anything else, echoed as-is (`%%` included).
    Literal(u8),
}

/// One parsed `%...` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub left_align: bool,
    /// Padding byte: `b'0'` or `b' '`. Always a space for `c` and `s`.
    pub filler: u8,
    pub width: usize,
    /// Zero when absent.
    pub precision: usize,
    pub is_long: bool,
    pub conversion: Conversion,
}

/// Conversion letters that select the long argument width on their own.
pub const fn is_long_letter(c: u8) -> bool {
    matches!(c, b'D' | b'I' | b'U' | b'X' | b'O')
}

impl Directive {
    /// Parse a directive from the bytes following `%`.
    ///
    /// `*` fields fetch their value from `args` as they are met. Returns the
    /// directive and the number of bytes used, or `None` when `fmt` runs out
    /// before a conversion letter.
    pub fn parse(fmt: &[u8], args: &mut ArgList<'_, '_>) -> Option<(Directive, usize)> {
        let mut pos = 0;

        let left_align = fmt.first() == Some(&b'-');
        if left_align {
            pos += 1;
        }
        let mut filler = b' ';
        if fmt.get(pos) == Some(&b'0') {
            filler = b'0';
            pos += 1;
        }

        let (width, mut c) = parse_count(fmt, &mut pos, args)?;
        let mut precision = 0;
        if c == b'.' {
            (precision, c) = parse_count(fmt, &mut pos, args)?;
        }

        let is_long = if c == b'l' || c == b'L' {
            // A trailing marker is kept and echoed.
            if let Some(&next) = fmt.get(pos) {
                c = next;
                pos += 1;
            }
            true
        } else {
            is_long_letter(c)
        };

        let conversion = match c {
            b'c' => Conversion::Char,
            b's' => Conversion::Str,
            b'd' | b'D' | b'i' | b'I' => Conversion::Signed,
            b'u' | b'U' => Conversion::Unsigned(Radix::Decimal),
            b'x' | b'X' => Conversion::Unsigned(Radix::Hex),
            b'o' | b'O' => Conversion::Unsigned(Radix::Octal),
            #[cfg(feature = "float")]
            b'f' => Conversion::Float,
            other => Conversion::Literal(other),
        };
        if matches!(conversion, Conversion::Char | Conversion::Str) {
            filler = b' ';
        }

        Some((
            Directive {
                left_align,
                filler,
                width,
                precision,
                is_long,
                conversion,
            },
            pos,
        ))
    }
}

/// Accumulate a width or precision field.
///
/// Each digit or `*` contributes `value * 10 + part`. Returns the clamped
/// value and the first byte that is neither, which is consumed.
fn parse_count(fmt: &[u8], pos: &mut usize, args: &mut ArgList<'_, '_>) -> Option<(usize, u8)> {
    let mut value: i32 = 0;
    loop {
        let c = *fmt.get(*pos)?;
        *pos += 1;
        let part = match c {
            b'0'..=b'9' => i32::from(c - b'0'),
            b'*' => args.next_int(),
            _ => return Some((usize::try_from(value).unwrap_or(0), c)),
        };
        value = value.saturating_mul(10).saturating_add(part);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Unpadded output of one directive.
enum Rendered<'a> {
    Token(Token),
    Text(&'a [u8]),
}

impl Rendered<'_> {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Rendered::Token(t) => t.as_bytes(),
            Rendered::Text(s) => s,
        }
    }
}

fn render<'a>(directive: &Directive, args: &mut ArgList<'a, '_>) -> Rendered<'a> {
    let mut token = Token::new();
    match directive.conversion {
        Conversion::Char => token.push(args.next_int() as u8),
        Conversion::Str => {
            return Rendered::Text(bounded_text(args.next_str(), directive.precision));
        }
        Conversion::Signed => {
            let value = if directive.is_long {
                args.next_long()
            } else {
                i64::from(args.next_int())
            };
            if value < 0 {
                token.push(b'-');
            }
            push_radix_digits(&mut token, magnitude(value), Radix::Decimal);
        }
        Conversion::Unsigned(radix) => {
            let value = if directive.is_long {
                args.next_ulong()
            } else {
                u64::from(args.next_uint())
            };
            push_radix_digits(&mut token, value, radix);
        }
        #[cfg(feature = "float")]
        Conversion::Float => {
            let mut value = args.next_float();
            if value < 0.0 {
                token.push(b'-');
                value = -value;
            }
            push_fixed_point(&mut token, value, significant_figures(directive.precision));
        }
        Conversion::Literal(c) => token.push(c),
    }
    Rendered::Token(token)
}

/// The `%s` text: up to `precision` bytes, stopping at a NUL.
fn bounded_text(text: Option<&[u8]>, precision: usize) -> &[u8] {
    let text = text.unwrap_or(NULL_TEXT);
    let limit = match precision {
        0 => MAX_STRING_PRECISION,
        p => p,
    };
    let text = &text[..text.len().min(limit)];
    match text.iter().position(|&b| b == 0) {
        Some(end) => &text[..end],
        None => text,
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Forwards bytes to a stream and counts every byte offered.
struct ByteCounter<'s, S: ?Sized> {
    stream: &'s mut S,
    count: usize,
}

impl<'s, S: Stream + ?Sized> ByteCounter<'s, S> {
    fn new(stream: &'s mut S) -> Self {
        Self { stream, count: 0 }
    }

    #[inline]
    fn put(&mut self, byte: u8) {
        // Device failures are the stream's to record.
        let _ = self.stream.put(byte);
        self.count += 1;
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put(b);
        }
    }

    fn fill(&mut self, byte: u8, count: usize) {
        for _ in 0..count {
            self.put(byte);
        }
    }
}

/// Pad `body` to the directive's width and stream it.
///
/// Zero fill goes after a leading `-`, so `-5` at width 5 reads `-0005`.
fn emit_padded<S: Stream + ?Sized>(out: &mut ByteCounter<'_, S>, directive: &Directive, body: &[u8]) {
    let pad = directive.width.saturating_sub(body.len());
    if directive.left_align {
        out.write(body);
        out.fill(directive.filler, pad);
        return;
    }
    let mut body = body;
    if pad > 0 && directive.filler == b'0' {
        if let [b'-', digits @ ..] = body {
            out.put(b'-');
            body = digits;
        }
    }
    out.fill(directive.filler, pad);
    out.write(body);
}

fn until_nul(fmt: &[u8]) -> &[u8] {
    match fmt.iter().position(|&b| b == 0) {
        Some(end) => &fmt[..end],
        None => fmt,
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Format into `stream`, consuming arguments from `args`.
///
/// Returns the number of bytes produced, counted whether or not the stream
/// accepted them. `args` is left positioned after the last argument used.
pub fn vprintf<'a, S: Stream + ?Sized>(
    stream: &mut S,
    fmt: &[u8],
    args: &mut ArgList<'a, '_>,
) -> usize {
    let fmt = until_nul(fmt);
    let mut out = ByteCounter::new(stream);
    let mut pos = 0;
    while pos < fmt.len() {
        let Some(offset) = fmt[pos..].iter().position(|&b| b == b'%') else {
            out.write(&fmt[pos..]);
            break;
        };
        out.write(&fmt[pos..pos + offset]);
        pos += offset + 1;

        let Some((directive, used)) = Directive::parse(&fmt[pos..], args) else {
            break;
        };
        pos += used;
        let rendered = render(&directive, args);
        emit_padded(&mut out, &directive, rendered.as_bytes());
    }
    out.count
}

/// Format into `stream` with a fixed argument slice.
pub fn printf<S: Stream + ?Sized>(stream: &mut S, fmt: &[u8], args: &[Arg<'_>]) -> usize {
    vprintf(stream, fmt, &mut ArgList::new(args))
}

/// Bounded formatting into `buf`.
///
/// At most `buf.len() - 1` bytes are stored and a NUL follows them. An
/// empty `buf` is never touched. Returns the untruncated length, so
/// truncation shows as a result `>= buf.len()`.
pub fn vsnprintf(buf: &mut [u8], fmt: &[u8], args: &mut ArgList<'_, '_>) -> usize {
    let size = buf.len();
    let mut stream = MemoryStream::with_capacity(buf, size.saturating_sub(1));
    let count = vprintf(&mut stream, fmt, args);
    let eos = stream.eos();
    if size > 0 {
        buf[eos] = 0;
    }
    count
}

/// Bounded formatting into `buf` with a fixed argument slice.
pub fn snprintf(buf: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> usize {
    vsnprintf(buf, fmt, &mut ArgList::new(args))
}

/// Variadic front end for [`printf`](crate::stdio::printf()).
///
/// `printf!(&mut stream, "%s=%d", name, value)`; each argument goes through
/// `Arg::from`.
#[macro_export]
macro_rules! printf {
    ($stream:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::stdio::printf(
            $stream,
            ::core::convert::AsRef::<[u8]>::as_ref(&$fmt),
            &[$($crate::stdio::Arg::from($arg)),*],
        )
    };
}

/// Variadic front end for [`snprintf`](crate::stdio::snprintf()).
#[macro_export]
macro_rules! snprintf {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::stdio::snprintf(
            $buf,
            ::core::convert::AsRef::<[u8]>::as_ref(&$fmt),
            &[$($crate::stdio::Arg::from($arg)),*],
        )
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn format(fmt: &str, args: &[Arg<'_>]) -> String {
        let mut out = Vec::new();
        let n = printf(&mut out, fmt.as_bytes(), args);
        assert_eq!(n, out.len(), "count for {fmt:?}");
        String::from_utf8(out).unwrap()
    }

    fn parse(fmt: &[u8]) -> Option<(Directive, usize)> {
        parse_with(fmt, &[])
    }

    fn parse_with(fmt: &[u8], args: &[Arg<'_>]) -> Option<(Directive, usize)> {
        Directive::parse(fmt, &mut ArgList::new(args))
    }

    // -- parser --

    #[test]
    fn test_parse_full_directive() {
        let (d, used) = parse(b"-08.3lx rest").unwrap();
        assert!(d.left_align);
        assert_eq!(d.filler, b'0');
        assert_eq!(d.width, 8);
        assert_eq!(d.precision, 3);
        assert!(d.is_long);
        assert_eq!(d.conversion, Conversion::Unsigned(Radix::Hex));
        assert_eq!(used, 7);
    }

    #[test]
    fn test_parse_uppercase_implies_long() {
        for (fmt, conv) in [
            (b"D", Conversion::Signed),
            (b"I", Conversion::Signed),
            (b"U", Conversion::Unsigned(Radix::Decimal)),
            (b"X", Conversion::Unsigned(Radix::Hex)),
            (b"O", Conversion::Unsigned(Radix::Octal)),
        ] {
            let (d, _) = parse(fmt).unwrap();
            assert!(d.is_long, "{:?}", fmt);
            assert_eq!(d.conversion, conv);
        }
        let (d, _) = parse(b"d").unwrap();
        assert!(!d.is_long);
        let (d, _) = parse(b"S").unwrap();
        assert!(!d.is_long);
        assert_eq!(d.conversion, Conversion::Literal(b'S'));
    }

    #[test]
    fn test_parse_star_fields_consume_in_order() {
        let args = [Arg::Int(6), Arg::Int(2)];
        let mut list = ArgList::new(&args);
        let (d, used) = Directive::parse(b"*.*s", &mut list).unwrap();
        assert_eq!((d.width, d.precision, used), (6, 2, 4));
        assert_eq!(list.consumed(), 2);
    }

    #[test]
    fn test_parse_negative_star_clamps() {
        let (d, _) = parse_with(b"*d", &[Arg::Int(-7)]).unwrap();
        assert_eq!(d.width, 0);
        let (d, _) = parse_with(b".*s", &[Arg::Int(-1)]).unwrap();
        assert_eq!(d.precision, 0);
    }

    #[test]
    fn test_parse_huge_width_saturates() {
        let (d, _) = parse(b"99999999999999d").unwrap();
        assert_eq!(d.width, i32::MAX as usize);
    }

    #[test]
    fn test_parse_filler_forced_to_space() {
        assert_eq!(parse(b"05c").unwrap().0.filler, b' ');
        assert_eq!(parse(b"05s").unwrap().0.filler, b' ');
        assert_eq!(parse(b"05u").unwrap().0.filler, b'0');
    }

    #[test]
    fn test_parse_incomplete_directive() {
        assert!(parse(b"").is_none());
        assert!(parse(b"5").is_none());
        assert!(parse(b"-0").is_none());
        assert!(parse(b"12.").is_none());
        let (d, used) = parse(b"l").unwrap();
        assert_eq!(d.conversion, Conversion::Literal(b'l'));
        assert!(d.is_long);
        assert_eq!(used, 1);
    }

    // -- integers --

    #[test]
    fn test_signed_decimal() {
        assert_eq!(format("%d", &[Arg::Int(42)]), "42");
        assert_eq!(format("%i", &[Arg::Int(-42)]), "-42");
        assert_eq!(format("%d", &[Arg::Int(0)]), "0");
        assert_eq!(format("%d", &[Arg::Int(i32::MIN)]), "-2147483648");
        assert_eq!(format("%ld", &[Arg::Long(i64::MIN)]), "-9223372036854775808");
        assert_eq!(format("%D", &[Arg::Long(1 << 40)]), "1099511627776");
        assert_eq!(format("%ld", &[Arg::Int(-3)]), "-3");
    }

    #[test]
    fn test_zero_and_space_padding() {
        assert_eq!(format("%05d", &[Arg::Int(5)]), "00005");
        assert_eq!(format("%-5d|", &[Arg::Int(5)]), "5    |");
        assert_eq!(format("%05d", &[Arg::Int(-5)]), "-0005");
        assert_eq!(format("%5d", &[Arg::Int(-5)]), "   -5");
        assert_eq!(format("%2d", &[Arg::Int(-12345)]), "-12345");
        assert_eq!(format("%03d", &[Arg::Int(-12)]), "-12");
    }

    #[test]
    fn test_left_align_pads_with_filler() {
        assert_eq!(format("%-05d", &[Arg::Int(5)]), "50000");
        assert_eq!(format("%-05d", &[Arg::Int(-5)]), "-5000");
    }

    #[test]
    fn test_unsigned_radixes() {
        assert_eq!(format("%x", &[Arg::Int(255)]), "FF");
        assert_eq!(format("%o", &[Arg::Int(8)]), "10");
        assert_eq!(format("%u", &[Arg::Int(-1)]), "4294967295");
        assert_eq!(format("%x", &[Arg::Int(-1)]), "FFFFFFFF");
        assert_eq!(format("%lx", &[Arg::Int(-1)]), "FFFFFFFFFFFFFFFF");
        assert_eq!(format("%X", &[Arg::ULong(0x1_0000_0000)]), "100000000");
        assert_eq!(format("%08x", &[Arg::UInt(0xBEEF)]), "0000BEEF");
        assert_eq!(format("%lo", &[Arg::ULong(u64::MAX)]), "1777777777777777777777");
    }

    #[test]
    fn test_precision_ignored_for_integers() {
        assert_eq!(format("%.3d", &[Arg::Int(5)]), "5");
        assert_eq!(format("%6.2x", &[Arg::Int(10)]), "     A");
    }

    // -- chars and strings --

    #[test]
    fn test_char() {
        assert_eq!(format("%c", &[Arg::from('A')]), "A");
        assert_eq!(format("%05c", &[Arg::from('A')]), "    A");
        assert_eq!(format("%-3c|", &[Arg::from('A')]), "A  |");
        assert_eq!(format("%c", &[Arg::Int(0x141)]), "A");
    }

    #[test]
    fn test_string() {
        assert_eq!(format("%s", &[Arg::from("hello")]), "hello");
        assert_eq!(format("%.3s", &[Arg::from("hello")]), "hel");
        assert_eq!(format("%8s", &[Arg::from("hi")]), "      hi");
        assert_eq!(format("%08s", &[Arg::from("hi")]), "      hi");
        assert_eq!(format("%-4s|", &[Arg::from("hi")]), "hi  |");
        assert_eq!(format("%.10s", &[Arg::from("hi")]), "hi");
    }

    #[test]
    fn test_null_string() {
        assert_eq!(format("%s", &[Arg::Str(None)]), "(null)");
        assert_eq!(format("%.3s", &[Arg::Str(None)]), "(nu");
        assert_eq!(format("%.6s", &[Arg::Str(None)]), "(null)");
    }

    #[test]
    fn test_string_stops_at_nul() {
        assert_eq!(format("[%s]", &[Arg::from(&b"ab\0cd"[..])]), "[ab]");
    }

    #[test]
    fn test_string_default_bound() {
        let long = [b'a'; MAX_STRING_PRECISION + 10];
        let mut out = Vec::new();
        let n = printf(&mut out, b"%s", &[Arg::from(&long[..])]);
        assert_eq!(n, MAX_STRING_PRECISION);
    }

    // -- floats --

    #[cfg(feature = "float")]
    #[test]
    fn test_float_default_precision() {
        assert_eq!(format("%f", &[Arg::Float(3.5)]), "3.5");
        assert_eq!(format("%f", &[Arg::Float(-2.5)]), "-2.5");
        assert_eq!(format("%f", &[Arg::Float(0.1)]), "0.100000001");
        assert_eq!(format("%f", &[Arg::from(123.456f64)]), "123.456001");
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_float_precision_and_padding() {
        assert_eq!(format("%.3f", &[Arg::Float(3.14159)]), "3.14");
        assert_eq!(format("%8.2f", &[Arg::Float(3.14159)]), "     3.1");
        assert_eq!(format("%08.2f", &[Arg::Float(3.14159)]), "000003.1");
        assert_eq!(format("%010f", &[Arg::Float(-1.5)]), "-0000001.5");
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_float_specials() {
        assert_eq!(format("%f", &[Arg::Float(-0.0)]), "0");
        assert_eq!(format("%f", &[Arg::Float(f32::INFINITY)]), "inf");
        assert_eq!(format("%f", &[Arg::Float(f32::NEG_INFINITY)]), "-inf");
        assert_eq!(format("%f", &[Arg::Float(f32::NAN)]), "nan");
    }

    #[cfg(not(feature = "float"))]
    #[test]
    fn test_float_disabled_echoes_letter() {
        let args = [Arg::Float(1.0), Arg::Int(7)];
        assert_eq!(format("%f %d", &args), "f 1");
    }

    // -- literals and malformed input --

    #[test]
    fn test_percent_and_unknown() {
        assert_eq!(format("100%%", &[]), "100%");
        assert_eq!(format("%5%", &[]), "    %");
        assert_eq!(format("%q", &[]), "q");
        assert_eq!(format("%lq", &[]), "q");
        assert_eq!(format("%-3q|", &[]), "q  |");
    }

    #[test]
    fn test_truncated_directive_stops() {
        assert_eq!(format("abc%", &[]), "abc");
        assert_eq!(format("abc%5", &[Arg::Int(1)]), "abc");
        assert_eq!(format("%-0", &[]), "");
        assert_eq!(format("%.", &[]), "");
        assert_eq!(format("x%l", &[]), "xl");
    }

    #[test]
    fn test_nul_terminates_format() {
        let mut out = Vec::new();
        let n = printf(&mut out, b"ab\0%d", &[Arg::Int(1)]);
        assert_eq!(n, 2);
        assert_eq!(out, b"ab");
    }

    #[test]
    fn test_missing_arguments_default() {
        assert_eq!(format("%d %s %x", &[]), "0 (null) 0");
    }

    #[test]
    fn test_star_width_and_precision() {
        assert_eq!(format("%*d", &[Arg::Int(5), Arg::Int(42)]), "   42");
        assert_eq!(format("%-*d|", &[Arg::Int(4), Arg::Int(7)]), "7   |");
        assert_eq!(format("%.*s", &[Arg::Int(2), Arg::from("hello")]), "he");
        assert_eq!(
            format("%*.*s", &[Arg::Int(6), Arg::Int(2), Arg::from("hello")]),
            "    he"
        );
        assert_eq!(format("%*d", &[Arg::Int(-5), Arg::Int(42)]), "42");
        assert_eq!(format("%1*d", &[Arg::Int(2), Arg::Int(3)]), "           3");
    }

    #[test]
    fn test_vprintf_advances_cursor() {
        let args = [Arg::Int(3), Arg::Int(9), Arg::from("tail")];
        let mut list = ArgList::new(&args);
        let mut out = Vec::new();
        vprintf(&mut out, b"%*d", &mut list);
        assert_eq!(list.consumed(), 2);
        vprintf(&mut out, b"|%s", &mut list);
        assert_eq!(out, b"  9|tail");
        assert_eq!(list.remaining(), 0);
    }

    // -- streams and counting --

    #[test]
    fn test_count_ignores_stream_failure() {
        let mut storage = [0u8; 2];
        let mut stream = MemoryStream::new(&mut storage);
        let n = printf(&mut stream, b"%05d", &[Arg::Int(-5)]);
        assert_eq!(n, 5);
        assert_eq!(stream.as_bytes(), b"-0");
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let args = [Arg::Int(-17), Arg::from("x"), Arg::UInt(255)];
        let a = format("%04d %3s %x", &args);
        let b = format("%04d %3s %x", &args);
        assert_eq!(a, b);
        assert_eq!(a, "-017   x FF");
    }

    // -- bounded buffers --

    #[test]
    fn test_snprintf_fits() {
        let mut buf = [0xAAu8; 16];
        let n = snprintf(&mut buf, b"%s!", &[Arg::from("hi")]);
        assert_eq!(n, 3);
        assert_eq!(&buf[..4], b"hi!\0");
        assert_eq!(buf[4], 0xAA);
    }

    #[test]
    fn test_snprintf_truncates() {
        let mut buf = [0xAAu8; 8];
        let n = snprintf(&mut buf, b"hello world", &[]);
        assert_eq!(n, 11);
        assert_eq!(&buf[..7], b"hello w");
        assert_eq!(buf[7], 0);
    }

    #[test]
    fn test_snprintf_single_byte_buffer() {
        let mut buf = [0xAAu8; 1];
        assert_eq!(snprintf(&mut buf, b"%d", &[Arg::Int(123)]), 3);
        assert_eq!(buf, [0]);
    }

    #[test]
    fn test_snprintf_zero_capacity() {
        let mut buf: [u8; 0] = [];
        assert_eq!(snprintf(&mut buf, b"%s", &[Arg::from("abc")]), 3);
    }

    // -- macros --

    #[test]
    fn test_macros() {
        let mut out = Vec::new();
        let n = crate::printf!(&mut out, "%s=%d", "x", 5);
        assert_eq!(n, 3);
        assert_eq!(out, b"x=5");

        let mut buf = [0u8; 8];
        let n = crate::snprintf!(&mut buf, b"%u-%c", 7u32, 'z');
        assert_eq!(n, 3);
        assert_eq!(&buf[..4], b"7-z\0");

        let mut out = Vec::new();
        assert_eq!(crate::printf!(&mut out, "plain"), 5);
    }
}
