//! Integer to digit-string conversion (`ltoa`).
//!
//! Converts a magnitude to its minimal digit sequence in base 8, 10 or 16.
//! Signs are the caller's business: signed values go through [`magnitude`]
//! first, which is exact for `i64::MIN`.

use crate::stdio::token::Token;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Supported conversion bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub const fn base(self) -> u64 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

/// Number of digits `value` needs in `base`.
pub const fn digit_count(mut value: u64, base: u64) -> usize {
    let mut n = 1;
    while value >= base {
        value /= base;
        n += 1;
    }
    n
}

/// Most digits any `u64` needs; octal is the widest supported base.
pub const MAX_RADIX_DIGITS: usize = digit_count(u64::MAX, 8);

/// Digits of one converted value, most significant first.
#[derive(Clone, Copy)]
pub struct RadixDigits {
    buf: [u8; MAX_RADIX_DIGITS],
    start: usize,
}

impl RadixDigits {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    pub fn len(&self) -> usize {
        MAX_RADIX_DIGITS - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl core::fmt::Debug for RadixDigits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RadixDigits")
            .field(&core::str::from_utf8(self.as_bytes()).unwrap_or("<bin>"))
            .finish()
    }
}

/// Render `value` in `radix`. Hex digits above 9 are uppercase.
///
/// Digits are produced least significant first from the end of the buffer,
/// so the result needs no reversal.
pub fn to_radix_digits(mut value: u64, radix: Radix) -> RadixDigits {
    let base = radix.base();
    let mut buf = [0u8; MAX_RADIX_DIGITS];
    let mut pos = MAX_RADIX_DIGITS;
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(value % base) as usize];
        value /= base;
        if value == 0 {
            break;
        }
    }
    RadixDigits { buf, start: pos }
}

/// Append the digits of `value` to `token`.
pub fn push_radix_digits(token: &mut Token, value: u64, radix: Radix) {
    token.extend(to_radix_digits(value, radix).as_bytes());
}

/// Absolute value of `value` as an unsigned magnitude.
#[inline]
pub fn magnitude(value: i64) -> u64 {
    value.unsigned_abs()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_back(digits: &RadixDigits, radix: Radix) -> u64 {
        let text = core::str::from_utf8(digits.as_bytes()).unwrap();
        u64::from_str_radix(text, radix.base() as u32).unwrap()
    }

    #[test]
    fn test_max_digits_is_octal_u64() {
        assert_eq!(MAX_RADIX_DIGITS, 22);
        assert_eq!(digit_count(u64::MAX, 10), 20);
        assert_eq!(digit_count(u64::MAX, 16), 16);
        assert_eq!(digit_count(0, 10), 1);
    }

    #[test]
    fn test_zero_is_single_digit() {
        for radix in [Radix::Octal, Radix::Decimal, Radix::Hex] {
            assert_eq!(to_radix_digits(0, radix).as_bytes(), b"0");
        }
    }

    #[test]
    fn test_bases() {
        assert_eq!(to_radix_digits(255, Radix::Hex).as_bytes(), b"FF");
        assert_eq!(to_radix_digits(255, Radix::Octal).as_bytes(), b"377");
        assert_eq!(to_radix_digits(255, Radix::Decimal).as_bytes(), b"255");
        assert_eq!(to_radix_digits(0xDEAD_BEEF, Radix::Hex).as_bytes(), b"DEADBEEF");
    }

    #[test]
    fn test_u64_max() {
        assert_eq!(
            to_radix_digits(u64::MAX, Radix::Octal).as_bytes(),
            b"1777777777777777777777"
        );
        assert_eq!(
            to_radix_digits(u64::MAX, Radix::Decimal).as_bytes(),
            b"18446744073709551615"
        );
    }

    #[test]
    fn test_magnitude_of_most_negative() {
        assert_eq!(magnitude(i64::MIN), 9_223_372_036_854_775_808);
        assert_eq!(
            to_radix_digits(magnitude(i64::MIN), Radix::Decimal).as_bytes(),
            b"9223372036854775808"
        );
        assert_eq!(magnitude(i32::MIN as i64), 2_147_483_648);
    }

    #[test]
    fn test_signed_values_parse_back() {
        let samples = [
            0_i64,
            1,
            -1,
            7,
            -8,
            255,
            -4096,
            i32::MIN as i64,
            i32::MAX as i64,
            i64::MIN,
            i64::MAX,
            i64::MIN + 1,
        ];
        for v in samples {
            for radix in [Radix::Octal, Radix::Decimal, Radix::Hex] {
                let digits = to_radix_digits(magnitude(v), radix);
                assert_eq!(parse_back(&digits, radix), v.unsigned_abs(), "{v} in {radix:?}");
            }
        }
    }

    #[test]
    fn test_no_leading_zeros() {
        let d = to_radix_digits(1000, Radix::Decimal);
        assert_eq!(d.len(), 4);
        assert_eq!(d.as_bytes()[0], b'1');
    }

    #[test]
    fn test_push_into_token() {
        let mut t = Token::new();
        t.push(b'-');
        push_radix_digits(&mut t, 42, Radix::Decimal);
        assert_eq!(t, b"-42");
    }
}
