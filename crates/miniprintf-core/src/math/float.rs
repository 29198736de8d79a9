//! Fixed-point `f32` to decimal conversion (`ftoa`).
//!
//! Produces plain positional notation (never scientific) limited to a number
//! of significant figures, with trailing fractional zeros removed.
//!
//! The conversion is exact: the float is split into `m * 2^k`, scaled by a
//! power of ten in 128-bit integer arithmetic and rounded half-to-even, so
//! the kept digits match what a correctly rounding C library prints for the
//! same value.
//!
//! Supported envelope: values whose decimal exponent lies in
//! `MIN_FULL_PRECISION_EXPONENT..=MAX_FIXED_EXPONENT` (`1e-4 <= v < 1e7`)
//! keep every requested significant figure.
//! - Below it, digits finer than `10^-(sig + 3)` are dropped. Tiny values
//!   print as `0`.
//! - Above it, the leading `sig` digits are followed by zero fill. `f32`
//!   carries no more real digits than that.

use crate::stdio::token::Token;
use crate::stdlib::conversion::{Radix, to_radix_digits};

/// Significant figures used when the directive gives no precision.
pub const DEFAULT_SIGNIFICANT_FIGURES: u32 = 9;

/// Upper clamp for a requested precision; `f32` holds about 9 digits.
pub const MAX_SIGNIFICANT_FIGURES: u32 = 9;

/// Smallest decimal exponent printed with full significance.
pub const MIN_FULL_PRECISION_EXPONENT: i32 = -4;

/// Largest decimal exponent printed with full significance.
pub const MAX_FIXED_EXPONENT: i32 = 6;

/// Most fractional digits a conversion can produce.
pub const MAX_FRACTION_DIGITS: usize =
    (MAX_SIGNIFICANT_FIGURES as i32 - 1 - MIN_FULL_PRECISION_EXPONENT) as usize;

/// `f32::MAX` as an integer: an all-ones mantissa at the top exponent.
const F32_MAX_INTEGER: u128 =
    ((1u128 << f32::MANTISSA_DIGITS) - 1) << (f32::MAX_EXP as u32 - f32::MANTISSA_DIGITS);

/// Integer digits of the largest finite `f32`.
pub const F32_MAX_INTEGER_DIGITS: usize = decimal_digits(F32_MAX_INTEGER);

/// Exponents below this all round at the same position, so they need not
/// be resolved exactly.
const EXPONENT_FLOOR: i32 = MIN_FULL_PRECISION_EXPONENT - MAX_SIGNIFICANT_FIGURES as i32;

const fn decimal_digits(mut value: u128) -> usize {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}

/// Map a directive precision to a significant-figure count.
///
/// Zero selects [`DEFAULT_SIGNIFICANT_FIGURES`]; larger requests are clamped
/// to [`MAX_SIGNIFICANT_FIGURES`].
pub fn significant_figures(precision: usize) -> u32 {
    if precision == 0 {
        DEFAULT_SIGNIFICANT_FIGURES
    } else {
        precision.min(MAX_SIGNIFICANT_FIGURES as usize) as u32
    }
}

/// True when `value` converts without losing requested digits.
pub fn in_full_precision_range(value: f32) -> bool {
    if !value.is_finite() {
        return false;
    }
    if value == 0.0 {
        return true;
    }
    let (m, k) = decompose(value.abs());
    (MIN_FULL_PRECISION_EXPONENT..=MAX_FIXED_EXPONENT).contains(&decimal_exponent(m, k))
}

/// Convert `value` into a fresh token.
pub fn to_fixed_point(value: f32, significant: u32) -> Token {
    let mut token = Token::new();
    push_fixed_point(&mut token, value, significant);
    token
}

/// Append the fixed-point form of `value` to `token`.
///
/// The caller strips the sign; a negative input is converted by magnitude.
/// NaN and infinity are written as `nan` and `inf`.
pub fn push_fixed_point(token: &mut Token, value: f32, significant: u32) {
    if value.is_nan() {
        token.extend(b"nan");
        return;
    }
    if value.is_infinite() {
        token.extend(b"inf");
        return;
    }
    let value = value.abs();
    if value == 0.0 {
        token.push(b'0');
        return;
    }

    let sig = significant.clamp(1, MAX_SIGNIFICANT_FIGURES) as i32;
    let (m, k) = decompose(value);
    let e = decimal_exponent(m, k);
    // Exponent of the lowest digit kept.
    let q = (e + 1 - sig).max(MIN_FULL_PRECISION_EXPONENT + 1 - sig);

    let scaled = to_radix_digits(scaled_round(m, k, q), Radix::Decimal);
    let digits = scaled.as_bytes();

    if q >= 0 {
        token.extend(digits);
        token.fill(b'0', q as usize);
        return;
    }

    let frac = q.unsigned_abs() as usize;
    if digits.len() > frac {
        let split = digits.len() - frac;
        token.extend(&digits[..split]);
        token.push(b'.');
        token.extend(&digits[split..]);
    } else {
        token.extend(b"0.");
        token.fill(b'0', frac - digits.len());
        token.extend(digits);
    }
    trim_fraction(token);
}

/// Drop trailing fractional zeros and a dangling point.
fn trim_fraction(token: &mut Token) {
    while token.last() == Some(b'0') {
        token.pop();
    }
    if token.last() == Some(b'.') {
        token.pop();
    }
}

/// Split a positive finite float into `(m, k)` with `value == m * 2^k`.
fn decompose(value: f32) -> (u32, i32) {
    let bits = value.to_bits();
    let biased = ((bits >> 23) & 0xff) as i32;
    let fraction = bits & 0x007f_ffff;
    if biased == 0 {
        (fraction, -149)
    } else {
        (fraction | 0x0080_0000, biased - 150)
    }
}

/// `floor(log10(m * 2^k))`, or [`EXPONENT_FLOOR`] for anything smaller.
fn decimal_exponent(m: u32, k: i32) -> i32 {
    let log2 = 31 - m.leading_zeros() as i32 + k;
    // 1233 / 4096 just under log10(2); the extra -1 keeps the guess low.
    let estimate = (log2 * 1233).div_euclid(4096) - 1;
    if estimate < EXPONENT_FLOOR {
        return EXPONENT_FLOOR;
    }
    let mut e = estimate;
    while at_least_pow10(m, k, e + 1) {
        e += 1;
    }
    e
}

/// Exact test of `m * 2^k >= 10^t`.
fn at_least_pow10(m: u32, k: i32, t: i32) -> bool {
    let m = u128::from(m);
    let shift = k.unsigned_abs();
    if t >= 0 {
        let Some(p) = 10u128.checked_pow(t as u32) else {
            return false;
        };
        if k >= 0 {
            // m < 2^24 and k <= 104 for every finite f32.
            (m << shift) >= p
        } else {
            match 1u128.checked_shl(shift).and_then(|s| p.checked_mul(s)) {
                Some(rhs) => m >= rhs,
                None => false,
            }
        }
    } else {
        let Some(lhs) = 10u128.checked_pow(t.unsigned_abs()).and_then(|p| p.checked_mul(m)) else {
            return true;
        };
        if k >= 0 {
            return true;
        }
        match 1u128.checked_shl(shift) {
            Some(rhs) => lhs >= rhs,
            None => false,
        }
    }
}

/// `m * 2^k / 10^q` rounded half-to-even.
fn scaled_round(m: u32, k: i32, q: i32) -> u64 {
    let scale = 10u128.pow(q.unsigned_abs());
    let (mut num, mut den) = if q < 0 {
        (u128::from(m) * scale, 1u128)
    } else {
        (u128::from(m), scale)
    };
    if k >= 0 {
        num <<= k as u32;
    } else {
        match 1u128.checked_shl(k.unsigned_abs()).and_then(|s| den.checked_mul(s)) {
            Some(d) => den = d,
            // The denominator dwarfs a numerator below 2^71.
            None => return 0,
        }
    }
    let quotient = num / den;
    let remainder = num % den;
    let upper = den - remainder;
    let round_up = remainder > upper || (remainder == upper && quotient & 1 == 1);
    (quotient + u128::from(round_up)) as u64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
