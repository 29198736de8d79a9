//! Numeric-to-text helpers in the spirit of `<stdlib.h>`.

pub mod conversion;

pub use conversion::{Radix, RadixDigits, magnitude, push_radix_digits, to_radix_digits};
