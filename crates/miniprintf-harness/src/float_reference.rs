//! Double-precision reference for the `%f` converter.
//!
//! Every `f32` is exactly representable as `f64`, and std's precision
//! formatting prints exact decimals rounded half-to-even. Rebuilding the
//! fixed-point form from those strings, with the same significant-figure
//! and exponent rules, gives an independent oracle for the engine.

use miniprintf_core::math::float::{
    MAX_SIGNIFICANT_FIGURES, MIN_FULL_PRECISION_EXPONENT, in_full_precision_range,
    significant_figures,
};
use miniprintf_core::{Arg, printf};
use serde::{Deserialize, Serialize};

/// Exponents below this round at one fixed position.
const EXPONENT_FLOOR: i32 = MIN_FULL_PRECISION_EXPONENT - MAX_SIGNIFICANT_FIGURES as i32;

/// Reference fixed-point text for the magnitude of `value`.
#[must_use]
pub fn reference_fixed_point(value: f32, significant: u32) -> String {
    let v = f64::from(value).abs();
    if v.is_nan() {
        return String::from("nan");
    }
    if v.is_infinite() {
        return String::from("inf");
    }
    if v == 0.0 {
        return String::from("0");
    }
    let sig = significant.clamp(1, MAX_SIGNIFICANT_FIGURES) as i32;
    let e = decimal_exponent(v).max(EXPONENT_FLOOR);
    let q = (e + 1 - sig).max(MIN_FULL_PRECISION_EXPONENT + 1 - sig);

    if q < 0 {
        let mut text = format!("{:.*}", (-q) as usize, v);
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        return text;
    }

    // Integer result: `sig` rounded digits, then zero fill.
    let sci = format!("{:.*e}", (sig - 1) as usize, v);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let mut text: String = mantissa.chars().filter(|c| *c != '.').collect();
    let zeros = exp - (sig - 1);
    for _ in 0..zeros.max(0) {
        text.push('0');
    }
    text
}

/// `floor(log10(v))` for a positive finite `v`, read from std's exact digits.
fn decimal_exponent(v: f64) -> i32 {
    let sci = format!("{v:.60e}");
    sci.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

/// Engine output for `%.<precision>f` on the magnitude of `value`.
#[must_use]
pub fn engine_fixed_point(value: f32, precision: usize) -> String {
    let mut out = Vec::new();
    let precision = i32::try_from(precision).unwrap_or(i32::MAX);
    printf(
        &mut out,
        b"%.*f",
        &[Arg::Int(precision), Arg::Float(value.abs())],
    );
    String::from_utf8_lossy(&out).into_owned()
}

/// One disagreement between engine and reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMismatch {
    pub value: f32,
    /// Bit pattern, for exact reproduction.
    pub bits: u32,
    pub precision: usize,
    /// Value lies where every requested figure is kept.
    pub in_envelope: bool,
    pub engine: String,
    pub reference: String,
}

/// Outcome of comparing the engine against the reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepReport {
    pub checked: usize,
    /// Checked values outside the full-precision envelope.
    pub out_of_envelope: usize,
    pub mismatches: Vec<SweepMismatch>,
}

impl SweepReport {
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare engine and reference for every value at `precision`
/// (0 selects the default significant figures).
#[must_use]
pub fn sweep(values: &[f32], precision: usize) -> SweepReport {
    let significant = significant_figures(precision);
    let mut report = SweepReport::default();
    for &value in values {
        let engine = engine_fixed_point(value, precision);
        let reference = reference_fixed_point(value, significant);
        let in_envelope = in_full_precision_range(value);
        report.checked += 1;
        if !in_envelope {
            report.out_of_envelope += 1;
        }
        if engine != reference {
            report.mismatches.push(SweepMismatch {
                value,
                bits: value.to_bits(),
                precision,
                in_envelope,
                engine,
                reference,
            });
        }
    }
    report
}

/// Hand-picked values around rounding and envelope boundaries.
#[must_use]
pub fn curated_values() -> Vec<f32> {
    vec![
        0.0,
        1.0,
        3.5,
        0.1,
        0.3,
        1.0 / 3.0,
        2.5,
        0.125,
        0.375,
        9.99999,
        99.5,
        123.456,
        1234.5678,
        2.71828,
        3.14159,
        0.0001,
        0.00015,
        0.001,
        1e-5,
        1.5e-6,
        0.00001234,
        1e-20,
        999_999.94,
        1e6,
        9_999_999.0,
        1e7,
        16_777_216.0,
        1e10,
        f32::MAX,
        f32::MIN_POSITIVE,
        f32::EPSILON,
        f32::from_bits(1),
        f32::INFINITY,
        f32::NAN,
    ]
}

/// `steps` finite values spread evenly over the positive `f32` bit patterns.
#[must_use]
pub fn stepped_values(steps: usize) -> Vec<f32> {
    let top = u64::from(f32::MAX.to_bits());
    let steps = steps.max(1) as u64;
    (0..=steps)
        .map(|i| f32::from_bits((i * top / steps) as u32))
        .collect()
}
