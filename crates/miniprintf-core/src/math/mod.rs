//! Floating-point text conversion.

pub mod float;

pub use float::{in_full_precision_range, push_fixed_point, significant_figures, to_fixed_point};
