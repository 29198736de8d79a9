//! Conformance testing harness for miniprintf.
//!
//! This crate provides:
//! - Fixture verify: run JSON fixture cases through the engine
//! - Host parity: cross-check selected cases against the platform `snprintf`
//! - Float sweep: compare `%f` against a double-precision reference
//! - Report generation: human-readable + machine-readable conformance reports
//! - Structured JSONL logs for every run

#![deny(unsafe_code)]

pub mod config;
pub mod diff;
pub mod error;
pub mod exec;
pub mod fixtures;
pub mod float_reference;
pub mod host;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::VerificationResult;
