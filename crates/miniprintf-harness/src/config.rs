//! Harness logging configuration.
//!
//! The minimum structured-log level comes from `MINIPRINTF_LOG`:
//! `trace`, `debug`, `info` (default), `warn`, `error` or `off`.

use std::sync::OnceLock;

use crate::structured_log::LogLevel;

/// Environment variable consulted by [`log_threshold`].
pub const LOG_ENV_VAR: &str = "MINIPRINTF_LOG";

/// Minimum level written to the JSONL log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogThreshold {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Nothing is written.
    Off,
}

impl LogThreshold {
    /// Parse from string (case-insensitive). Unknown values select the default.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" | "all" => Self::Trace,
            "debug" => Self::Debug,
            "info" | "default" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            "off" | "none" | "0" => Self::Off,
            _ => Self::Info,
        }
    }

    /// Returns true if entries at `level` pass the threshold.
    #[must_use]
    pub fn allows(self, level: LogLevel) -> bool {
        let rank = match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        };
        self != Self::Off && rank >= self
    }
}

static GLOBAL_THRESHOLD: OnceLock<LogThreshold> = OnceLock::new();

/// Get the configured threshold (reads env var on first call, caches thereafter).
#[must_use]
pub fn log_threshold() -> LogThreshold {
    *GLOBAL_THRESHOLD.get_or_init(|| {
        std::env::var(LOG_ENV_VAR)
            .map(|v| LogThreshold::from_str_loose(&v))
            .unwrap_or_default()
    })
}
