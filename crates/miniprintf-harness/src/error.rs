//! Harness error type.

use std::path::PathBuf;

/// Failures surfaced by fixture loading and execution.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported function '{0}', expected printf|snprintf")]
    UnsupportedFunction(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
