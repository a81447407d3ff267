//! Error types for kargs operations.
//!
//! All errors are explicit and typed - no panics allowed. Every failure is
//! terminal for the run; retry policy belongs to the caller.

use thiserror::Error;

/// Result type alias for kargs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all kargs operations.
#[derive(Debug, Error)]
pub enum Error {
    // External tool errors
    #[error("grubby not found in PATH: {reason}")]
    GrubbyNotFound { reason: String },

    #[error("grubby {operation} failed with status {status}: {stderr}")]
    GrubbyFailed {
        operation: String,
        status: i32,
        stdout: String,
        stderr: String,
    },

    // Report parser errors
    #[error("malformed grubby report: args line missing closing quote: {line}")]
    MalformedReport { line: String },

    #[error("grubby reported no boot entries for kernel path: {kernel_path}")]
    NoEntries { kernel_path: String },

    // Input errors
    #[error("no kernel arguments given")]
    EmptyArgs,

    // Generic I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a grubby-not-found error.
    pub fn grubby_not_found(reason: impl Into<String>) -> Self {
        Self::GrubbyNotFound {
            reason: reason.into(),
        }
    }

    /// Create a grubby command failure from a finished process.
    pub fn grubby_failed(
        operation: impl Into<String>,
        status: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::GrubbyFailed {
            operation: operation.into(),
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}
