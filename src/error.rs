//! Error types for benchstat

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a benchstat run
#[derive(Error, Debug)]
pub enum BenchstatError {
    /// Bad or missing flags, unknown delta test, no input files
    #[error("{0}")]
    Usage(String),

    /// Failed to read an input file
    #[error("{}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("encoding JSON output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchstatError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BenchstatError::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for benchstat operations
pub type Result<T> = std::result::Result<T, BenchstatError>;
