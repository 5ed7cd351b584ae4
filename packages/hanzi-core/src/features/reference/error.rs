//! Reference data error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Tier outside 1..=6
    #[error("Invalid tier {0}: expected 1..=6")]
    InvalidTier(u8),

    /// A CSV row did not have the expected shape
    #[error("Malformed row at {path}:{line}: {reason}")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReferenceResult<T> = Result<T, ReferenceError>;
