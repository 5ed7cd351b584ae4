//! Error types for hanzi-core
//!
//! Each feature owns its error enum; `HanziError` aggregates them for the
//! usecase layer.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::decomposition::DecompositionError;
use crate::features::reference::ReferenceError;
use crate::features::sequencer::SequencerError;

/// Main error type for hanzi-core operations
#[derive(Debug, Error)]
pub enum HanziError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Decomposition graph error
    #[error("Decomposition error: {0}")]
    Decomposition(#[from] DecompositionError),

    /// Reference data (levels, frequencies) error
    #[error("Reference data error: {0}")]
    Reference(#[from] ReferenceError),

    /// Sequencer error
    #[error("Sequencer error: {0}")]
    Sequencer(#[from] SequencerError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for hanzi-core operations
pub type Result<T> = std::result::Result<T, HanziError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition_conversion() {
        let err: HanziError = DecompositionError::NotFound('a').into();
        assert!(matches!(
            err,
            HanziError::Decomposition(DecompositionError::NotFound('a'))
        ));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "ids.txt");
        let err: HanziError = io.into();
        assert!(matches!(err, HanziError::Io(_)));
    }
}
