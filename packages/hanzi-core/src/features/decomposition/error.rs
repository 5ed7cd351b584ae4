//! Decomposition error types

use thiserror::Error;

/// Why a decomposition sequence could not be fully consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFault {
    /// No symbols at all
    Empty,
    /// An operator ran out of arguments at this symbol position
    Truncated { position: usize },
    /// The walk finished before the end of the sequence
    Trailing { consumed: usize, total: usize },
}

impl std::fmt::Display for SequenceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceFault::Empty => write!(f, "empty sequence"),
            SequenceFault::Truncated { position } => {
                write!(f, "operator missing argument at position {}", position)
            }
            SequenceFault::Trailing { consumed, total } => {
                write!(f, "consumed {} of {} symbols", consumed, total)
            }
        }
    }
}

/// Decomposition graph error type
#[derive(Debug, Error)]
pub enum DecompositionError {
    /// Grapheme is unknown, a leaf, or has no stored record
    #[error("No decomposition for '{0}'")]
    NotFound(char),

    /// Sequence could not be parsed; the graph was left untouched
    #[error("Malformed decomposition for '{grapheme}' ({sequence}): {fault}")]
    MalformedSequence {
        grapheme: char,
        sequence: String,
        fault: SequenceFault,
    },

    /// A different decomposition is already stored for this grapheme
    #[error("Conflicting decomposition for '{grapheme}': stored {stored}, got {incoming}")]
    ConflictingRecord {
        grapheme: char,
        stored: String,
        incoming: String,
    },

    /// IO error while reading an IDS source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decomposition result type
pub type DecompositionResult<T> = Result<T, DecompositionError>;
