use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequencerError {
    #[error("dependency cycle among {} units: {}", .members.len(), .members.join(", "))]
    Cycle { members: Vec<String> },
}

pub type SequencerResult<T> = Result<T, SequencerError>;
