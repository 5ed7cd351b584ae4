// Dependency Sequencer
//
// Per-run dependency graph over study units (prerequisite → dependent) and a
// deterministic, priority-aware topological order over it.

mod error;
mod graph;
mod order;

pub use error::{SequencerError, SequencerResult};
pub use graph::Sequencer;
pub use order::SortKey;
