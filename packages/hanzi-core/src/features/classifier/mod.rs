//! Difficulty Classifier
//!
//! Buckets arbitrary words into leveled tiers using the reference
//! vocabularies and, for unknown graphemes, the decomposition graph.

pub mod domain;
pub mod infrastructure;

pub use domain::{Tier, TIER_COUNT};
pub use infrastructure::{Classifier, Partitions, DEFAULT_PARALLEL_THRESHOLD, MAX_PARTITION_LENGTH};
