pub mod classifier;
pub mod partitions;

pub use classifier::{Classifier, DEFAULT_PARALLEL_THRESHOLD, MAX_PARTITION_LENGTH};
pub use partitions::Partitions;
