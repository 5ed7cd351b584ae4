//! Decomposition application layer

mod builder;

pub use builder::{BuildReport, DecompositionGraphBuilder};
