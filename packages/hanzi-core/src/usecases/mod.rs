//! Usecase Layer - startup construction and the two study operations
//!
//! `StudyEngine` loads the static data once and lends it to classifiers and
//! sequencers. Callers own the engine; there is no global state.

pub mod study_engine;

pub use study_engine::StudyEngine;
