//! Feature modules
//!
//! Leaves first: shape → decomposition → (classifier, sequencer).
//! `reference` holds the static leveled vocabularies and frequency data.

pub mod classifier;
pub mod decomposition;
pub mod reference;
pub mod sequencer;
pub mod shape;
