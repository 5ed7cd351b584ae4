/*
 * Hanzi Core - Structural Knowledge Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Grapheme helpers (CJK ranges, scalar iteration)
 * - features/    : Vertical slices (shape → decomposition → classifier / sequencer)
 * - config/      : Versioned YAML configuration + presets
 * - usecases/    : StudyEngine facade (explicit startup construction)
 *
 * The decomposition graph is built once and shared read-only; classifiers
 * borrow it (and may fan out with Rayon), sequencers own a private
 * per-run dependency graph.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared grapheme utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

/// Usecase layer (StudyEngine)
pub mod usecases;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{CyclePolicy, EngineConfig, Preset};
pub use errors::{HanziError, Result};
pub use features::classifier::{Classifier, Tier};
pub use features::decomposition::{
    BuildReport, DecompositionError, DecompositionGraph, DecompositionGraphBuilder, Operator,
    StructuralRecord, StructureIndex,
};
pub use features::reference::{FrequencyTable, LeveledReference};
pub use features::sequencer::{Sequencer, SequencerError};
pub use features::shape::Shape;
pub use usecases::StudyEngine;
