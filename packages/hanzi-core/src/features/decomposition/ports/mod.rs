//! Decomposition Ports - Interface Layer (Hexagonal Architecture)
//!
//! The classifier and the sequencer depend on this trait rather than on
//! `DecompositionGraph`, so tests can substitute fakes.
//!
//! # Implementors
//! - `DecompositionGraph` (infrastructure/query.rs)

use crate::features::decomposition::domain::StructuralRecord;
use crate::features::decomposition::error::DecompositionResult;
use crate::features::shape::Shape;

/// Read-only structural lookup over graphemes
pub trait StructureIndex: Send + Sync {
    /// True iff the grapheme has at least one component edge
    fn contains(&self, grapheme: char) -> bool;

    /// Stored decomposition of a composite.
    ///
    /// Fails with `NotFound` for unknown graphemes and leaves.
    fn decompose(&self, grapheme: char) -> DecompositionResult<&StructuralRecord>;

    /// Every composite that transitively uses `grapheme`, with the region it
    /// occupies there. One entry per path.
    fn components_of(&self, grapheme: char) -> Vec<(char, Shape)>;
}
