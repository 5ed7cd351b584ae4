//! Path accumulation capability
//!
//! Reachability queries fold a per-edge value along every traversed path.
//! The fold is expressed as two operations so the traversal stays agnostic of
//! what is being accumulated.

use super::domain::Shape;

/// Folds edge payloads into a single shape along a path.
pub trait PathAccumulator {
    /// Edge payload type of the graph being walked
    type Edge;

    /// Shape contributed by a single edge
    fn shape_of(&self, edge: &Self::Edge) -> Shape;

    /// Combine a `container` shape (later on the path) with the shape of the
    /// `part` it encloses (earlier on the path).
    fn combine(&self, container: Shape, part: Shape) -> Shape;
}
