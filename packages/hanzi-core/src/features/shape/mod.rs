//! Shape Algebra
//!
//! Rectangular sub-regions of the unit square and their composition along
//! decomposition paths. No dependencies on the rest of the crate.

pub mod accumulator;
pub mod domain;

pub use accumulator::PathAccumulator;
pub use domain::{Shape, BOTTOM_HALF, LEFT_HALF, RIGHT_HALF, TOP_HALF, UNIT_SQUARE};
