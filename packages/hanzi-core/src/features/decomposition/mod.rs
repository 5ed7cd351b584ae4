// Decomposition - IDS Graph Builder + Query Engine
//
// Parses ideographic description sequences into composition facts and keeps
// them in an immutable petgraph DiGraph (component → composite).
//
// ## Architecture
// - Domain: Operator table, StructuralRecord, Placement (pure)
// - Infrastructure: line parser, sequence planner, graph + queries
// - Application: builder that streams an IDS file into a graph
// - Ports: `StructureIndex`, the read-only seam used by classifier/sequencer

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::{BuildReport, DecompositionGraphBuilder};
pub use domain::{Operator, Placement, StructuralRecord, Symbol};
pub use error::{DecompositionError, DecompositionResult, SequenceFault};
pub use infrastructure::{parse_line, DecompositionGraph, InsertOutcome, ParsedLine, Rejection};
pub use ports::StructureIndex;
