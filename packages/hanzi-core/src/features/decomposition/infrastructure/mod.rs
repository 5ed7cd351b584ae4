//! Decomposition infrastructure: parser, planner, graph and queries

mod graph;
mod parser;
mod query;
mod sequence;

pub use graph::{DecompositionGraph, GraphemeNode, InsertOutcome};
pub use parser::{parse_line, ParsedLine, Rejection};
pub use query::GeometricAccumulator;
pub use sequence::{plan_edges, PendingEdge};
