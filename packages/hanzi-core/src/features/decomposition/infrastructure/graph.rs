//! Decomposition graph with petgraph
//!
//! Directed graph where:
//! - Nodes are graphemes (interned to `NodeIndex`)
//! - Edges run component → composite and carry a `Placement`
//!
//! So for 你 = ⿰亻尔 the graph holds 亻 → 你 and 尔 → 你.

use ahash::AHashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::debug;

use super::sequence::plan_edges;
use crate::features::decomposition::domain::{Placement, StructuralRecord, Symbol};
use crate::features::decomposition::error::{DecompositionError, DecompositionResult};

/// Graph node: a grapheme and, for composites, its stored record
#[derive(Debug, Clone)]
pub struct GraphemeNode {
    pub grapheme: char,
    pub record: Option<StructuralRecord>,
}

/// Result of a successful insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Edges committed and record stored
    Inserted { edges: usize },
    /// Identical record already present
    Unchanged,
}

#[derive(Debug, Default)]
pub struct DecompositionGraph {
    pub(super) graph: DiGraph<GraphemeNode, Placement>,

    /// Grapheme → node index
    pub(super) index: AHashMap<char, NodeIndex>,
}

impl DecompositionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a composite and its component edges.
    ///
    /// The sequence is planned first; nothing is written unless it parses
    /// completely.
    pub fn insert(&mut self, record: StructuralRecord) -> DecompositionResult<InsertOutcome> {
        if let Some(stored) = self.stored_record(record.grapheme) {
            if stored == &record {
                return Ok(InsertOutcome::Unchanged);
            }
            return Err(DecompositionError::ConflictingRecord {
                grapheme: record.grapheme,
                stored: stored.decomposition.clone(),
                incoming: record.decomposition,
            });
        }

        let symbols: Vec<Symbol> = record.symbols().collect();
        let plan = plan_edges(&symbols).map_err(|fault| DecompositionError::MalformedSequence {
            grapheme: record.grapheme,
            sequence: record.decomposition.clone(),
            fault,
        })?;

        let composite = self.intern(record.grapheme);
        for edge in &plan {
            let component = self.intern(edge.component);
            self.graph.add_edge(
                component,
                composite,
                Placement {
                    shape: edge.shape,
                    parent: composite,
                },
            );
        }

        debug!(
            "inserted {} with {} component edges",
            record.grapheme,
            plan.len()
        );
        self.graph[composite].record = Some(record);
        Ok(InsertOutcome::Inserted { edges: plan.len() })
    }

    pub(super) fn node(&self, grapheme: char) -> Option<NodeIndex> {
        self.index.get(&grapheme).copied()
    }

    pub(super) fn has_incoming(&self, idx: NodeIndex) -> bool {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
            .is_some()
    }

    fn stored_record(&self, grapheme: char) -> Option<&StructuralRecord> {
        self.node(grapheme)
            .and_then(|idx| self.graph[idx].record.as_ref())
    }

    fn intern(&mut self, grapheme: char) -> NodeIndex {
        if let Some(&idx) = self.index.get(&grapheme) {
            return idx;
        }
        let idx = self.graph.add_node(GraphemeNode {
            grapheme,
            record: None,
        });
        self.index.insert(grapheme, idx);
        idx
    }

    /// Number of graphemes known to the graph (composites and leaves)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of component edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_adds_component_edges() {
        let mut graph = DecompositionGraph::new();
        let outcome = graph.insert(StructuralRecord::new('你', "⿰亻尔")).unwrap();

        assert_eq!(outcome, InsertOutcome::Inserted { edges: 2 });
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let ni = graph.node('你').unwrap();
        let edge = graph.graph.edges_directed(ni, Direction::Incoming).next();
        assert_eq!(edge.map(|e| e.weight().parent), Some(ni));
    }

    #[test]
    fn test_identical_reinsert_is_noop() {
        let mut graph = DecompositionGraph::new();
        graph.insert(StructuralRecord::new('你', "⿰亻尔")).unwrap();
        let outcome = graph.insert(StructuralRecord::new('你', "⿰亻尔")).unwrap();

        assert_eq!(outcome, InsertOutcome::Unchanged);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_conflicting_reinsert_is_rejected() {
        let mut graph = DecompositionGraph::new();
        graph.insert(StructuralRecord::new('你', "⿰亻尔")).unwrap();
        let err = graph
            .insert(StructuralRecord::new('你', "⿱亻尔"))
            .unwrap_err();

        assert!(matches!(err, DecompositionError::ConflictingRecord { .. }));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.stored_record('你').map(|r| r.decomposition.as_str()),
            Some("⿰亻尔")
        );
    }

    #[test]
    fn test_failed_insert_leaves_graph_untouched() {
        let mut graph = DecompositionGraph::new();
        let err = graph
            .insert(StructuralRecord::new('好', "⿰女"))
            .unwrap_err();

        assert!(matches!(err, DecompositionError::MalformedSequence { .. }));
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
