//! Ready-queue ordering for the topological sort
//!
//! Units with a priority come first, lowest value first, compared with
//! `f64::total_cmp`. Units without one follow. Ties fall back to the unit
//! string, then to the node id.

use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

#[derive(Debug, Clone, Copy)]
pub struct SortKey<'g> {
    pub priority: Option<f64>,
    pub unit: &'g str,
    pub node: NodeIndex,
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_priority = match (self.priority, other.priority) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_priority
            .then_with(|| self.unit.cmp(other.unit))
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey<'_> {}
