//! Study-order dependency graph
//!
//! Nodes are study units (words or single graphemes). An edge `a → b` means
//! `a` must be studied before `b`:
//! - a multi-grapheme word depends on each of its graphemes
//! - a single grapheme depends on every component of its decomposition,
//!   expanded recursively

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::{debug, warn};

use super::error::{SequencerError, SequencerResult};
use super::order::SortKey;
use crate::config::CyclePolicy;
use crate::features::decomposition::{StructureIndex, Symbol};
use crate::shared::single_grapheme;

pub struct Sequencer<'a> {
    index: &'a dyn StructureIndex,
    graph: DiGraph<String, ()>,
    unit_to_node: AHashMap<String, NodeIndex>,
    /// Single graphemes whose decomposition has already been walked
    expanded: AHashSet<char>,
    cycle_policy: CyclePolicy,
}

impl<'a> Sequencer<'a> {
    pub fn new(index: &'a dyn StructureIndex) -> Self {
        Self {
            index,
            graph: DiGraph::new(),
            unit_to_node: AHashMap::new(),
            expanded: AHashSet::new(),
            cycle_policy: CyclePolicy::default(),
        }
    }

    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Register a study unit and its prerequisites
    pub fn add(&mut self, word: &str) {
        if word.is_empty() {
            debug!("ignoring empty study unit");
            return;
        }

        let node = self.node(word);
        match single_grapheme(word) {
            Some(grapheme) => self.expand(grapheme, node),
            None => {
                let mut buf = [0u8; 4];
                for c in word.chars() {
                    let part = self.node(c.encode_utf8(&mut buf));
                    self.graph.update_edge(part, node, ());
                }
            }
        }
    }

    pub fn add_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref());
        }
    }

    fn expand(&mut self, grapheme: char, node: NodeIndex) {
        if !self.expanded.insert(grapheme) {
            return;
        }
        let components: Vec<char> = match self.index.decompose(grapheme) {
            Ok(record) => record
                .symbols()
                .filter_map(|s| match s {
                    Symbol::Grapheme(c) if c != grapheme => Some(c),
                    _ => None,
                })
                .collect(),
            Err(_) => return,
        };

        let mut buf = [0u8; 4];
        for component in components {
            let part = self.node(component.encode_utf8(&mut buf));
            self.graph.update_edge(part, node, ());
            self.expand(component, part);
        }
    }

    fn node(&mut self, unit: &str) -> NodeIndex {
        if let Some(&idx) = self.unit_to_node.get(unit) {
            return idx;
        }
        let idx = self.graph.add_node(unit.to_string());
        self.unit_to_node.insert(unit.to_string(), idx);
        idx
    }

    /// Topological order, prerequisites first.
    ///
    /// Among units that are ready at the same time the one with the lowest
    /// priority goes first; units without a priority go last, ties are
    /// broken by the unit string.
    ///
    /// Under `CyclePolicy::AppendUnresolved` a stalled sort releases the
    /// lowest-keyed cycle member whose remaining prerequisites all sit in its
    /// own cycle, then carries on. Only edges inside a cycle are ever broken.
    pub fn get_sorted<F>(&self, priority: F) -> SequencerResult<Vec<String>>
    where
        F: Fn(&str) -> Option<f64>,
    {
        let keys: Vec<SortKey<'_>> = self
            .graph
            .node_indices()
            .map(|node| {
                let unit = self.graph[node].as_str();
                SortKey {
                    priority: priority(unit),
                    unit,
                    node,
                }
            })
            .collect();

        let mut in_degree: Vec<usize> = self
            .graph
            .node_indices()
            .map(|n| self.graph.neighbors_directed(n, Direction::Incoming).count())
            .collect();

        let mut ready: BinaryHeap<Reverse<SortKey<'_>>> = keys
            .iter()
            .filter(|k| in_degree[k.node.index()] == 0)
            .map(|k| Reverse(*k))
            .collect();

        let mut placed = vec![false; keys.len()];
        let mut order = Vec::with_capacity(keys.len());
        let mut components: Option<Vec<usize>> = None;

        loop {
            while let Some(Reverse(key)) = ready.pop() {
                placed[key.node.index()] = true;
                order.push(key.unit.to_string());
                for next in self.graph.neighbors_directed(key.node, Direction::Outgoing) {
                    if placed[next.index()] {
                        continue;
                    }
                    let degree = &mut in_degree[next.index()];
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push(Reverse(keys[next.index()]));
                    }
                }
            }

            if order.len() == keys.len() {
                return Ok(order);
            }

            if components.is_none() {
                for cycle in self.cycles() {
                    warn!("dependency cycle: {}", cycle.join(" → "));
                }
            }
            let mut trapped: Vec<SortKey<'_>> = keys
                .iter()
                .filter(|k| !placed[k.node.index()])
                .copied()
                .collect();
            trapped.sort();

            if self.cycle_policy == CyclePolicy::Reject {
                return Err(cycle_error(&trapped));
            }

            let components = components.get_or_insert_with(|| self.component_ids());
            let released = trapped.iter().copied().find(|k| {
                self.graph
                    .neighbors_directed(k.node, Direction::Incoming)
                    .filter(|p| !placed[p.index()])
                    .all(|p| components[p.index()] == components[k.node.index()])
            });

            match released {
                Some(key) => {
                    warn!("releasing {} to break a dependency cycle", key.unit);
                    in_degree[key.node.index()] = 0;
                    ready.push(Reverse(key));
                }
                None => return Err(cycle_error(&trapped)),
            }
        }
    }

    /// Strongly connected component id per node index
    fn component_ids(&self) -> Vec<usize> {
        let mut ids = vec![0; self.graph.node_count()];
        for (id, scc) in tarjan_scc(&self.graph).into_iter().enumerate() {
            for node in scc {
                ids[node.index()] = id;
            }
        }
        ids
    }

    /// `get_sorted` with no priorities: ready units in string order
    pub fn get_sorted_lexicographic(&self) -> SequencerResult<Vec<String>> {
        self.get_sorted(|_| None)
    }

    /// Strongly connected components with more than one unit, members sorted
    pub fn cycles(&self) -> Vec<Vec<String>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut members: Vec<String> =
                    scc.into_iter().map(|idx| self.graph[idx].clone()).collect();
                members.sort();
                members
            })
            .collect()
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles().is_empty()
    }

    /// Direct prerequisites of `unit`
    pub fn prerequisites_of(&self, unit: &str) -> Vec<String> {
        let Some(&idx) = self.unit_to_node.get(unit) else {
            return Vec::new();
        };
        let mut found: Vec<String> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n].clone())
            .collect();
        found.sort();
        found
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.unit_to_node.contains_key(unit)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn cycle_error(trapped: &[SortKey<'_>]) -> SequencerError {
    SequencerError::Cycle {
        members: trapped.iter().map(|k| k.unit.to_string()).collect(),
    }
}
