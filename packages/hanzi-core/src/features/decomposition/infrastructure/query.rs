//! Read-only queries over a built decomposition graph

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::graph::DecompositionGraph;
use crate::features::decomposition::domain::{Placement, StructuralRecord, Symbol};
use crate::features::decomposition::error::{DecompositionError, DecompositionResult};
use crate::features::decomposition::ports::StructureIndex;
use crate::features::shape::{PathAccumulator, Shape};

/// Accumulates placements into the component's region inside each container
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricAccumulator;

impl PathAccumulator for GeometricAccumulator {
    type Edge = Placement;

    fn shape_of(&self, edge: &Placement) -> Shape {
        edge.shape
    }

    fn combine(&self, container: Shape, part: Shape) -> Shape {
        container.portion(part)
    }
}

impl DecompositionGraph {
    /// Every composite that transitively contains `start`, paired with the
    /// value `acc` folds along the path. Paths are not deduplicated.
    pub fn accumulate_paths<A>(&self, start: char, acc: &A) -> Vec<(char, Shape)>
    where
        A: PathAccumulator<Edge = Placement>,
    {
        let Some(idx) = self.node(start) else {
            return Vec::new();
        };
        let mut on_path = vec![idx];
        self.paths_from(idx, acc, &mut on_path)
            .into_iter()
            .map(|(node, shape)| (self.graph[node].grapheme, shape))
            .collect()
    }

    fn paths_from<A>(
        &self,
        node: NodeIndex,
        acc: &A,
        on_path: &mut Vec<NodeIndex>,
    ) -> Vec<(NodeIndex, Shape)>
    where
        A: PathAccumulator<Edge = Placement>,
    {
        let mut result = Vec::new();
        for edge in self.graph.edges_directed(node, Direction::Outgoing) {
            let succ = edge.target();
            // self-loops (atomic graphemes) and cyclic data
            if on_path.contains(&succ) {
                continue;
            }
            let part = acc.shape_of(edge.weight());
            result.push((succ, part));

            on_path.push(succ);
            for (outer, container) in self.paths_from(succ, acc, on_path) {
                result.push((outer, acc.combine(container, part)));
            }
            on_path.pop();
        }
        result
    }

    /// Every grapheme with a known structure
    pub fn characters(&self) -> Vec<char> {
        self.graph
            .node_indices()
            .filter(|&idx| self.has_incoming(idx))
            .map(|idx| self.graph[idx].grapheme)
            .collect()
    }

    /// Recursively expand a grapheme's decomposition down to leaves.
    ///
    /// Operators are kept verbatim; graphemes without structure (or whose
    /// structure is themselves) stay as-is.
    pub fn expand(&self, grapheme: char) -> DecompositionResult<String> {
        let record = self.decompose(grapheme)?;
        let mut out = String::new();
        let mut stack = vec![grapheme];
        self.expand_into(&record.decomposition, &mut stack, &mut out);
        Ok(out)
    }

    fn expand_into(&self, decomposition: &str, stack: &mut Vec<char>, out: &mut String) {
        for symbol in decomposition.chars().map(Symbol::classify) {
            let c = match symbol {
                Symbol::Operator(op) => {
                    out.push(op.as_char());
                    continue;
                }
                Symbol::Grapheme(c) => c,
            };
            match self.decompose(c) {
                Ok(record) if record.decomposition != c.to_string() && !stack.contains(&c) => {
                    stack.push(c);
                    self.expand_into(&record.decomposition, stack, out);
                    stack.pop();
                }
                _ => out.push(c),
            }
        }
    }
}

impl StructureIndex for DecompositionGraph {
    fn contains(&self, grapheme: char) -> bool {
        self.node(grapheme)
            .map(|idx| self.has_incoming(idx))
            .unwrap_or(false)
    }

    fn decompose(&self, grapheme: char) -> DecompositionResult<&StructuralRecord> {
        let idx = self
            .node(grapheme)
            .ok_or(DecompositionError::NotFound(grapheme))?;
        if !self.has_incoming(idx) {
            return Err(DecompositionError::NotFound(grapheme));
        }
        self.graph[idx]
            .record
            .as_ref()
            .ok_or(DecompositionError::NotFound(grapheme))
    }

    fn components_of(&self, grapheme: char) -> Vec<(char, Shape)> {
        self.accumulate_paths(grapheme, &GeometricAccumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shape::{BOTTOM_HALF, LEFT_HALF, RIGHT_HALF};

    fn graph(records: &[(char, &str)]) -> DecompositionGraph {
        let mut g = DecompositionGraph::new();
        for (c, d) in records {
            g.insert(StructuralRecord::new(*c, *d)).unwrap();
        }
        g
    }

    #[test]
    fn test_contains_and_decompose() {
        let g = graph(&[('你', "⿰亻尔")]);
        assert!(g.contains('你'));
        assert_eq!(g.decompose('你').unwrap().decomposition, "⿰亻尔");

        // leaves exist as nodes but are never composite
        assert!(!g.contains('亻'));
        assert!(matches!(
            g.decompose('亻'),
            Err(DecompositionError::NotFound('亻'))
        ));
        assert!(!g.contains('a'));
        assert!(g.decompose('a').is_err());
    }

    #[test]
    fn test_components_of_is_transitive_with_geometry() {
        // 尔 on the right of 你, 你 at the bottom of a made-up 㐵
        let g = graph(&[('你', "⿰亻尔"), ('㐵', "⿱亠你")]);
        let found = g.components_of('尔');

        assert_eq!(found.len(), 2);
        let (c, direct) = found[0];
        assert_eq!(c, '你');
        assert_eq!(direct, RIGHT_HALF);
        let (c, nested) = found[1];
        assert_eq!(c, '㐵');
        assert!(nested.approx_eq(BOTTOM_HALF.portion(RIGHT_HALF), 1e-12));

        assert!(g.components_of('㐵').is_empty());
        assert!(g.components_of('x').is_empty());
    }

    #[test]
    fn test_duplicate_paths_are_kept() {
        // 从 = ⿰人人 reaches 从 twice
        let g = graph(&[('从', "⿰人人")]);
        let found = g.components_of('人');
        assert_eq!(found.len(), 2);
        assert!(found.contains(&('从', LEFT_HALF)));
        assert!(found.contains(&('从', RIGHT_HALF)));
    }

    #[test]
    fn test_self_loop_is_skipped() {
        let g = graph(&[('一', "一"), ('二', "⿱一一")]);
        assert!(g.contains('一'));
        let found: Vec<char> = g.components_of('一').into_iter().map(|(c, _)| c).collect();
        assert_eq!(found, vec!['二', '二']);
    }

    #[test]
    fn test_characters() {
        let g = graph(&[('你', "⿰亻尔"), ('一', "一")]);
        let mut chars = g.characters();
        chars.sort();
        assert_eq!(chars, vec!['一', '你']);
    }

    #[test]
    fn test_expand() {
        let g = graph(&[('尔', "⿱𠂊小"), ('你', "⿰亻尔"), ('一', "一")]);
        assert_eq!(g.expand('你').unwrap(), "⿰亻⿱𠂊小");
        assert_eq!(g.expand('一').unwrap(), "一");
        assert!(g.expand('亻').is_err());
    }
}
