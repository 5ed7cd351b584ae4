//! Decomposition sequence planner
//!
//! Walks a prefix-notation IDS and produces the component edges it implies,
//! without touching any graph. The caller commits the plan only if the whole
//! sequence was consumed.

use crate::features::decomposition::domain::Symbol;
use crate::features::decomposition::error::SequenceFault;
use crate::features::shape::{Shape, UNIT_SQUARE};

/// Edge to be committed: `component` sits at `shape` inside the composite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingEdge {
    pub component: char,
    pub shape: Shape,
}

/// Plan all edges of a decomposition relative to the unit square.
pub fn plan_edges(symbols: &[Symbol]) -> Result<Vec<PendingEdge>, SequenceFault> {
    if symbols.is_empty() {
        return Err(SequenceFault::Empty);
    }

    let (consumed, edges) = walk(symbols, 0, UNIT_SQUARE)?;
    if consumed < symbols.len() {
        return Err(SequenceFault::Trailing {
            consumed,
            total: symbols.len(),
        });
    }
    Ok(edges)
}

/// Consume one complete term starting at `pos`.
///
/// Returns the number of symbols consumed and the edges of that term.
fn walk(
    symbols: &[Symbol],
    pos: usize,
    shape: Shape,
) -> Result<(usize, Vec<PendingEdge>), SequenceFault> {
    let head = symbols
        .get(pos)
        .ok_or(SequenceFault::Truncated { position: pos })?;

    match head {
        Symbol::Grapheme(c) => Ok((
            1,
            vec![PendingEdge {
                component: *c,
                shape,
            }],
        )),
        Symbol::Operator(op) => {
            let mut consumed = 1;
            let mut edges = Vec::new();
            for region in op.regions() {
                let (n, sub) = walk(symbols, pos + consumed, shape.portion(*region))?;
                consumed += n;
                edges.extend(sub);
            }
            Ok((consumed, edges))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shape::{BOTTOM_HALF, LEFT_HALF, RIGHT_HALF};

    fn symbols(s: &str) -> Vec<Symbol> {
        s.chars().map(Symbol::classify).collect()
    }

    #[test]
    fn test_single_operator() {
        let edges = plan_edges(&symbols("⿰亻尔")).unwrap();
        assert_eq!(
            edges,
            vec![
                PendingEdge {
                    component: '亻',
                    shape: LEFT_HALF
                },
                PendingEdge {
                    component: '尔',
                    shape: RIGHT_HALF
                },
            ]
        );
    }

    #[test]
    fn test_nested_operators_compose_shapes() {
        // 你 drawn as ⿱ with the bottom half split left/right
        let edges = plan_edges(&symbols("⿱人⿰亻尔")).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].component, '尔');
        assert!(edges[2]
            .shape
            .approx_eq(BOTTOM_HALF.portion(RIGHT_HALF), 1e-12));
    }

    #[test]
    fn test_atomic_self_reference() {
        let edges = plan_edges(&symbols("一")).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].shape, UNIT_SQUARE);
    }

    #[test]
    fn test_faults() {
        assert_eq!(plan_edges(&[]), Err(SequenceFault::Empty));
        assert_eq!(
            plan_edges(&symbols("⿰亻")),
            Err(SequenceFault::Truncated { position: 2 })
        );
        assert_eq!(
            plan_edges(&symbols("亻尔")),
            Err(SequenceFault::Trailing {
                consumed: 1,
                total: 2
            })
        );
    }
}
