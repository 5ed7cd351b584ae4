// Decomposition Domain Models
//
// Pure value types: the operator table, parsed symbols, stored records and
// the edge payload. No graph or IO dependencies.

mod operator;

pub use operator::Operator;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::features::shape::Shape;

/// One position of a decomposition sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Operator(Operator),
    Grapheme(char),
}

impl Symbol {
    pub fn classify(c: char) -> Self {
        match Operator::from_char(c) {
            Some(op) => Symbol::Operator(op),
            None => Symbol::Grapheme(c),
        }
    }
}

/// A grapheme together with its validated decomposition sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructuralRecord {
    pub grapheme: char,
    pub decomposition: String,
}

impl StructuralRecord {
    pub fn new(grapheme: char, decomposition: impl Into<String>) -> Self {
        Self {
            grapheme,
            decomposition: decomposition.into(),
        }
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.decomposition.chars().map(Symbol::classify)
    }

    /// Non-operator symbols of the sequence, in order, duplicates kept
    pub fn components(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols().filter_map(|s| match s {
            Symbol::Grapheme(c) => Some(c),
            Symbol::Operator(_) => None,
        })
    }
}

/// Edge payload: where the component sits inside its composite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub shape: Shape,
    /// Interned id of the composite that owns this edge
    pub parent: NodeIndex,
}
