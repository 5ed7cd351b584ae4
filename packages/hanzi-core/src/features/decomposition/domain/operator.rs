//! Ideographic Description Characters (U+2FF0..=U+2FFB)
//!
//! Each operator has a fixed arity and a static table giving the sub-region
//! of every argument relative to the operator's own region.

use crate::features::shape::{Shape, BOTTOM_HALF, LEFT_HALF, RIGHT_HALF, TOP_HALF, UNIT_SQUARE};

/// Spatial composition operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// ⿰
    LeftToRight,
    /// ⿱
    AboveToBelow,
    /// ⿲
    LeftToMiddleAndRight,
    /// ⿳
    AboveToMiddleAndBelow,
    /// ⿴
    FullSurround,
    /// ⿵
    SurroundFromAbove,
    /// ⿶
    SurroundFromBelow,
    /// ⿷
    SurroundFromLeft,
    /// ⿸
    SurroundFromUpperLeft,
    /// ⿹
    SurroundFromUpperRight,
    /// ⿺
    SurroundFromLowerLeft,
    /// ⿻
    Overlaid,
}

const LEFT_TO_RIGHT: [Shape; 2] = [LEFT_HALF, RIGHT_HALF];
const ABOVE_TO_BELOW: [Shape; 2] = [TOP_HALF, BOTTOM_HALF];
const LEFT_TO_MIDDLE_AND_RIGHT: [Shape; 3] = [
    Shape::new(0.33, 1.0, 0.0, 0.0),
    Shape::new(0.33, 1.0, 0.33, 0.0),
    Shape::new(0.33, 1.0, 0.66, 0.0),
];
const ABOVE_TO_MIDDLE_AND_BELOW: [Shape; 3] = [
    Shape::new(1.0, 0.33, 0.0, 0.0),
    Shape::new(1.0, 0.33, 0.0, 0.33),
    Shape::new(1.0, 0.33, 0.0, 0.66),
];
// Enclosed parts of the surround operators. The enclosing part always
// covers the full square.
const FULL_SURROUND: [Shape; 2] = [UNIT_SQUARE, Shape::new(0.5, 0.5, 0.25, 0.25)];
const SURROUND_FROM_ABOVE: [Shape; 2] = [UNIT_SQUARE, Shape::new(0.5, 0.75, 0.25, 0.25)];
const SURROUND_FROM_BELOW: [Shape; 2] = [UNIT_SQUARE, Shape::new(0.5, 0.75, 0.25, 0.0)];
const SURROUND_FROM_LEFT: [Shape; 2] = [UNIT_SQUARE, Shape::new(0.75, 0.5, 0.25, 0.25)];
const SURROUND_FROM_UPPER_LEFT: [Shape; 2] = [UNIT_SQUARE, Shape::new(0.75, 0.75, 0.25, 0.25)];
const SURROUND_FROM_UPPER_RIGHT: [Shape; 2] = [UNIT_SQUARE, Shape::new(0.75, 0.75, 0.0, 0.25)];
const SURROUND_FROM_LOWER_LEFT: [Shape; 2] = [UNIT_SQUARE, Shape::new(0.75, 0.75, 0.25, 0.0)];
// Both parts are full size; placement information is meaningless here.
const OVERLAID: [Shape; 2] = [UNIT_SQUARE, UNIT_SQUARE];

impl Operator {
    pub const ALL: [Operator; 12] = [
        Operator::LeftToRight,
        Operator::AboveToBelow,
        Operator::LeftToMiddleAndRight,
        Operator::AboveToMiddleAndBelow,
        Operator::FullSurround,
        Operator::SurroundFromAbove,
        Operator::SurroundFromBelow,
        Operator::SurroundFromLeft,
        Operator::SurroundFromUpperLeft,
        Operator::SurroundFromUpperRight,
        Operator::SurroundFromLowerLeft,
        Operator::Overlaid,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '⿰' => Some(Self::LeftToRight),
            '⿱' => Some(Self::AboveToBelow),
            '⿲' => Some(Self::LeftToMiddleAndRight),
            '⿳' => Some(Self::AboveToMiddleAndBelow),
            '⿴' => Some(Self::FullSurround),
            '⿵' => Some(Self::SurroundFromAbove),
            '⿶' => Some(Self::SurroundFromBelow),
            '⿷' => Some(Self::SurroundFromLeft),
            '⿸' => Some(Self::SurroundFromUpperLeft),
            '⿹' => Some(Self::SurroundFromUpperRight),
            '⿺' => Some(Self::SurroundFromLowerLeft),
            '⿻' => Some(Self::Overlaid),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::LeftToRight => '⿰',
            Self::AboveToBelow => '⿱',
            Self::LeftToMiddleAndRight => '⿲',
            Self::AboveToMiddleAndBelow => '⿳',
            Self::FullSurround => '⿴',
            Self::SurroundFromAbove => '⿵',
            Self::SurroundFromBelow => '⿶',
            Self::SurroundFromLeft => '⿷',
            Self::SurroundFromUpperLeft => '⿸',
            Self::SurroundFromUpperRight => '⿹',
            Self::SurroundFromLowerLeft => '⿺',
            Self::Overlaid => '⿻',
        }
    }

    pub fn is_operator(c: char) -> bool {
        Self::from_char(c).is_some()
    }

    /// Argument regions, relative to the operator's own region
    pub fn regions(self) -> &'static [Shape] {
        match self {
            Self::LeftToRight => &LEFT_TO_RIGHT,
            Self::AboveToBelow => &ABOVE_TO_BELOW,
            Self::LeftToMiddleAndRight => &LEFT_TO_MIDDLE_AND_RIGHT,
            Self::AboveToMiddleAndBelow => &ABOVE_TO_MIDDLE_AND_BELOW,
            Self::FullSurround => &FULL_SURROUND,
            Self::SurroundFromAbove => &SURROUND_FROM_ABOVE,
            Self::SurroundFromBelow => &SURROUND_FROM_BELOW,
            Self::SurroundFromLeft => &SURROUND_FROM_LEFT,
            Self::SurroundFromUpperLeft => &SURROUND_FROM_UPPER_LEFT,
            Self::SurroundFromUpperRight => &SURROUND_FROM_UPPER_RIGHT,
            Self::SurroundFromLowerLeft => &SURROUND_FROM_LOWER_LEFT,
            Self::Overlaid => &OVERLAID,
        }
    }

    pub fn arity(self) -> usize {
        self.regions().len()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
