//! Shape domain model

use serde::{Deserialize, Serialize};

/// Rectangular region inside the unit square.
///
/// Offsets are measured from the top-left corner; all four values are
/// fractions of the enclosing square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub width: f64,
    pub height: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

pub const UNIT_SQUARE: Shape = Shape::new(1.0, 1.0, 0.0, 0.0);
pub const LEFT_HALF: Shape = Shape::new(0.5, 1.0, 0.0, 0.0);
pub const RIGHT_HALF: Shape = Shape::new(0.5, 1.0, 0.5, 0.0);
pub const TOP_HALF: Shape = Shape::new(1.0, 0.5, 0.0, 0.0);
pub const BOTTOM_HALF: Shape = Shape::new(1.0, 0.5, 0.0, 0.5);

impl Shape {
    pub const fn new(width: f64, height: f64, x_offset: f64, y_offset: f64) -> Self {
        Self {
            width,
            height,
            x_offset,
            y_offset,
        }
    }

    /// Map `child`, expressed relative to `self`, into `self`'s coordinate space.
    ///
    /// Sizes multiply; the child's offset is scaled by the parent's size and
    /// translated by the parent's offset.
    pub fn portion(self, child: Shape) -> Shape {
        Shape {
            width: self.width * child.width,
            height: self.height * child.height,
            x_offset: self.x_offset + child.x_offset * self.width,
            y_offset: self.y_offset + child.y_offset * self.height,
        }
    }

    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// Component-wise comparison within `epsilon`
    pub fn approx_eq(self, other: Shape, epsilon: f64) -> bool {
        (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
            && (self.x_offset - other.x_offset).abs() <= epsilon
            && (self.y_offset - other.y_offset).abs() <= epsilon
    }
}

impl Default for Shape {
    fn default() -> Self {
        UNIT_SQUARE
    }
}
