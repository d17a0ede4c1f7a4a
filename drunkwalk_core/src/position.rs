//! Immutable points on the walking plane.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the continuous 2D plane.
///
/// Positions are never mutated; `move_by` returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    coords: Vector2<f64>,
}

impl Position {
    /// Creates a position from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }

    /// The point (0, 0).
    pub fn origin() -> Self {
        Self {
            coords: Vector2::zeros(),
        }
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Returns a new position offset by the given deltas.
    pub fn move_by(&self, delta_x: f64, delta_y: f64) -> Self {
        Self {
            coords: self.coords + Vector2::new(delta_x, delta_y),
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance_from(&self, other: &Position) -> f64 {
        (self.coords - other.coords).norm()
    }

    /// Signed vector pointing from `other` to `self`.
    pub fn displacement_from(&self, other: &Position) -> (f64, f64) {
        let delta = self.coords - other.coords;
        (delta.x, delta.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x(), self.y())
    }
}
