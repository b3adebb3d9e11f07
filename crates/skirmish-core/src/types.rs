//! Fundamental geometric types for the arena.

use serde::{Deserialize, Serialize};

use crate::constants::BOT_SIZE;

/// 2D position in arena space (abstract units).
/// x = East, y = North. Headings are degrees, 0 = North, clockwise.
pub type Point = glam::DVec2;

/// Axis-aligned rectangle that bot centers are confined to.
///
/// Built from the battlefield dimensions inset by half a bot body on each
/// side, so a bot whose center lies inside the bounds never overlaps a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min: Point,
    pub max: Point,
}

impl ArenaBounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Bounds for a battlefield of the given dimensions, inset by half a
    /// bot body on every side.
    pub fn field(width: f64, height: f64) -> Self {
        let half = BOT_SIZE / 2.0;
        Self {
            min: Point::new(half, half),
            max: Point::new(width - half, height - half),
        }
    }

    /// Whether `p` lies inside the bounds (edges inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Pin `p` to the bounds, each axis clamped independently.
    pub fn clamp(&self, p: Point) -> Point {
        p.clamp(self.min, self.max)
    }

    /// Geometric center of the bounds.
    pub fn center(&self) -> Point {
        (self.min + self.max) / 2.0
    }

    /// The same rectangle grown by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: self.min - Point::splat(margin),
            max: self.max + Point::splat(margin),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::field(crate::constants::FIELD_WIDTH, crate::constants::FIELD_HEIGHT)
    }
}
