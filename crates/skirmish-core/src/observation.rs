//! A single scanned snapshot of the opponent.

use serde::{Deserialize, Serialize};

use crate::types::{ArenaBounds, Point};

/// One observation of the foe, immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Where the foe was seen, pinned to the arena bounds.
    pub position: Point,
    /// Body heading in degrees (0 = North, clockwise).
    pub heading: f64,
    /// Signed speed in units per turn; negative means reversing.
    pub speed: f64,
    /// Remaining energy at scan time; drops reveal foe gunfire.
    pub energy: f64,
    /// Turn the scan landed on.
    pub turn: u64,
}

impl Observation {
    pub fn new(
        position: Point,
        heading: f64,
        speed: f64,
        energy: f64,
        turn: u64,
        bounds: &ArenaBounds,
    ) -> Self {
        Self {
            position: bounds.clamp(position),
            heading,
            speed,
            energy,
            turn,
        }
    }

    /// Turns elapsed since this observation was taken.
    pub fn age(&self, current_turn: u64) -> f64 {
        current_turn.saturating_sub(self.turn) as f64
    }
}
