//! Events emitted during a turn, drained into each snapshot.

use serde::{Deserialize, Serialize};

/// Terminal outcome of a fired shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// One noteworthy thing that happened during a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaEvent {
    /// A shot left the gun.
    ShotFired {
        shot_id: u64,
        power: f64,
        /// Label of the predictor that produced the aim point.
        predictor: String,
    },
    /// A shot's outcome came back.
    ShotResolved { shot_id: u64, outcome: ShotOutcome },
    /// The foe's energy dropped by a firing-range amount that our own
    /// recorded hits do not explain — the foe just fired.
    FoeGunFlash { energy_drop: f64 },
}
