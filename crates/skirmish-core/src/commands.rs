//! Outbound gun commands handed from the gunner to the environment.
//!
//! Commands are advisory: the environment may refuse or modify them
//! (e.g. the gun heated up or energy ran out between solve and issue),
//! so the gunner never assumes a command was honored.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// One advisory command for the environment's gun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GunCommand {
    /// Swing the gun to bear on a point.
    AimAt { target: Point },
    /// Fire at the given power. The environment assigns the shot identity.
    Fire { power: f64 },
}
