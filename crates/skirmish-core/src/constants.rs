//! Arena physics constants and gunnery tuning parameters.

// --- Battlefield ---

/// Battlefield width in arena units.
pub const FIELD_WIDTH: f64 = 800.0;

/// Battlefield height in arena units.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Bot body width/height; bot centers stay half this away from the walls.
pub const BOT_SIZE: f64 = 36.0;

/// Proximity at which a bullet strikes a bot (half the body size).
pub const BOT_HIT_RADIUS: f64 = BOT_SIZE / 2.0;

// --- Bot kinematics ---

/// Top bot speed, units per turn.
pub const MAX_BOT_SPEED: f64 = 8.0;

/// Maximum body turn per turn, degrees.
pub const MAX_BODY_TURN_DEG: f64 = 10.0;

/// Starting energy for both bots.
pub const MAX_BOT_ENERGY: f64 = 100.0;

// --- Gun ---

/// Weakest legal shot power.
pub const MIN_FIRE_POWER: f64 = 0.1;

/// Strongest legal shot power.
pub const MAX_FIRE_POWER: f64 = 3.0;

/// Heat the gun sheds each turn.
pub const GUN_COOLING_RATE: f64 = 0.1;

/// Gun heat at the start of a match (first shot is possible once it cools).
pub const INITIAL_GUN_HEAT: f64 = 3.0;

// --- Firing solution ---

/// Turns the gun spends settling on target, added to every lookahead.
pub const AIM_TURNS: f64 = 2.0;

/// Distance-to-power constant: power = clamp(POWER_K / distance, min, max).
/// Close targets get fast, strong shots; distant ones weak, long-lived ones.
pub const POWER_K: f64 = 300.0;

/// Stop refining once successive aim points are within this distance.
pub const SOLVER_ACCURACY: f64 = 1.0;

/// Hard cap on refinement iterations; the random-radius predictor is not
/// guaranteed to converge.
pub const SOLVER_MAX_ITERATIONS: usize = 10;

// --- Predictors ---

/// Fitted turn rates below this (degrees per turn) are treated as
/// straight-line motion; the arc radius is numerically unstable there.
pub const MIN_CIRCULAR_TURN_RATE: f64 = 0.01;

// --- Scanning ---

/// Default probability that a scan lands each turn.
pub const DEFAULT_SCAN_RELIABILITY: f64 = 1.0;
