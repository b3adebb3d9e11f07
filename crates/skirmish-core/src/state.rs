//! Arena snapshot — the complete observable state after each turn.

use serde::{Deserialize, Serialize};

use crate::events::ArenaEvent;
use crate::types::Point;

/// Everything visible after one turn, suitable for overlays and replay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub turn: u64,
    pub own: BotView,
    pub foe: BotView,
    pub bullets: Vec<BulletView>,
    /// Per-variant diagnostics: label, counters, score, predicted point.
    /// Observational only — never feeds back into the gunner.
    pub predictors: Vec<PredictorView>,
    /// The most recent firing solution, if any shot has been solved.
    pub last_solution: Option<SolutionView>,
    pub events: Vec<ArenaEvent>,
    pub score: ScoreView,
}

/// A bot's visible kinematic state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BotView {
    pub position: Point,
    pub heading: f64,
    pub speed: f64,
    pub energy: f64,
}

/// A bullet in flight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BulletView {
    pub shot_id: u64,
    pub position: Point,
    pub heading: f64,
    pub power: f64,
}

/// Diagnostic view of one predictor variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictorView {
    pub label: String,
    pub hits: u32,
    pub misses: u32,
    /// Laplace-smoothed hit rate used for selection.
    pub score: f64,
    /// Where this variant currently expects the foe to be.
    pub predicted: Point,
}

/// Diagnostic view of the last computed firing solution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolutionView {
    pub aim_point: Point,
    pub power: f64,
    pub predictor: String,
}

/// Running match tallies.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Foe shots inferred from unexplained energy drops.
    pub foe_shots_seen: u32,
}
