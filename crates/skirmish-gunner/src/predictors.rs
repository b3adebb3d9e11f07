//! Movement predictors — interchangeable models of where the foe will be.
//!
//! Each variant is a strategy from (observation log, lookahead turns) to a
//! predicted point. Predictions are pinned to the arena bounds the same way
//! real movement is.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::MIN_CIRCULAR_TURN_RATE;
use skirmish_core::geometry::{heading_to, normalize_heading, shift_by};
use skirmish_core::observation::Observation;
use skirmish_core::types::{ArenaBounds, Point};

use crate::log::ObservationLog;

/// Everything a predictor may look at for one prediction.
pub struct PredictorContext<'a> {
    pub log: &'a ObservationLog,
    pub current_turn: u64,
    pub bounds: ArenaBounds,
    pub rng: &'a mut ChaCha8Rng,
}

/// One interchangeable foe-movement model.
pub trait Predictor {
    /// Predict the foe's position `lookahead_turns` from now.
    ///
    /// With an empty log there is nothing to extrapolate; predictors fall
    /// back to the arena center (callers normally gate on a non-empty log).
    fn predict(&self, ctx: &mut PredictorContext<'_>, lookahead_turns: f64) -> Point;

    /// Human-readable label for diagnostics and selection reporting.
    fn label(&self) -> String;
}

/// Turns of foe travel covered by a prediction: observation age plus
/// lookahead, floored at zero so a stale-free prediction never runs the
/// model backwards.
fn travel_turns(obs: &Observation, current_turn: u64, lookahead_turns: f64) -> f64 {
    (obs.age(current_turn) + lookahead_turns).max(0.0)
}

/// Project straight along the observed heading at the given signed speed.
fn project_along_heading(
    obs: &Observation,
    speed: f64,
    ctx: &PredictorContext<'_>,
    lookahead_turns: f64,
) -> Point {
    let traveled = travel_turns(obs, ctx.current_turn, lookahead_turns) * speed;
    shift_by(obs.position, obs.heading, traveled, &ctx.bounds)
}

/// Constant heading and speed extrapolation from the last observation.
pub struct Linear;

impl Predictor for Linear {
    fn predict(&self, ctx: &mut PredictorContext<'_>, lookahead_turns: f64) -> Point {
        let Some(last) = ctx.log.last() else {
            return ctx.bounds.center();
        };
        project_along_heading(last, last.speed, ctx, lookahead_turns)
    }

    fn label(&self) -> String {
        "Linear".to_string()
    }
}

/// Linear extrapolation with a pinned speed magnitude.
///
/// Trusts the observed direction but not the noisy speed reading; a speed
/// of zero models a stationary opponent.
pub struct FixedVelocity {
    pub speed: f64,
}

impl Predictor for FixedVelocity {
    fn predict(&self, ctx: &mut PredictorContext<'_>, lookahead_turns: f64) -> Point {
        let Some(last) = ctx.log.last() else {
            return ctx.bounds.center();
        };
        let sign = if last.speed == 0.0 {
            0.0
        } else {
            last.speed.signum()
        };
        project_along_heading(last, self.speed * sign, ctx, lookahead_turns)
    }

    fn label(&self) -> String {
        format!("Fixed velocity ({})", self.speed)
    }
}

/// Uniform sample within a disk growing around the last known position.
///
/// Deliberately non-deterministic: models "no exploitable pattern" and
/// keeps our own aim from being perfectly exploitable in return.
pub struct RandomRadius {
    /// Disk growth per turn since the observation.
    pub expansion_rate: f64,
}

impl Predictor for RandomRadius {
    fn predict(&self, ctx: &mut PredictorContext<'_>, lookahead_turns: f64) -> Point {
        let Some(last) = ctx.log.last() else {
            return ctx.bounds.center();
        };
        let max_radius = travel_turns(last, ctx.current_turn, lookahead_turns) * self.expansion_rate;
        let heading = ctx.rng.gen_range(0.0..360.0);
        let distance = if max_radius > 0.0 {
            ctx.rng.gen_range(0.0..max_radius)
        } else {
            0.0
        };
        shift_by(last.position, heading, distance, &ctx.bounds)
    }

    fn label(&self) -> String {
        format!("Random radius ({})", self.expansion_rate)
    }
}

/// Circular-arc extrapolation fitted to the last two observations.
pub struct Circular;

impl Predictor for Circular {
    fn predict(&self, ctx: &mut PredictorContext<'_>, lookahead_turns: f64) -> Point {
        let Some((prev, last)) = ctx.log.last_two() else {
            // A single observation cannot pin down a turn rate.
            return match ctx.log.last() {
                Some(obs) => obs.position,
                None => ctx.bounds.center(),
            };
        };

        let dt = (last.turn - prev.turn) as f64;
        let turn_rate = normalize_heading(last.heading - prev.heading) / dt;
        let speed = (last.speed + prev.speed) / 2.0;

        if turn_rate.abs() < MIN_CIRCULAR_TURN_RATE {
            // Near-straight motion: the arc radius is numerically unstable,
            // so extrapolate linearly at the averaged speed instead.
            return project_along_heading(last, speed, ctx, lookahead_turns);
        }

        // Circumference = speed per turn × turns per revolution.
        let radius = (speed * 360.0 / turn_rate.abs()) / std::f64::consts::TAU;
        let center = shift_by(
            last.position,
            last.heading + 90.0 * turn_rate.signum(),
            radius,
            &ctx.bounds,
        );

        // Degrees swept around the center per turn, with the turn direction.
        let omega = (speed / radius).to_degrees() * turn_rate.signum();
        let angle = heading_to(center, last.position)
            + omega * travel_turns(last, ctx.current_turn, lookahead_turns);
        shift_by(center, angle, radius, &ctx.bounds)
    }

    fn label(&self) -> String {
        "Circular".to_string()
    }
}

/// The standard predictor roster; registration order is the selection
/// tie-break order.
pub fn default_roster() -> Vec<Box<dyn Predictor>> {
    use skirmish_core::constants::MAX_BOT_SPEED;

    vec![
        Box::new(Linear),
        Box::new(Circular),
        Box::new(FixedVelocity {
            speed: MAX_BOT_SPEED,
        }),
        Box::new(FixedVelocity { speed: 0.0 }),
        Box::new(RandomRadius {
            expansion_rate: MAX_BOT_SPEED,
        }),
    ]
}
