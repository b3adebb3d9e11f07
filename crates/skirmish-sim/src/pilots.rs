//! Scripted foe pilots.
//!
//! Pure steering functions keyed by archetype: each evaluation produces the
//! next heading and speed from plain data. Integration and wall pinning
//! happen in the movement system. Each archetype inhabits the home regime
//! of one predictor family, so a match against it exercises that family.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::{MAX_BODY_TURN_DEG, MAX_BOT_SPEED};
use skirmish_core::geometry::{normalize_heading, shift_by};
use skirmish_core::types::{ArenaBounds, Point};

/// Turn rate flown by the orbiting pilot, degrees per turn.
const ORBITER_TURN_RATE: f64 = 6.0;

/// Cruise speed for the orbiting pilot.
const ORBITER_SPEED: f64 = 6.0;

/// Foe behavior archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PilotArchetype {
    /// Holds position — the stationary-opponent regime.
    Sentry,
    /// Runs straight at top speed, throwing into reverse when pinned
    /// against a wall.
    #[default]
    Strider,
    /// Constant turn rate and speed — circular motion.
    Orbiter,
    /// Random heading jitter at top speed — a drunkard's walk.
    Wanderer,
}

/// Input to one steering evaluation.
pub struct PilotContext<'a> {
    pub position: Point,
    pub heading: f64,
    pub speed: f64,
    pub bounds: ArenaBounds,
    pub rng: &'a mut ChaCha8Rng,
}

/// New heading and speed for the coming turn.
#[derive(Debug, Clone, Copy)]
pub struct Steer {
    pub heading: f64,
    pub speed: f64,
}

/// Evaluate the pilot for one turn.
pub fn steer(archetype: PilotArchetype, ctx: &mut PilotContext<'_>) -> Steer {
    match archetype {
        PilotArchetype::Sentry => Steer {
            heading: ctx.heading,
            speed: 0.0,
        },
        PilotArchetype::Strider => {
            let speed = if ctx.speed == 0.0 {
                MAX_BOT_SPEED
            } else {
                ctx.speed
            };
            let ahead = shift_by(ctx.position, ctx.heading, speed, &ctx.bounds);
            // Pinned against a wall: throw into reverse.
            let speed = if ahead.distance(ctx.position) < speed.abs() * 0.5 {
                -speed
            } else {
                speed
            };
            Steer {
                heading: ctx.heading,
                speed,
            }
        }
        PilotArchetype::Orbiter => Steer {
            heading: normalize_heading(ctx.heading + ORBITER_TURN_RATE),
            speed: ORBITER_SPEED,
        },
        PilotArchetype::Wanderer => {
            let turn = ctx.rng.gen_range(-MAX_BODY_TURN_DEG..=MAX_BODY_TURN_DEG);
            Steer {
                heading: normalize_heading(ctx.heading + turn),
                speed: MAX_BOT_SPEED,
            }
        }
    }
}
