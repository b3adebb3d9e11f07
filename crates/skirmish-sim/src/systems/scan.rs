//! Scan system — delivers at most one foe observation per turn.
//!
//! Models a radar lock with configurable reliability: a failed roll leaves
//! the log stale, so the gunner predicts across the gap. Must run before
//! gunnery so a landed scan is visible to the same cycle's predictors.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::events::ArenaEvent;
use skirmish_core::observation::Observation;
use skirmish_core::types::{ArenaBounds, Point};
use skirmish_gunner::TrackingSession;

use crate::components::{BotBody, FoeBot};
use crate::engine::ScoreState;

/// Attempt one scan of the foe and feed it to the session.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &World,
    session: &mut TrackingSession,
    rng: &mut ChaCha8Rng,
    bounds: &ArenaBounds,
    reliability: f64,
    turn: u64,
    events: &mut Vec<ArenaEvent>,
    score: &mut ScoreState,
) {
    if !rng.gen_bool(reliability.clamp(0.0, 1.0)) {
        return;
    }

    let foe = {
        let mut query = world.query::<(&FoeBot, &Point, &BotBody)>();
        query.iter().next().map(|(_, (_, pos, body))| (*pos, *body))
    };
    let Some((position, body)) = foe else {
        return;
    };

    let obs = Observation::new(position, body.heading, body.speed, body.energy, turn, bounds);
    let assessment = session.on_observation(obs);

    if let Some(energy_drop) = assessment.foe_fired {
        score.foe_shots_seen += 1;
        events.push(ArenaEvent::FoeGunFlash { energy_drop });
    }
}
