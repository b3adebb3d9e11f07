//! Bot movement: pilot steering for the foe, strafing drive for own bot.
//!
//! All displacement goes through `shift_by`, so bots are pinned to the
//! arena walls rather than bouncing.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::MAX_BOT_SPEED;
use skirmish_core::geometry::{heading_to, normalize_heading, shift_by};
use skirmish_core::types::{ArenaBounds, Point};

use crate::components::{BotBody, FoeBot, OwnBot};
use crate::pilots::{self, PilotArchetype, PilotContext};

/// Steer and move the foe for one turn.
pub fn run_foe(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bounds: &ArenaBounds,
    archetype: PilotArchetype,
) {
    for (_entity, (_foe, pos, body)) in world.query_mut::<(&FoeBot, &mut Point, &mut BotBody)>() {
        let mut ctx = PilotContext {
            position: *pos,
            heading: body.heading,
            speed: body.speed,
            bounds: *bounds,
            rng: &mut *rng,
        };
        let steer = pilots::steer(archetype, &mut ctx);
        body.heading = steer.heading;
        body.speed = steer.speed;
        *pos = shift_by(*pos, body.heading, body.speed, bounds);
    }
}

/// Own-bot drive: one step perpendicular to the foe bearing with a little
/// jitter, choosing whichever direction keeps us nearer the arena center.
pub fn run_own(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bounds: &ArenaBounds,
    foe_position: Point,
) {
    let center = bounds.center();
    for (_entity, (_own, pos, body)) in world.query_mut::<(&OwnBot, &mut Point, &mut BotBody)>() {
        let jitter = rng.gen_range(-20.0..=20.0);
        let heading = normalize_heading(heading_to(*pos, foe_position) + 90.0 + jitter);

        let ahead = shift_by(*pos, heading, MAX_BOT_SPEED, bounds);
        let behind = shift_by(*pos, heading, -MAX_BOT_SPEED, bounds);
        let step = if ahead.distance(center) <= behind.distance(center) {
            MAX_BOT_SPEED
        } else {
            -MAX_BOT_SPEED
        };

        body.heading = heading;
        body.speed = step;
        *pos = shift_by(*pos, heading, step, bounds);
    }
}
