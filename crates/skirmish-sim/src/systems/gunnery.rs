//! Gunnery system — one decision cycle: select, solve, aim, fire.
//!
//! The session's commands are advisory; this system is where the
//! environment may refuse them (gun still hot, not enough energy), in
//! which case no shot identity is assigned and nothing is registered.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::GunCommand;
use skirmish_core::constants::GUN_COOLING_RATE;
use skirmish_core::events::ArenaEvent;
use skirmish_core::geometry::{fire_heat, heading_to};
use skirmish_core::types::{ArenaBounds, Point};
use skirmish_gunner::TrackingSession;

use crate::components::{BotBody, Bullet, Gun, OwnBot};
use crate::engine::ScoreState;

/// Cool the gun by the fixed per-turn rate.
pub fn cool(world: &mut World) {
    for (_entity, gun) in world.query_mut::<&mut Gun>() {
        gun.heat = (gun.heat - GUN_COOLING_RATE).max(0.0);
    }
}

/// Run one decision cycle and apply the resulting commands.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    session: &mut TrackingSession,
    rng: &mut ChaCha8Rng,
    bounds: &ArenaBounds,
    turn: u64,
    next_shot_id: &mut u64,
    events: &mut Vec<ArenaEvent>,
    score: &mut ScoreState,
) {
    let own = {
        let mut query = world.query::<(&OwnBot, &Point, &Gun)>();
        query
            .iter()
            .next()
            .map(|(entity, (_, pos, gun))| (entity, *pos, gun.heat <= 0.0))
    };
    let Some((own_entity, own_position, weapon_ready)) = own else {
        return;
    };

    let Some(solution) = session.decide(turn, own_position, weapon_ready, *bounds, rng) else {
        return;
    };

    let mut fired: Option<f64> = None;
    for command in solution.commands() {
        match command {
            GunCommand::AimAt { target } => {
                if let Ok(mut gun) = world.get::<&mut Gun>(own_entity) {
                    gun.heading = heading_to(own_position, target);
                }
            }
            GunCommand::Fire { power } => {
                let accepted = {
                    let gun = world.get::<&Gun>(own_entity);
                    let body = world.get::<&BotBody>(own_entity);
                    matches!((gun, body), (Ok(g), Ok(b)) if g.heat <= 0.0 && b.energy >= power)
                };
                if !accepted {
                    continue;
                }
                if let Ok(mut gun) = world.get::<&mut Gun>(own_entity) {
                    gun.heat += fire_heat(power);
                }
                if let Ok(mut body) = world.get::<&mut BotBody>(own_entity) {
                    body.energy -= power;
                }
                fired = Some(power);
            }
        }
    }

    if let Some(power) = fired {
        let shot_id = *next_shot_id;
        *next_shot_id += 1;

        let heading = {
            let gun = world.get::<&Gun>(own_entity);
            gun.map(|g| g.heading).unwrap_or(0.0)
        };
        world.spawn((
            Bullet {
                shot_id,
                heading,
                power,
            },
            own_position,
        ));

        session.register_shot(shot_id, &solution);
        events.push(ArenaEvent::ShotFired {
            shot_id,
            power,
            predictor: session.predictor_label(solution.predictor),
        });
        score.shots_fired += 1;
    }
}
