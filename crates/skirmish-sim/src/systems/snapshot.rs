//! Snapshot system: queries the world and builds a complete ArenaSnapshot.
//!
//! Read-only over the world and the session; predictor previews draw from a
//! dedicated diagnostics RNG so building a snapshot never perturbs the
//! solver's random stream.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skirmish_core::events::ArenaEvent;
use skirmish_core::state::{ArenaSnapshot, BotView, BulletView, ScoreView, SolutionView};
use skirmish_core::types::{ArenaBounds, Point};
use skirmish_gunner::TrackingSession;

use crate::components::{BotBody, Bullet, FoeBot, OwnBot};
use crate::engine::ScoreState;

/// Build the complete snapshot for one turn.
pub fn build(
    world: &World,
    turn: u64,
    session: &TrackingSession,
    diag_rng: &mut ChaCha8Rng,
    bounds: &ArenaBounds,
    events: Vec<ArenaEvent>,
    score: &ScoreState,
) -> ArenaSnapshot {
    ArenaSnapshot {
        turn,
        own: own_view(world),
        foe: foe_view(world),
        bullets: build_bullets(world),
        predictors: session.predictor_views(turn, *bounds, diag_rng),
        last_solution: session.last_solution().map(|solution| SolutionView {
            aim_point: solution.aim_point,
            power: solution.power,
            predictor: session.predictor_label(solution.predictor),
        }),
        events,
        score: ScoreView {
            shots_fired: score.shots_fired,
            shots_hit: score.shots_hit,
            foe_shots_seen: score.foe_shots_seen,
        },
    }
}

fn own_view(world: &World) -> BotView {
    world
        .query::<(&OwnBot, &Point, &BotBody)>()
        .iter()
        .next()
        .map(|(_, (_, pos, body))| bot_view(*pos, *body))
        .unwrap_or_default()
}

fn foe_view(world: &World) -> BotView {
    world
        .query::<(&FoeBot, &Point, &BotBody)>()
        .iter()
        .next()
        .map(|(_, (_, pos, body))| bot_view(*pos, *body))
        .unwrap_or_default()
}

fn bot_view(position: Point, body: BotBody) -> BotView {
    BotView {
        position,
        heading: body.heading,
        speed: body.speed,
        energy: body.energy,
    }
}

/// Bullets in flight, sorted by shot id for stable output.
fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&Bullet, &Point)>()
        .iter()
        .map(|(_, (bullet, pos))| BulletView {
            shot_id: bullet.shot_id,
            position: *pos,
            heading: bullet.heading,
            power: bullet.power,
        })
        .collect();

    bullets.sort_by_key(|b| b.shot_id);
    bullets
}
