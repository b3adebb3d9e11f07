//! Bullet flight and shot resolution.
//!
//! Advances every bullet by its per-turn speed, credits a hit when the
//! flight segment passes within the foe's body radius, and reports a miss
//! when the bullet leaves the battlefield. Runs before gunnery each turn so
//! freshly resolved feedback is visible to the very next predictor
//! selection.

use hecs::{Entity, World};

use skirmish_core::constants::BOT_HIT_RADIUS;
use skirmish_core::events::{ArenaEvent, ShotOutcome};
use skirmish_core::geometry::{bullet_damage, projectile_speed};
use skirmish_core::types::{ArenaBounds, Point};
use skirmish_gunner::TrackingSession;

use crate::components::{BotBody, Bullet, FoeBot};
use crate::engine::ScoreState;

/// Advance all bullets one turn and resolve hits and wall misses.
pub fn run(
    world: &mut World,
    session: &mut TrackingSession,
    bounds: &ArenaBounds,
    events: &mut Vec<ArenaEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let foe = {
        let mut query = world.query::<(&FoeBot, &Point)>();
        query.iter().next().map(|(entity, (_, pos))| (entity, *pos))
    };

    // Bullets die at the battlefield wall, half a bot beyond bot bounds.
    let field = bounds.expand(BOT_HIT_RADIUS);
    let mut resolutions: Vec<(u64, ShotOutcome, f64)> = Vec::new();

    for (entity, (bullet, pos)) in world.query_mut::<(&Bullet, &mut Point)>() {
        let heading = bullet.heading.to_radians();
        let speed = projectile_speed(bullet.power);
        let start = *pos;
        let end = Point::new(start.x + speed * heading.sin(), start.y + speed * heading.cos());
        *pos = end;

        if let Some((_, foe_position)) = foe {
            if segment_distance(start, end, foe_position) <= BOT_HIT_RADIUS {
                resolutions.push((bullet.shot_id, ShotOutcome::Hit, bullet.power));
                despawn_buffer.push(entity);
                continue;
            }
        }

        if !field.contains(end) {
            resolutions.push((bullet.shot_id, ShotOutcome::Miss, bullet.power));
            despawn_buffer.push(entity);
        }
    }

    for (shot_id, outcome, power) in resolutions {
        session.on_shot_resolved(shot_id, outcome);
        events.push(ArenaEvent::ShotResolved { shot_id, outcome });

        if outcome == ShotOutcome::Hit {
            score.shots_hit += 1;
            if let Some((foe_entity, _)) = foe {
                if let Ok(mut body) = world.get::<&mut BotBody>(foe_entity) {
                    body.energy -= bullet_damage(power);
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Distance from point `p` to the segment from `a` to `b`.
fn segment_distance(a: Point, b: Point, p: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a.distance(p);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a.lerp(b, t).distance(p)
}
