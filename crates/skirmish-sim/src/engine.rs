//! Arena engine — drives the duel turn by turn.
//!
//! `ArenaEngine` owns the hecs world, the deterministic RNG streams, and
//! the gunner's tracking session. One `tick()` is one turn: bullets fly and
//! resolve, bots move, the foe is scanned, and the gunner runs one decision
//! cycle. Same seed, same match.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::{DEFAULT_SCAN_RELIABILITY, INITIAL_GUN_HEAT, MAX_BOT_ENERGY};
use skirmish_core::events::ArenaEvent;
use skirmish_core::state::ArenaSnapshot;
use skirmish_core::types::{ArenaBounds, Point};
use skirmish_gunner::TrackingSession;

use crate::components::{BotBody, FoeBot, Gun, OwnBot};
use crate::pilots::PilotArchetype;
use crate::systems;

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    /// Foe behavior.
    pub pilot: PilotArchetype,
    /// Probability a scan lands each turn.
    pub scan_reliability: f64,
    /// Whether the own bot strafes or holds position.
    pub own_drive: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pilot: PilotArchetype::default(),
            scan_reliability: DEFAULT_SCAN_RELIABILITY,
            own_drive: true,
        }
    }
}

/// Running match tallies tracked by the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub foe_shots_seen: u32,
}

/// The arena engine. Owns the ECS world and all match state.
pub struct ArenaEngine {
    world: World,
    turn: u64,
    bounds: ArenaBounds,
    pilot: PilotArchetype,
    scan_reliability: f64,
    own_drive: bool,
    rng: ChaCha8Rng,
    /// Separate stream for snapshot previews; diagnostics must never
    /// perturb the solver's randomness.
    diag_rng: ChaCha8Rng,
    session: TrackingSession,
    next_shot_id: u64,
    events: Vec<ArenaEvent>,
    score: ScoreState,
    despawn_buffer: Vec<hecs::Entity>,
}

impl ArenaEngine {
    /// Create a new engine and place both bots.
    pub fn new(config: SimConfig) -> Self {
        let bounds = ArenaBounds::default();
        let mut world = World::new();
        spawn_bots(&mut world, &bounds);

        Self {
            world,
            turn: 0,
            bounds,
            pilot: config.pilot,
            scan_reliability: config.scan_reliability,
            own_drive: config.own_drive,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            diag_rng: ChaCha8Rng::seed_from_u64(config.seed ^ 0x5eed_d1a6),
            session: TrackingSession::default(),
            next_shot_id: 0,
            events: Vec::new(),
            score: ScoreState::default(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance one turn and return the resulting snapshot.
    pub fn tick(&mut self) -> ArenaSnapshot {
        if !self.match_over() {
            self.turn += 1;
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.turn,
            &self.session,
            &mut self.diag_rng,
            &self.bounds,
            events,
            &self.score,
        )
    }

    /// Advance `turns` turns and return the final snapshot.
    pub fn run(&mut self, turns: u64) -> ArenaSnapshot {
        let mut snapshot = self.tick();
        for _ in 1..turns {
            snapshot = self.tick();
        }
        snapshot
    }

    /// Whether either bot has run out of energy.
    pub fn match_over(&self) -> bool {
        let mut query = self.world.query::<&BotBody>();
        query.iter().any(|(_, body)| body.energy <= 0.0)
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn session(&self) -> &TrackingSession {
        &self.session
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run all systems for one turn, in contract order: feedback from
    /// in-flight bullets lands before the next selection, and a fresh scan
    /// lands before the same cycle's prediction.
    fn run_systems(&mut self) {
        // 1. Bullet flight and shot resolution (selector feedback).
        systems::ballistics::run(
            &mut self.world,
            &mut self.session,
            &self.bounds,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 2. Gun cooling.
        systems::gunnery::cool(&mut self.world);
        // 3. Foe movement.
        systems::movement::run_foe(&mut self.world, &mut self.rng, &self.bounds, self.pilot);
        // 4. Own movement.
        if self.own_drive {
            let foe_position = self.foe_position();
            systems::movement::run_own(&mut self.world, &mut self.rng, &self.bounds, foe_position);
        }
        // 5. Scan (observation append).
        systems::scan::run(
            &self.world,
            &mut self.session,
            &mut self.rng,
            &self.bounds,
            self.scan_reliability,
            self.turn,
            &mut self.events,
            &mut self.score,
        );
        // 6. Gunnery (decision cycle, aim, fire).
        systems::gunnery::run(
            &mut self.world,
            &mut self.session,
            &mut self.rng,
            &self.bounds,
            self.turn,
            &mut self.next_shot_id,
            &mut self.events,
            &mut self.score,
        );
    }

    fn foe_position(&self) -> Point {
        let mut query = self.world.query::<(&FoeBot, &Point)>();
        query
            .iter()
            .next()
            .map(|(_, (_, pos))| *pos)
            .unwrap_or_default()
    }
}

/// Spawn both bots facing each other across the field.
fn spawn_bots(world: &mut World, bounds: &ArenaBounds) {
    let center = bounds.center();

    world.spawn((
        OwnBot,
        center - Point::new(200.0, 0.0),
        BotBody {
            heading: 0.0,
            speed: 0.0,
            energy: MAX_BOT_ENERGY,
        },
        Gun {
            heading: 0.0,
            heat: INITIAL_GUN_HEAT,
        },
    ));

    world.spawn((
        FoeBot,
        center + Point::new(200.0, 0.0),
        BotBody {
            heading: 0.0,
            speed: 0.0,
            energy: MAX_BOT_ENERGY,
        },
    ));
}
