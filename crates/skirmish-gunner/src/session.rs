//! The tracking session — all per-opponent mutable state in one place.
//!
//! Packages the observation log, the predictor roster with its statistics,
//! and the pending-shot bookkeeping, so several independent trackers could
//! coexist without hidden coupling. One `decide` call per turn is the
//! whole decision cycle.

use std::collections::HashMap;

use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::{AIM_TURNS, MAX_FIRE_POWER, MIN_FIRE_POWER};
use skirmish_core::events::ShotOutcome;
use skirmish_core::geometry::bullet_damage;
use skirmish_core::observation::Observation;
use skirmish_core::state::PredictorView;
use skirmish_core::types::{ArenaBounds, Point};

use crate::log::ObservationLog;
use crate::predictors::{default_roster, Predictor, PredictorContext};
use crate::selector::AdaptiveSelector;
use crate::solver::{self, FiringSolution};

/// What a fresh observation revealed beyond the snapshot itself.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScanAssessment {
    /// Energy the foe lost that our own recorded hits do not explain.
    /// A residual drop in the legal firing range means the foe just fired.
    pub foe_fired: Option<f64>,
}

/// Per-opponent tracking state: log, selector, pending shots.
pub struct TrackingSession {
    log: ObservationLog,
    selector: AdaptiveSelector,
    /// Power of each in-flight shot, for energy-drop attribution.
    pending_power: HashMap<u64, f64>,
    /// Damage our hits dealt since the previous observation; subtracted
    /// from the next observed energy drop before inferring foe gunfire.
    unobserved_hit_damage: f64,
    last_solution: Option<FiringSolution>,
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new(default_roster())
    }
}

impl TrackingSession {
    pub fn new(roster: Vec<Box<dyn Predictor>>) -> Self {
        Self {
            log: ObservationLog::new(),
            selector: AdaptiveSelector::new(roster),
            pending_power: HashMap::new(),
            unobserved_hit_damage: 0.0,
            last_solution: None,
        }
    }

    /// Record a fresh scan of the foe and assess what it implies.
    pub fn on_observation(&mut self, obs: Observation) -> ScanAssessment {
        let assessment = match self.log.last() {
            Some(prev) => {
                let residual = prev.energy - obs.energy - self.unobserved_hit_damage;
                if (MIN_FIRE_POWER..=MAX_FIRE_POWER).contains(&residual) {
                    ScanAssessment {
                        foe_fired: Some(residual),
                    }
                } else {
                    ScanAssessment::default()
                }
            }
            None => ScanAssessment::default(),
        };
        self.unobserved_hit_damage = 0.0;
        self.log.append(obs);
        assessment
    }

    /// Run one decision cycle: pick the best predictor and solve for an
    /// aim point and power. Returns `None` with no observations yet or
    /// while the weapon is not ready.
    pub fn decide(
        &mut self,
        current_turn: u64,
        own_position: Point,
        weapon_ready: bool,
        bounds: ArenaBounds,
        rng: &mut ChaCha8Rng,
    ) -> Option<FiringSolution> {
        if self.log.is_empty() {
            return None;
        }
        let best = self.selector.best();
        let mut ctx = PredictorContext {
            log: &self.log,
            current_turn,
            bounds,
            rng,
        };
        let solution = solver::solve(
            self.selector.predictor(best),
            best,
            &mut ctx,
            own_position,
            weapon_ready,
        )?;
        self.last_solution = Some(solution);
        Some(solution)
    }

    /// Bind an environment-assigned shot identity to the solution it came
    /// from. Call only after the environment honored the fire command.
    pub fn register_shot(&mut self, shot_id: u64, solution: &FiringSolution) {
        self.selector.record_shot(shot_id, solution.predictor);
        self.pending_power.insert(shot_id, solution.power);
    }

    /// Apply hit/miss feedback for a previously registered shot.
    ///
    /// Panics on an unknown shot id — see [`AdaptiveSelector::resolve_shot`].
    pub fn on_shot_resolved(&mut self, shot_id: u64, outcome: ShotOutcome) {
        self.selector.resolve_shot(shot_id, outcome);
        let power = self
            .pending_power
            .remove(&shot_id)
            .unwrap_or_else(|| panic!("no recorded power for shot id {shot_id}"));
        if outcome == ShotOutcome::Hit {
            self.unobserved_hit_damage += bullet_damage(power);
        }
    }

    /// Diagnostic views of every predictor variant.
    ///
    /// Takes a dedicated diagnostics RNG so that rendering previews can
    /// never perturb the solver's random stream.
    pub fn predictor_views(
        &self,
        current_turn: u64,
        bounds: ArenaBounds,
        diag_rng: &mut ChaCha8Rng,
    ) -> Vec<PredictorView> {
        (0..self.selector.len())
            .map(|index| {
                let mut ctx = PredictorContext {
                    log: &self.log,
                    current_turn,
                    bounds,
                    rng: &mut *diag_rng,
                };
                let predicted = self.selector.predictor(index).predict(&mut ctx, AIM_TURNS);
                let stats = self.selector.stats(index);
                PredictorView {
                    label: self.selector.predictor(index).label(),
                    hits: stats.hits,
                    misses: stats.misses,
                    score: stats.score(),
                    predicted,
                }
            })
            .collect()
    }

    /// Label of the predictor at the given roster index.
    pub fn predictor_label(&self, index: usize) -> String {
        self.selector.predictor(index).label()
    }

    pub fn log(&self) -> &ObservationLog {
        &self.log
    }

    pub fn selector(&self) -> &AdaptiveSelector {
        &self.selector
    }

    pub fn last_solution(&self) -> Option<&FiringSolution> {
        self.last_solution.as_ref()
    }
}
