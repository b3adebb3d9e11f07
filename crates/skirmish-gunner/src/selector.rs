//! Adaptive predictor selection from hit/miss feedback.

use std::collections::HashMap;

use skirmish_core::events::ShotOutcome;

use crate::predictors::Predictor;

/// Hit/miss tally for one predictor variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictorStats {
    pub hits: u32,
    pub misses: u32,
}

impl PredictorStats {
    /// Laplace-smoothed hit rate. The +1/+2 smoothing keeps untried
    /// variants viable and stops a single early result from locking
    /// selection in.
    pub fn score(&self) -> f64 {
        (self.hits as f64 + 1.0) / (self.misses as f64 + 2.0)
    }
}

/// Tracks each registered predictor's empirical accuracy and the shots
/// still waiting for an outcome.
pub struct AdaptiveSelector {
    predictors: Vec<Box<dyn Predictor>>,
    stats: Vec<PredictorStats>,
    /// Shot identity → index of the predictor that aimed it.
    pending: HashMap<u64, usize>,
}

impl AdaptiveSelector {
    pub fn new(predictors: Vec<Box<dyn Predictor>>) -> Self {
        let stats = vec![PredictorStats::default(); predictors.len()];
        Self {
            predictors,
            stats,
            pending: HashMap::new(),
        }
    }

    /// Index of the best-scoring predictor; ties go to the earliest
    /// registered.
    pub fn best(&self) -> usize {
        let mut best = 0;
        for (index, stats) in self.stats.iter().enumerate() {
            if stats.score() > self.stats[best].score() {
                best = index;
            }
        }
        best
    }

    pub fn predictor(&self, index: usize) -> &dyn Predictor {
        self.predictors[index].as_ref()
    }

    pub fn stats(&self, index: usize) -> PredictorStats {
        self.stats[index]
    }

    pub fn len(&self) -> usize {
        self.predictors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictors.is_empty()
    }

    /// Number of shots in flight awaiting an outcome.
    pub fn pending_shots(&self) -> usize {
        self.pending.len()
    }

    /// Remember which predictor aimed the given shot.
    ///
    /// Panics on a duplicate shot id — the environment must assign fresh
    /// identities.
    pub fn record_shot(&mut self, shot_id: u64, predictor: usize) {
        assert!(predictor < self.predictors.len());
        let previous = self.pending.insert(shot_id, predictor);
        assert!(previous.is_none(), "duplicate shot id {shot_id}");
    }

    /// Apply a shot outcome to the predictor that aimed it and return that
    /// predictor's index.
    ///
    /// Panics on an unknown shot id: feedback for a shot this session never
    /// issued means our state has desynchronized from the environment.
    pub fn resolve_shot(&mut self, shot_id: u64, outcome: ShotOutcome) -> usize {
        let index = self
            .pending
            .remove(&shot_id)
            .unwrap_or_else(|| panic!("feedback for unknown shot id {shot_id}"));
        match outcome {
            ShotOutcome::Hit => self.stats[index].hits += 1,
            ShotOutcome::Miss => self.stats[index].misses += 1,
        }
        index
    }
}
