//! Append-only log of opponent observations.

use skirmish_core::observation::Observation;

/// Ordered observation history for one tracked opponent.
///
/// Entries are immutable once appended and their turns strictly increase.
/// The predictors only ever read the last one or two entries; keeping the
/// full history bounds nothing but is cheap at one entry per scan.
#[derive(Debug, Clone, Default)]
pub struct ObservationLog {
    entries: Vec<Observation>,
}

impl ObservationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh observation.
    ///
    /// Panics if `obs.turn` is not strictly after the last entry's turn —
    /// out-of-order delivery means the environment contract is broken.
    pub fn append(&mut self, obs: Observation) {
        if let Some(last) = self.entries.last() {
            assert!(
                obs.turn > last.turn,
                "observation for turn {} appended after turn {}",
                obs.turn,
                last.turn
            );
        }
        self.entries.push(obs);
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<&Observation> {
        self.entries.last()
    }

    /// The two most recent observations as (previous, last).
    pub fn last_two(&self) -> Option<(&Observation, &Observation)> {
        match self.entries.as_slice() {
            [.., prev, last] => Some((prev, last)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
