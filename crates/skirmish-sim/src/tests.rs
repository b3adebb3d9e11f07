#[cfg(test)]
mod tests {
    use skirmish_core::events::ArenaEvent;

    use crate::components::Bullet;
    use crate::engine::{ArenaEngine, SimConfig};
    use crate::pilots::PilotArchetype;

    fn config(pilot: PilotArchetype, seed: u64) -> SimConfig {
        SimConfig {
            seed,
            pilot,
            ..Default::default()
        }
    }

    // ---- Determinism ----

    #[test]
    fn test_determinism_same_seed() {
        let mut engine_a = ArenaEngine::new(config(PilotArchetype::Wanderer, 12345));
        let mut engine_b = ArenaEngine::new(config(PilotArchetype::Wanderer, 12345));

        for _ in 0..300 {
            let snap_a = engine_a.tick();
            let snap_b = engine_b.tick();

            let json_a = serde_json::to_string(&snap_a).unwrap();
            let json_b = serde_json::to_string(&snap_b).unwrap();
            assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
        }
    }

    #[test]
    fn test_determinism_different_seeds() {
        let mut engine_a = ArenaEngine::new(config(PilotArchetype::Wanderer, 111));
        let mut engine_b = ArenaEngine::new(config(PilotArchetype::Wanderer, 222));

        let mut diverged = false;
        for _ in 0..300 {
            let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
            let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
            if json_a != json_b {
                diverged = true;
                break;
            }
        }
        assert!(diverged, "Different seeds should produce divergent matches");
    }

    // ---- End-to-end gunnery ----

    #[test]
    fn test_stationary_foe_gets_hit() {
        let mut engine = ArenaEngine::new(config(PilotArchetype::Sentry, 42));
        let snapshot = engine.run(400);

        let score = engine.score();
        assert!(score.shots_fired >= 5, "expected several shots in 400 turns");
        assert!(score.shots_hit >= 1, "a stationary foe should be hit");
        assert!(snapshot.foe.energy < 100.0, "hits should cost the foe energy");

        // Every resolved outcome landed in some predictor's counters.
        let selector = engine.session().selector();
        let (mut hits, mut misses) = (0, 0);
        for index in 0..selector.len() {
            hits += selector.stats(index).hits;
            misses += selector.stats(index).misses;
        }
        assert_eq!(hits, score.shots_hit);
        assert_eq!(
            (hits + misses) as usize + selector.pending_shots(),
            score.shots_fired as usize
        );
    }

    #[test]
    fn test_orbiting_foe_gets_hit() {
        let mut engine = ArenaEngine::new(config(PilotArchetype::Orbiter, 42));
        engine.run(800);
        assert!(
            engine.score().shots_hit >= 1,
            "circular-arc prediction should land hits on an orbiting foe"
        );
    }

    #[test]
    fn test_striding_foe_gets_hit() {
        let mut engine = ArenaEngine::new(config(PilotArchetype::Strider, 7));
        engine.run(600);
        assert!(engine.score().shots_hit >= 1);
    }

    // ---- Feedback bookkeeping ----

    #[test]
    fn test_pending_shots_match_bullets_in_flight() {
        let mut engine = ArenaEngine::new(config(PilotArchetype::Strider, 9));
        for _ in 0..200 {
            engine.tick();
            let in_flight = {
                let mut query = engine.world().query::<&Bullet>();
                query.iter().count()
            };
            assert_eq!(
                engine.session().selector().pending_shots(),
                in_flight,
                "every bullet in flight has exactly one pending-shot entry"
            );
        }
    }

    #[test]
    fn test_shot_events_reference_roster_labels() {
        let mut engine = ArenaEngine::new(config(PilotArchetype::Sentry, 42));
        let mut fired = 0;
        for _ in 0..120 {
            let snapshot = engine.tick();
            for event in &snapshot.events {
                if let ArenaEvent::ShotFired { predictor, .. } = event {
                    fired += 1;
                    assert!(!predictor.is_empty());
                }
            }
        }
        assert!(fired >= 1, "expected at least one ShotFired event");
    }

    // ---- Scanning ----

    #[test]
    fn test_no_scans_no_shots() {
        let mut engine = ArenaEngine::new(SimConfig {
            seed: 42,
            pilot: PilotArchetype::Strider,
            scan_reliability: 0.0,
            own_drive: true,
        });
        engine.run(100);
        assert_eq!(engine.score().shots_fired, 0);
        assert!(engine.session().log().is_empty());
    }

    #[test]
    fn test_unreliable_scans_leave_log_stale() {
        let mut engine = ArenaEngine::new(SimConfig {
            seed: 42,
            pilot: PilotArchetype::Strider,
            scan_reliability: 0.5,
            own_drive: true,
        });
        engine.run(200);
        let observed = engine.session().log().len();
        assert!(observed > 0, "some scans should land");
        assert!(
            observed < 200,
            "some scans should fail at 50% reliability, got {observed}"
        );
    }

    // ---- Match lifecycle ----

    #[test]
    fn test_match_ends_when_foe_energy_depleted() {
        let mut engine = ArenaEngine::new(config(PilotArchetype::Sentry, 42));
        let snapshot = engine.run(3000);

        assert!(engine.match_over(), "a stationary foe should be worn down");
        assert!(snapshot.foe.energy <= 0.0);

        // A finished match stops advancing.
        let frozen_turn = engine.turn();
        engine.tick();
        assert_eq!(engine.turn(), frozen_turn);
    }

    // ---- Snapshot content ----

    #[test]
    fn test_snapshot_views_populated() {
        let mut engine = ArenaEngine::new(config(PilotArchetype::Sentry, 42));
        let snapshot = engine.run(60);

        assert_eq!(snapshot.turn, 60);
        assert_eq!(snapshot.predictors.len(), 5);
        for view in &snapshot.predictors {
            assert!(engine.bounds().contains(view.predicted));
        }
        assert!(
            snapshot.last_solution.is_some(),
            "the gun has fired by turn 60, so a solution exists"
        );

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: skirmish_core::state::ArenaSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.turn, snapshot.turn);
        assert_eq!(back.predictors.len(), snapshot.predictors.len());
    }
}
