#[cfg(test)]
mod tests {
    use crate::commands::GunCommand;
    use crate::events::{ArenaEvent, ShotOutcome};
    use crate::geometry::*;
    use crate::observation::Observation;
    use crate::state::ArenaSnapshot;
    use crate::types::{ArenaBounds, Point};

    fn bounds() -> ArenaBounds {
        ArenaBounds::field(800.0, 600.0)
    }

    // ---- shift_by ----

    #[test]
    fn test_shift_by_stays_in_bounds() {
        // Closed invariant: any shift from any in-bounds point lands in bounds.
        let b = bounds();
        for &heading in &[0.0, 37.0, 90.0, 135.5, 180.0, -45.0, -179.0] {
            for &dist in &[0.0, 10.0, 500.0, 5_000.0, -5_000.0] {
                for &start in &[b.min, b.max, b.center(), Point::new(30.0, 550.0)] {
                    let shifted = shift_by(start, heading, dist, &b);
                    assert!(
                        b.contains(shifted),
                        "shift_by({start:?}, {heading}, {dist}) left bounds: {shifted:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_shift_by_zero_distance_identity() {
        let b = bounds();
        let p = Point::new(123.0, 456.0);
        assert_eq!(shift_by(p, 77.0, 0.0, &b), p);
    }

    #[test]
    fn test_shift_by_cardinal_directions() {
        let b = bounds();
        let c = b.center();
        let north = shift_by(c, 0.0, 10.0, &b);
        assert!((north.x - c.x).abs() < 1e-9);
        assert!((north.y - (c.y + 10.0)).abs() < 1e-9);

        let east = shift_by(c, 90.0, 10.0, &b);
        assert!((east.x - (c.x + 10.0)).abs() < 1e-9);
        assert!((east.y - c.y).abs() < 1e-9);
    }

    #[test]
    fn test_shift_by_clamps_each_axis_independently() {
        let b = bounds();
        // Shoot diagonally past the top-right corner: both axes pin.
        let pinned = shift_by(Point::new(700.0, 500.0), 45.0, 10_000.0, &b);
        assert_eq!(pinned, b.max);
    }

    // ---- normalize_heading ----

    #[test]
    fn test_normalize_heading_range_and_idempotence() {
        for &a in &[0.0, 190.0, -190.0, 359.0, 360.0, 540.0, -540.0, 180.0, -180.0, 1e6] {
            let n = normalize_heading(a);
            assert!(n > -180.0 && n <= 180.0, "normalize({a}) = {n} out of range");
            assert_eq!(normalize_heading(n), n, "normalize not idempotent at {a}");
        }
    }

    #[test]
    fn test_normalize_heading_values() {
        assert_eq!(normalize_heading(190.0), -170.0);
        assert_eq!(normalize_heading(-190.0), 170.0);
        assert_eq!(normalize_heading(540.0), 180.0);
        assert_eq!(normalize_heading(-180.0), 180.0);
        assert_eq!(normalize_heading(360.0), 0.0);
    }

    // ---- heading_to / shift_by inversion ----

    #[test]
    fn test_heading_to_cardinals() {
        let origin = Point::new(400.0, 300.0);
        assert!((heading_to(origin, Point::new(400.0, 400.0)) - 0.0).abs() < 1e-9);
        assert!((heading_to(origin, Point::new(500.0, 300.0)) - 90.0).abs() < 1e-9);
        assert!((heading_to(origin, Point::new(400.0, 200.0)).abs() - 180.0).abs() < 1e-9);
        assert!((heading_to(origin, Point::new(300.0, 300.0)) + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_heading_to_inverts_shift_by() {
        let b = bounds();
        let from = b.center();
        for &heading in &[0.0, 10.0, 37.0, 90.0, 150.0, -60.0, -135.0] {
            let to = shift_by(from, heading, 100.0, &b);
            let back = heading_to(from, to);
            assert!(
                (normalize_heading(back - heading)).abs() < 1e-9,
                "heading {heading} round-tripped to {back}"
            );
        }
    }

    // ---- projectile physics ----

    #[test]
    fn test_projectile_speed_affine() {
        assert_eq!(projectile_speed(1.0), 17.0);
        assert_eq!(projectile_speed(3.0), 11.0);
        assert!((projectile_speed(0.1) - 19.7).abs() < 1e-12);
    }

    #[test]
    fn test_bullet_damage() {
        assert_eq!(bullet_damage(1.0), 4.0);
        assert_eq!(bullet_damage(0.5), 2.0);
        assert_eq!(bullet_damage(3.0), 16.0);
    }

    #[test]
    fn test_fire_heat() {
        assert!((fire_heat(1.0) - 1.2).abs() < 1e-12);
        assert!((fire_heat(3.0) - 1.6).abs() < 1e-12);
    }

    // ---- bounds ----

    #[test]
    fn test_bounds_field_insets_half_bot() {
        let b = bounds();
        assert_eq!(b.min, Point::new(18.0, 18.0));
        assert_eq!(b.max, Point::new(782.0, 582.0));
        assert_eq!(b.center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn test_bounds_expand() {
        let b = bounds().expand(18.0);
        assert_eq!(b.min, Point::ZERO);
        assert_eq!(b.max, Point::new(800.0, 600.0));
    }

    // ---- observation ----

    #[test]
    fn test_observation_clamps_position() {
        let b = bounds();
        let obs = Observation::new(Point::new(-50.0, 700.0), 0.0, 8.0, 100.0, 3, &b);
        assert_eq!(obs.position, Point::new(18.0, 582.0));
        assert_eq!(obs.age(10), 7.0);
    }

    // ---- serde ----

    #[test]
    fn test_gun_command_serde() {
        let commands = vec![
            GunCommand::AimAt {
                target: Point::new(100.0, 200.0),
            },
            GunCommand::Fire { power: 2.5 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: GunCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_arena_event_serde() {
        let events = vec![
            ArenaEvent::ShotFired {
                shot_id: 7,
                power: 1.5,
                predictor: "Linear".to_string(),
            },
            ArenaEvent::ShotResolved {
                shot_id: 7,
                outcome: ShotOutcome::Hit,
            },
            ArenaEvent::FoeGunFlash { energy_drop: 2.0 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: ArenaEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_shot_outcome_serde() {
        for outcome in [ShotOutcome::Hit, ShotOutcome::Miss] {
            let json = serde_json::to_string(&outcome).unwrap();
            let back: ShotOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(outcome, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = ArenaSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ArenaSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.turn, back.turn);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }
}
