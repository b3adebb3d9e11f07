//! Pure coordinate and heading math shared by the gunner and the arena.
//!
//! Headings are degrees, 0 = North (+Y), increasing clockwise, so a
//! displacement of `d` along heading `h` is `(d·sin h, d·cos h)`.
//! `heading_to` uses the same convention, making it the inverse of
//! `shift_by` up to wall clamping.

use crate::types::{ArenaBounds, Point};

/// Displace `point` by `distance` along `heading_degrees`, then pin the
/// result to `bounds` (each axis clamped independently).
///
/// The clamp models a bot pinned against the arena wall rather than
/// bouncing; it applies identically to predicted foe positions and to aim
/// points, both of which must stay inside the legal arena.
pub fn shift_by(point: Point, heading_degrees: f64, distance: f64, bounds: &ArenaBounds) -> Point {
    let heading = heading_degrees.to_radians();
    bounds.clamp(Point::new(
        point.x + distance * heading.sin(),
        point.y + distance * heading.cos(),
    ))
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Map any heading to (-180, 180] by repeated ±360 adjustment.
pub fn normalize_heading(mut a: f64) -> f64 {
    while a > 180.0 {
        a -= 360.0;
    }
    while a <= -180.0 {
        a += 360.0;
    }
    a
}

/// Bearing in degrees from `from` to `to`, same convention as `shift_by`.
pub fn heading_to(from: Point, to: Point) -> f64 {
    (to.x - from.x).atan2(to.y - from.y).to_degrees()
}

/// Bullet speed in units per turn for a shot of the given power.
/// Fixed physical relation of the environment, power meaningful on (0, 3].
pub fn projectile_speed(power: f64) -> f64 {
    20.0 - 3.0 * power
}

/// Energy a bot loses when struck by a bullet of the given power.
pub fn bullet_damage(power: f64) -> f64 {
    let mut damage = power * 4.0;
    if power > 1.0 {
        damage += (power - 1.0) * 2.0;
    }
    damage
}

/// Heat the gun gains when firing a shot of the given power.
pub fn fire_heat(power: f64) -> f64 {
    1.0 + power / 5.0
}
