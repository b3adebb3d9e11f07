//! Iterative firing-solution solver.
//!
//! Couples the selected movement predictor with projectile travel time:
//! where the foe will be depends on how long the shot flies, which depends
//! on how far away the aim point is. The fixed-point loop reconciles the
//! two; a farther target slows the loop's inputs monotonically, so it
//! settles for every continuous predictor. The iteration cap is the safety
//! valve for the random variant, not a correctness guarantee.

use skirmish_core::commands::GunCommand;
use skirmish_core::constants::{
    AIM_TURNS, MAX_FIRE_POWER, MIN_FIRE_POWER, POWER_K, SOLVER_ACCURACY, SOLVER_MAX_ITERATIONS,
};
use skirmish_core::geometry::projectile_speed;
use skirmish_core::types::Point;

use crate::predictors::{Predictor, PredictorContext};

/// One computed firing solution, consumed the same decision cycle.
#[derive(Debug, Clone, Copy)]
pub struct FiringSolution {
    pub aim_point: Point,
    pub power: f64,
    /// Roster index of the predictor that produced the aim point; paired
    /// with the shot identity once the environment honors the fire command.
    pub predictor: usize,
}

impl FiringSolution {
    /// The advisory commands this solution asks the environment to issue.
    pub fn commands(&self) -> [GunCommand; 2] {
        [
            GunCommand::AimAt {
                target: self.aim_point,
            },
            GunCommand::Fire { power: self.power },
        ]
    }
}

/// Refine an aim point against projectile travel time.
///
/// Returns `None` when the weapon cannot fire this turn. On
/// non-convergence the last computed aim point goes out anyway — a silent
/// accuracy degradation, never an error.
pub fn solve(
    predictor: &dyn Predictor,
    predictor_index: usize,
    ctx: &mut PredictorContext<'_>,
    own_position: Point,
    weapon_ready: bool,
) -> Option<FiringSolution> {
    if !weapon_ready {
        return None;
    }

    let mut target = predictor.predict(ctx, AIM_TURNS);
    let mut dist = own_position.distance(target);

    // Power follows the initial range estimate and is held fixed through
    // refinement: closer targets get faster, stronger shots.
    let power = (POWER_K / dist).clamp(MIN_FIRE_POWER, MAX_FIRE_POWER);
    let shot_speed = projectile_speed(power);

    for _ in 0..SOLVER_MAX_ITERATIONS {
        let time_to_target = (dist / shot_speed).floor() + AIM_TURNS;
        let refined = predictor.predict(ctx, time_to_target);
        let shifted = refined.distance(target);
        target = refined;
        dist = own_position.distance(target);
        if shifted <= SOLVER_ACCURACY {
            break;
        }
    }

    Some(FiringSolution {
        aim_point: target,
        power,
        predictor: predictor_index,
    })
}
