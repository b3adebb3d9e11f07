//! ECS components for arena entities.
//!
//! Components are plain data structs with no methods; arena logic lives in
//! systems. `Point` doubles as the position component.

/// Marks the bot running the gunner.
#[derive(Debug, Clone, Copy)]
pub struct OwnBot;

/// Marks the tracked opponent.
#[derive(Debug, Clone, Copy)]
pub struct FoeBot;

/// Kinematic body state shared by both bots.
#[derive(Debug, Clone, Copy)]
pub struct BotBody {
    /// Body heading in degrees (0 = North, clockwise).
    pub heading: f64,
    /// Signed speed in units per turn.
    pub speed: f64,
    pub energy: f64,
}

/// Own-bot gun state.
#[derive(Debug, Clone, Copy)]
pub struct Gun {
    /// Gun heading in degrees.
    pub heading: f64,
    /// Remaining heat; the gun fires only at zero.
    pub heat: f64,
}

/// A bullet in flight.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub shot_id: u64,
    /// Flight heading in degrees, fixed at launch.
    pub heading: f64,
    pub power: f64,
}
