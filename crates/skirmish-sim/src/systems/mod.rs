//! Systems that advance the arena by one turn each.
//!
//! Systems are plain functions over the world plus whatever session state
//! they feed; the engine calls them in a fixed order so that feedback lands
//! before the next predictor selection and scans land before prediction.

pub mod ballistics;
pub mod gunnery;
pub mod movement;
pub mod scan;
pub mod snapshot;
