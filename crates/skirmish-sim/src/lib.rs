//! Headless arena for SKIRMISH.
//!
//! Plays the role of the external game environment: owns the hecs world
//! (both bots and every bullet in flight), drives one decision cycle per
//! turn, delivers scan observations and shot feedback to the gunner, and
//! produces a serializable snapshot after each turn. Completely headless,
//! enabling deterministic testing.

pub mod components;
pub mod engine;
pub mod pilots;
pub mod systems;

pub use engine::{ArenaEngine, SimConfig};
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
