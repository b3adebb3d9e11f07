//! Core types and definitions for the SKIRMISH gunnery system.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, the geometry kernel, observation snapshots, gun
//! commands, events, state views, and constants. It has no dependency on
//! any ECS or runtime framework.

pub mod commands;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod observation;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
