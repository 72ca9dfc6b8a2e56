//! Simulation engine for Starfall.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for renderers.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use starfall_core as core;
