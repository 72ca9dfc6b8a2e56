//! Starfall headless front end.
//!
//! Wires the simulation to input adapters (recorded tapes or the autopilot),
//! loads configuration, and drives the engine either as a batch run or on a
//! paced game-loop thread.

pub mod config;
pub mod game_loop;
pub mod pilot;
pub mod state;
pub mod tape;

pub use starfall_core as core;
