//! Core types and definitions for the Starfall arcade simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input intents, state snapshots, events, and constants.
//! It has no dependency on the ECS runtime or any frontend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
