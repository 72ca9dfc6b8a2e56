//! Game state snapshot: the complete visible state handed to renderers each tick.
//!
//! Snapshots are owned values; nothing a renderer does to one can reach back
//! into the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// `None` once the player has been destroyed.
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub enemy_bullets: Vec<BulletView>,
    pub explosions: Vec<ExplosionView>,
    pub power_ups: Vec<PowerUpView>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Top-left corner.
    pub position: Position,
    pub width: f32,
    pub height: f32,
    pub health: u32,
    pub speed: f32,
    pub shoot_cooldown: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    /// Top-left corner.
    pub position: Position,
    pub width: f32,
    pub height: f32,
    pub velocity: Velocity,
    pub health: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletView {
    /// Center.
    pub position: Position,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    /// Center.
    pub position: Position,
    pub size: ExplosionSize,
    pub radius: f32,
    pub alpha: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    /// Top-left corner.
    pub position: Position,
    pub size: f32,
    pub kind: PowerUpKind,
}

/// Scalars for the heads-up display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub health: u32,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    /// Best score seen by this process across sessions.
    pub best_score: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
}
