//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Player health reached zero. Only a restart intent is processed.
    GameOver,
}

/// Which side fired a bullet. Player bullets travel up, enemy bullets down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// Power-up effect, fixed when the power-up is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Heals the player, capped at max health.
    Health,
    /// Permanently raises player movement speed.
    Speed,
    /// Reserved. Collecting it has no effect yet.
    Weapon,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Health, PowerUpKind::Speed, PowerUpKind::Weapon];
}

/// Explosion variant: small for bullet impacts, large for kills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSize {
    Small,
    Large,
}
