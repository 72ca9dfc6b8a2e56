//! Events emitted by the simulation for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player fired a bullet.
    ShotFired,
    /// An enemy fired a bullet.
    EnemyFired { position: Position },
    /// A player bullet damaged an enemy that survived.
    EnemyHit { remaining_health: u32 },
    /// An enemy was destroyed by player fire.
    EnemyDestroyed {
        position: Position,
        dropped_power_up: bool,
    },
    /// An enemy bullet hit the player.
    PlayerHit { health: u32 },
    PowerUpCollected { kind: PowerUpKind },
    /// The scheduler dropped a power-up in from the top.
    PowerUpSpawned { kind: PowerUpKind },
    /// The scheduler added an enemy.
    EnemySpawned,
    LevelUp { level: u32 },
    GameOver { score: u32 },
    /// A fresh session started from game over.
    Restarted,
}
