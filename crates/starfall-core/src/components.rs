//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Shape;

/// Bounding shape plus liveness flag shared by every simulated object.
///
/// Clearing `alive` marks the entity for removal; the cleanup system
/// despawns it at the end of the tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub shape: Shape,
    pub alive: bool,
}

impl Body {
    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            shape: Shape::Rect { width, height },
            alive: true,
        }
    }

    pub fn circle(radius: f32) -> Self {
        Self {
            shape: Shape::Circle { radius },
            alive: true,
        }
    }
}

/// Creation serial. Snapshot sequences and collision resolution follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// The player's ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Units moved per tick per unit of intent.
    pub speed: f32,
    /// 0..=PLAYER_MAX_HEALTH
    pub health: u32,
    /// Ticks until the next shot is allowed.
    pub shoot_cooldown: u32,
}

/// A hostile ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// 0..=ENEMY_MAX_HEALTH
    pub health: u32,
    /// Ticks until the next shot.
    pub shoot_timer: u32,
}

/// A projectile from either side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub owner: BulletOwner,
}

/// Cosmetic blast that grows and fades out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub size: ExplosionSize,
    pub radius: f32,
    pub max_radius: f32,
    pub alpha: u8,
}

/// A collectible falling toward the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}
