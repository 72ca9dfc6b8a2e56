//! Combat rules: resolve detected contacts into damage, score, explosions,
//! drops, and power-up effects.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use starfall_core::components::{Body, Enemy, Player, PowerUp};
use starfall_core::constants::*;
use starfall_core::enums::{ExplosionSize, PowerUpKind};
use starfall_core::events::GameEvent;
use starfall_core::types::Position;

use crate::score::ScoreState;
use crate::systems::collision::{Contact, ContactKind};
use crate::world_setup::{self, SpawnSerial};

/// What combat resolution changed at the lifecycle level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    /// Player health reached zero this tick.
    pub player_destroyed: bool,
}

/// Resolve contacts in order. A contact whose projectile or target already
/// died earlier in the tick is skipped, so each bullet lands at most once.
pub fn run(
    world: &mut World,
    contacts: &[Contact],
    rng: &mut ChaCha8Rng,
    serial: &mut SpawnSerial,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();

    for contact in contacts {
        if !is_alive(world, contact.first) || !is_alive(world, contact.second) {
            continue;
        }
        match contact.kind {
            ContactKind::BulletEnemy => {
                bullet_hits_enemy(world, contact.first, contact.second, rng, serial, score, events);
            }
            ContactKind::EnemyBulletPlayer => {
                if outcome.player_destroyed {
                    continue;
                }
                if enemy_bullet_hits_player(world, contact.first, contact.second, serial, events) {
                    outcome.player_destroyed = true;
                }
            }
            ContactKind::PowerUpPlayer => {
                if outcome.player_destroyed {
                    continue;
                }
                collect_power_up(world, contact.first, contact.second, events);
            }
        }
    }

    outcome
}

fn is_alive(world: &World, entity: Entity) -> bool {
    world.get::<&Body>(entity).is_ok_and(|body| body.alive)
}

fn kill(world: &mut World, entity: Entity) {
    if let Ok(mut body) = world.get::<&mut Body>(entity) {
        body.alive = false;
    }
}

fn position_of(world: &World, entity: Entity) -> Position {
    world.get::<&Position>(entity).map(|p| *p).unwrap_or_default()
}

fn bullet_hits_enemy(
    world: &mut World,
    bullet: Entity,
    enemy: Entity,
    rng: &mut ChaCha8Rng,
    serial: &mut SpawnSerial,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let impact = position_of(world, bullet);
    kill(world, bullet);
    world_setup::spawn_explosion(world, serial, ExplosionSize::Small, impact);

    let remaining = match world.get::<&mut Enemy>(enemy) {
        Ok(mut e) => {
            e.health = e.health.saturating_sub(BULLET_DAMAGE);
            e.health
        }
        Err(_) => return,
    };

    if remaining > 0 {
        events.push(GameEvent::EnemyHit {
            remaining_health: remaining,
        });
        return;
    }

    let corner = position_of(world, enemy);
    let center = world
        .get::<&Body>(enemy)
        .map(|body| body.shape.center(&corner))
        .unwrap_or(corner);
    kill(world, enemy);
    score.award_kill();
    world_setup::spawn_explosion(world, serial, ExplosionSize::Large, center);

    let dropped = rng.gen::<f64>() < POWER_UP_DROP_CHANCE;
    if dropped {
        let (_, kind) = world_setup::spawn_power_up(world, rng, serial, corner);
        debug!(?kind, x = corner.x, y = corner.y, "enemy dropped power-up");
    }
    debug!(score = score.score, "enemy destroyed");

    events.push(GameEvent::EnemyDestroyed {
        position: center,
        dropped_power_up: dropped,
    });
}

/// Returns `true` when the hit destroyed the player.
fn enemy_bullet_hits_player(
    world: &mut World,
    bullet: Entity,
    player: Entity,
    serial: &mut SpawnSerial,
    events: &mut Vec<GameEvent>,
) -> bool {
    let impact = position_of(world, bullet);
    kill(world, bullet);
    world_setup::spawn_explosion(world, serial, ExplosionSize::Small, impact);

    let Ok(mut ship) = world.get::<&mut Player>(player) else {
        return false;
    };
    ship.health = ship.health.saturating_sub(BULLET_DAMAGE);
    events.push(GameEvent::PlayerHit { health: ship.health });
    ship.health == 0
}

fn collect_power_up(world: &mut World, power_up: Entity, player: Entity, events: &mut Vec<GameEvent>) {
    let Ok(kind) = world.get::<&PowerUp>(power_up).map(|p| p.kind) else {
        return;
    };
    kill(world, power_up);

    if let Ok(mut ship) = world.get::<&mut Player>(player) {
        apply_power_up(&mut ship, kind);
    }
    events.push(GameEvent::PowerUpCollected { kind });
}

/// Apply a collected power-up's effect to the ship.
pub fn apply_power_up(ship: &mut Player, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Health => {
            ship.health = (ship.health + POWER_UP_HEAL_AMOUNT).min(PLAYER_MAX_HEALTH);
        }
        PowerUpKind::Speed => {
            ship.speed += POWER_UP_SPEED_BOOST;
        }
        // No weapon upgrades exist yet; collecting one only consumes it.
        PowerUpKind::Weapon => {}
    }
}
