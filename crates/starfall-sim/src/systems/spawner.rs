//! Spawn scheduler: timed enemy reinforcements and power-up drops.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use starfall_core::components::{Body, Enemy};
use starfall_core::constants::{ENEMY_SPAWN_INTERVAL, POWER_UP_SPAWN_INTERVAL};
use starfall_core::events::GameEvent;
use starfall_core::types::PlayArea;

use crate::world_setup::{self, SpawnSerial};

/// The two independent spawn countdowns, counted up in ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub enemy: u32,
    pub power_up: u32,
}

/// Count live enemies.
pub fn live_enemy_count(world: &World) -> usize {
    world
        .query::<(&Enemy, &Body)>()
        .iter()
        .filter(|(_, (_, body))| body.alive)
        .count()
}

/// Advance both timers and spawn whatever is due.
///
/// The enemy timer keeps counting while the population is at `enemy_cap`,
/// so a reinforcement arrives on the first tick a slot frees up.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    area: &PlayArea,
    timers: &mut SpawnTimers,
    enemy_cap: usize,
    serial: &mut SpawnSerial,
    events: &mut Vec<GameEvent>,
) {
    timers.enemy += 1;
    if timers.enemy >= ENEMY_SPAWN_INTERVAL && live_enemy_count(world) < enemy_cap {
        world_setup::spawn_enemy(world, rng, area, serial);
        timers.enemy = 0;
        debug!(cap = enemy_cap, "enemy spawned");
        events.push(GameEvent::EnemySpawned);
    }

    timers.power_up += 1;
    if timers.power_up >= POWER_UP_SPAWN_INTERVAL {
        let (_, kind) = world_setup::spawn_power_up_at_top(world, rng, area, serial);
        timers.power_up = 0;
        debug!(?kind, "power-up spawned");
        events.push(GameEvent::PowerUpSpawned { kind });
    }
}
