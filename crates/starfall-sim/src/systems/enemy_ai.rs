//! Enemy behavior: bouncing drift, recycling past the bottom edge, and
//! timed fire.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Body, Enemy};
use starfall_core::constants::*;
use starfall_core::enums::BulletOwner;
use starfall_core::events::GameEvent;
use starfall_core::types::{PlayArea, Position, Velocity};

use crate::world_setup::{self, SpawnSerial};

/// Run enemy behavior for one tick. Movement itself is integrated by the
/// movement system beforehand.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    area: &PlayArea,
    serial: &mut SpawnSerial,
    events: &mut Vec<GameEvent>,
) {
    let mut muzzles: Vec<Position> = Vec::new();

    for entity in super::live_in_spawn_order::<Enemy>(world) {
        let Ok((enemy, pos, vel, body)) =
            world.query_one_mut::<(&mut Enemy, &mut Position, &mut Velocity, &Body)>(entity)
        else {
            continue;
        };
        let (width, height) = (body.shape.width(), body.shape.height());

        bounce(pos, vel, area, width);
        if pos.y > area.height {
            recycle(rng, pos, vel, area, width);
        }

        if enemy.shoot_timer == 0 {
            muzzles.push(Position::new(pos.x + width / 2.0, pos.y + height));
            enemy.shoot_timer = rng.gen_range(ENEMY_SHOT_INTERVAL_MIN..=ENEMY_SHOT_INTERVAL_MAX);
        } else {
            enemy.shoot_timer -= 1;
        }
    }

    for position in muzzles {
        world_setup::spawn_bullet(world, serial, BulletOwner::Enemy, position);
        events.push(GameEvent::EnemyFired { position });
    }
}

/// Reflect horizontal speed at the side walls. Position is not clamped, so
/// an enemy may overshoot by up to one tick of travel.
pub fn bounce(pos: &Position, vel: &mut Velocity, area: &PlayArea, width: f32) {
    if pos.x <= 0.0 || pos.x >= area.width - width {
        vel.x = -vel.x;
    }
}

/// Move an enemy that drifted off the bottom back above the top with fresh
/// speeds. Not a kill: no score, no removal.
pub fn recycle(rng: &mut ChaCha8Rng, pos: &mut Position, vel: &mut Velocity, area: &PlayArea, width: f32) {
    pos.x = world_setup::random_column(rng, area.width, width);
    pos.y = rng.gen_range(ENEMY_RECYCLE_Y_MIN..=ENEMY_RECYCLE_Y_MAX) as f32;
    *vel = world_setup::random_enemy_velocity(rng);
}
