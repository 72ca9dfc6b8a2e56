//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick (`position += velocity`), then
//! retires projectiles and power-ups that left the play area.

use hecs::World;

use starfall_core::components::{Body, Bullet, PowerUp};
use starfall_core::enums::BulletOwner;
use starfall_core::types::{PlayArea, Position, Velocity};

/// Advance every live entity that has a velocity by one tick.
pub fn run(world: &mut World, area: &PlayArea) {
    for (_entity, (pos, vel, body)) in world.query_mut::<(&mut Position, &Velocity, &Body)>() {
        if body.alive {
            pos.x += vel.x;
            pos.y += vel.y;
        }
    }

    retire_offscreen(world, area);
}

/// Mark bullets and power-ups that exited the area for removal.
pub fn retire_offscreen(world: &mut World, area: &PlayArea) {
    for (_entity, (bullet, pos, body)) in world.query_mut::<(&Bullet, &Position, &mut Body)>() {
        let gone = match bullet.owner {
            BulletOwner::Player => pos.y < 0.0,
            BulletOwner::Enemy => pos.y > area.height,
        };
        if gone {
            body.alive = false;
        }
    }

    for (_entity, (_power_up, pos, body)) in world.query_mut::<(&PowerUp, &Position, &mut Body)>() {
        if pos.y > area.height {
            body.alive = false;
        }
    }
}
