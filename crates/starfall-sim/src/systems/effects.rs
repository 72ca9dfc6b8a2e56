//! Explosion animation: grow, fade, expire.

use hecs::World;

use starfall_core::components::{Body, Explosion};
use starfall_core::constants::{EXPLOSION_FADE_RATE, EXPLOSION_GROWTH_RATE};
use starfall_core::types::Shape;

pub fn run(world: &mut World) {
    for (_entity, (explosion, body)) in world.query_mut::<(&mut Explosion, &mut Body)>() {
        if !body.alive {
            continue;
        }
        explosion.radius = (explosion.radius + EXPLOSION_GROWTH_RATE).min(explosion.max_radius);
        explosion.alpha = explosion.alpha.saturating_sub(EXPLOSION_FADE_RATE);
        body.shape = Shape::Circle {
            radius: explosion.radius,
        };
        if explosion.alpha == 0 {
            body.alive = false;
        }
    }
}
