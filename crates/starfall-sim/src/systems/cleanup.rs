//! Cleanup system: despawns every entity marked dead during the tick.

use hecs::{Entity, World};

use starfall_core::components::Body;

/// Compact the world once per tick. Uses a pre-allocated buffer to avoid
/// per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, body) in world.query_mut::<&Body>() {
        if !body.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
