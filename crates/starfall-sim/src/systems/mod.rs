//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; session state is passed in by the engine.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod effects;
pub mod enemy_ai;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod spawner;

use hecs::{Component, Entity, World};

use starfall_core::components::{Body, SpawnOrder};

/// Live entities carrying component `C`, in creation order.
pub(crate) fn live_in_spawn_order<C: Component>(world: &World) -> Vec<Entity> {
    let mut found: Vec<(SpawnOrder, Entity)> = world
        .query::<(&C, &SpawnOrder, &Body)>()
        .iter()
        .filter(|(_, (_, _, body))| body.alive)
        .map(|(entity, (_, order, _))| (*order, entity))
        .collect();

    found.sort_by_key(|(order, _)| *order);
    found.into_iter().map(|(_, entity)| entity).collect()
}
