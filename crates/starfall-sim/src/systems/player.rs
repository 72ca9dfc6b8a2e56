//! Player control system: applies the tick's intent to the ship.

use hecs::World;

use starfall_core::commands::Intent;
use starfall_core::components::{Body, Player};
use starfall_core::constants::PLAYER_SHOOT_COOLDOWN;
use starfall_core::enums::BulletOwner;
use starfall_core::events::GameEvent;
use starfall_core::types::{PlayArea, Position};

use crate::score::ScoreState;
use crate::world_setup::{self, SpawnSerial};

/// Move the player (clamped to the area), tick the shot cooldown, and fire
/// from the ship's nose if the intent asks and the cooldown allows.
pub fn run(
    world: &mut World,
    area: &PlayArea,
    intent: &Intent,
    serial: &mut SpawnSerial,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let mut muzzle: Option<Position> = None;

    for (_entity, (player, pos, body)) in world.query_mut::<(&mut Player, &mut Position, &Body)>() {
        if !body.alive {
            continue;
        }
        let (width, height) = (body.shape.width(), body.shape.height());

        let moved = Position::new(
            pos.x + intent.move_x.as_f32() * player.speed,
            pos.y + intent.move_y.as_f32() * player.speed,
        );
        *pos = area.clamp_rect(moved, width, height);

        player.shoot_cooldown = player.shoot_cooldown.saturating_sub(1);
        if intent.fire && player.shoot_cooldown == 0 {
            player.shoot_cooldown = PLAYER_SHOOT_COOLDOWN;
            muzzle = Some(Position::new(pos.x + width / 2.0, pos.y));
        }
    }

    if let Some(position) = muzzle {
        world_setup::spawn_bullet(world, serial, BulletOwner::Player, position);
        score.shots_fired += 1;
        events.push(GameEvent::ShotFired);
    }
}
