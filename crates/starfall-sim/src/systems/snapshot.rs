//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only; never modifies the world.

use hecs::World;

use starfall_core::components::*;
use starfall_core::enums::*;
use starfall_core::events::GameEvent;
use starfall_core::state::*;
use starfall_core::types::{Position, SimTime, Shape, Velocity};

use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = match phase {
        GamePhase::Playing => build_player(world),
        GamePhase::GameOver => None,
    };

    GameStateSnapshot {
        time: *time,
        phase,
        hud: HudView {
            health: find_player_health(world),
            score: score.score,
            level: score.level,
            game_over: phase == GamePhase::GameOver,
            best_score: score.best_score,
            enemies_destroyed: score.enemies_destroyed,
            shots_fired: score.shots_fired,
        },
        player,
        enemies: build_enemies(world),
        bullets: build_bullets(world, BulletOwner::Player),
        enemy_bullets: build_bullets(world, BulletOwner::Enemy),
        explosions: build_explosions(world),
        power_ups: build_power_ups(world),
        events,
    }
}

fn find_player_health(world: &World) -> u32 {
    world
        .query::<&Player>()
        .iter()
        .next()
        .map(|(_, player)| player.health)
        .unwrap_or(0)
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &Position, &Body)>()
        .iter()
        .find(|(_, (_, _, body))| body.alive)
        .map(|(_, (player, pos, body))| PlayerView {
            position: *pos,
            width: body.shape.width(),
            height: body.shape.height(),
            health: player.health,
            speed: player.speed,
            shoot_cooldown: player.shoot_cooldown,
        })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<(SpawnOrder, EnemyView)> = world
        .query::<(&Enemy, &Position, &Velocity, &Body, &SpawnOrder)>()
        .iter()
        .filter(|(_, (_, _, _, body, _))| body.alive)
        .map(|(_, (enemy, pos, vel, body, order))| {
            (
                *order,
                EnemyView {
                    position: *pos,
                    width: body.shape.width(),
                    height: body.shape.height(),
                    velocity: *vel,
                    health: enemy.health,
                },
            )
        })
        .collect();

    enemies.sort_by_key(|(order, _)| *order);
    enemies.into_iter().map(|(_, view)| view).collect()
}

fn build_bullets(world: &World, owner: BulletOwner) -> Vec<BulletView> {
    let mut bullets: Vec<(SpawnOrder, BulletView)> = world
        .query::<(&Bullet, &Position, &Body, &SpawnOrder)>()
        .iter()
        .filter(|(_, (bullet, _, body, _))| body.alive && bullet.owner == owner)
        .map(|(_, (_, pos, body, order))| {
            let radius = match body.shape {
                Shape::Circle { radius } => radius,
                Shape::Rect { width, .. } => width / 2.0,
            };
            (
                *order,
                BulletView {
                    position: *pos,
                    radius,
                },
            )
        })
        .collect();

    bullets.sort_by_key(|(order, _)| *order);
    bullets.into_iter().map(|(_, view)| view).collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<(SpawnOrder, ExplosionView)> = world
        .query::<(&Explosion, &Position, &Body, &SpawnOrder)>()
        .iter()
        .filter(|(_, (_, _, body, _))| body.alive)
        .map(|(_, (explosion, pos, _, order))| {
            (
                *order,
                ExplosionView {
                    position: *pos,
                    size: explosion.size,
                    radius: explosion.radius,
                    alpha: explosion.alpha,
                },
            )
        })
        .collect();

    explosions.sort_by_key(|(order, _)| *order);
    explosions.into_iter().map(|(_, view)| view).collect()
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut power_ups: Vec<(SpawnOrder, PowerUpView)> = world
        .query::<(&PowerUp, &Position, &Body, &SpawnOrder)>()
        .iter()
        .filter(|(_, (_, _, body, _))| body.alive)
        .map(|(_, (power_up, pos, body, order))| {
            (
                *order,
                PowerUpView {
                    position: *pos,
                    size: body.shape.width(),
                    kind: power_up.kind,
                },
            )
        })
        .collect();

    power_ups.sort_by_key(|(order, _)| *order);
    power_ups.into_iter().map(|(_, view)| view).collect()
}
