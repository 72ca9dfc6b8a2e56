//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, enemies, projectiles, explosions, and power-ups
//! with their component bundles. All randomness comes from the engine's
//! seeded RNG.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::*;
use starfall_core::constants::*;
use starfall_core::enums::*;
use starfall_core::types::{PlayArea, Position, Velocity};

/// Hands out monotonically increasing spawn serials.
#[derive(Debug, Clone, Default)]
pub struct SpawnSerial(u64);

impl SpawnSerial {
    pub fn next(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.0);
        self.0 += 1;
        order
    }
}

/// Populate an empty world with the session start configuration:
/// one player and `INITIAL_ENEMY_COUNT` enemies.
pub fn setup_session(world: &mut World, rng: &mut ChaCha8Rng, area: &PlayArea, serial: &mut SpawnSerial) {
    spawn_player(world, area, serial);
    for _ in 0..INITIAL_ENEMY_COUNT {
        spawn_enemy(world, rng, area, serial);
    }
}

/// Spawn the player centered horizontally near the bottom edge.
pub fn spawn_player(world: &mut World, area: &PlayArea, serial: &mut SpawnSerial) -> Entity {
    let position = Position::new(
        area.width / 2.0 - PLAYER_WIDTH / 2.0,
        area.height - PLAYER_HEIGHT - PLAYER_SPAWN_MARGIN,
    );

    world.spawn((
        Player {
            speed: PLAYER_BASE_SPEED,
            health: PLAYER_MAX_HEALTH,
            shoot_cooldown: 0,
        },
        position,
        Body::rect(PLAYER_WIDTH, PLAYER_HEIGHT),
        serial.next(),
    ))
}

/// Spawn an enemy at a random position in the upper band of the area.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    area: &PlayArea,
    serial: &mut SpawnSerial,
) -> Entity {
    let x = random_column(rng, area.width, ENEMY_WIDTH);
    let y = rng.gen_range(ENEMY_SPAWN_Y_MIN..=ENEMY_SPAWN_Y_MAX) as f32;
    let velocity = random_enemy_velocity(rng);
    let shoot_timer = rng.gen_range(ENEMY_FIRST_SHOT_MIN..=ENEMY_FIRST_SHOT_MAX);

    world.spawn((
        Enemy {
            health: ENEMY_MAX_HEALTH,
            shoot_timer,
        },
        Position::new(x, y),
        velocity,
        Body::rect(ENEMY_WIDTH, ENEMY_HEIGHT),
        serial.next(),
    ))
}

/// Fresh drift for a new or recycled enemy: random horizontal direction,
/// slow downward speed.
pub fn random_enemy_velocity(rng: &mut ChaCha8Rng) -> Velocity {
    let sign = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
    let speed_x = sign * rng.gen_range(ENEMY_SPEED_X_MIN..ENEMY_SPEED_X_MAX);
    let speed_y = rng.gen_range(ENEMY_SPEED_Y_MIN..ENEMY_SPEED_Y_MAX);
    Velocity::new(speed_x, speed_y)
}

/// Random whole-unit x for a body of `width` that keeps it inside the area.
pub fn random_column(rng: &mut ChaCha8Rng, area_width: f32, width: f32) -> f32 {
    let max_x = (area_width - width).max(0.0) as i32;
    rng.gen_range(0..=max_x) as f32
}

/// Spawn a bullet centered at `position`, moving up for the player and
/// down for enemies.
pub fn spawn_bullet(
    world: &mut World,
    serial: &mut SpawnSerial,
    owner: BulletOwner,
    position: Position,
) -> Entity {
    let (radius, velocity) = match owner {
        BulletOwner::Player => (PLAYER_BULLET_RADIUS, Velocity::new(0.0, -PLAYER_BULLET_SPEED)),
        BulletOwner::Enemy => (ENEMY_BULLET_RADIUS, Velocity::new(0.0, ENEMY_BULLET_SPEED)),
    };

    world.spawn((
        Bullet { owner },
        position,
        velocity,
        Body::circle(radius),
        serial.next(),
    ))
}

/// Spawn an explosion centered at `position`.
pub fn spawn_explosion(
    world: &mut World,
    serial: &mut SpawnSerial,
    size: ExplosionSize,
    position: Position,
) -> Entity {
    let (radius, max_radius) = match size {
        ExplosionSize::Small => (SMALL_EXPLOSION_RADIUS, SMALL_EXPLOSION_MAX_RADIUS),
        ExplosionSize::Large => (LARGE_EXPLOSION_RADIUS, LARGE_EXPLOSION_MAX_RADIUS),
    };

    world.spawn((
        Explosion {
            size,
            radius,
            max_radius,
            alpha: EXPLOSION_START_ALPHA,
        },
        position,
        Body::circle(radius),
        serial.next(),
    ))
}

/// Spawn a power-up of a uniformly random kind with its top-left at `position`.
pub fn spawn_power_up(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    serial: &mut SpawnSerial,
    position: Position,
) -> (Entity, PowerUpKind) {
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    let entity = world.spawn((
        PowerUp { kind },
        position,
        Velocity::new(0.0, POWER_UP_FALL_SPEED),
        Body::rect(POWER_UP_SIZE, POWER_UP_SIZE),
        serial.next(),
    ));
    (entity, kind)
}

/// Spawn a power-up at a random column just above the visible area.
pub fn spawn_power_up_at_top(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    area: &PlayArea,
    serial: &mut SpawnSerial,
) -> (Entity, PowerUpKind) {
    let x = random_column(rng, area.width, POWER_UP_SIZE);
    spawn_power_up(world, rng, serial, Position::new(x, -POWER_UP_SIZE))
}
