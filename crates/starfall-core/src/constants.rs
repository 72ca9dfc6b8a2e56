//! Simulation constants and tuning parameters.
//!
//! All timers and speeds are expressed in ticks, never wall-clock time.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play area ---

pub const AREA_WIDTH: f32 = 800.0;
pub const AREA_HEIGHT: f32 = 600.0;

// --- Player ---

pub const PLAYER_WIDTH: f32 = 64.0;
pub const PLAYER_HEIGHT: f32 = 64.0;

/// Gap between the ship's bottom edge and the bottom of the play area at spawn.
pub const PLAYER_SPAWN_MARGIN: f32 = 20.0;

/// Units moved per tick per unit of intent.
pub const PLAYER_BASE_SPEED: f32 = 5.0;

pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Ticks between player shots.
pub const PLAYER_SHOOT_COOLDOWN: u32 = 15;

// --- Enemies ---

pub const ENEMY_WIDTH: f32 = 50.0;
pub const ENEMY_HEIGHT: f32 = 50.0;
pub const ENEMY_MAX_HEALTH: u32 = 30;

/// Vertical band (inclusive) where fresh enemies appear.
pub const ENEMY_SPAWN_Y_MIN: i32 = 50;
pub const ENEMY_SPAWN_Y_MAX: i32 = 200;

/// Vertical band (inclusive, above the visible area) where enemies that
/// fell off the bottom are recycled to.
pub const ENEMY_RECYCLE_Y_MIN: i32 = -100;
pub const ENEMY_RECYCLE_Y_MAX: i32 = -50;

/// Horizontal speed magnitude range; sign is chosen uniformly.
pub const ENEMY_SPEED_X_MIN: f32 = 0.5;
pub const ENEMY_SPEED_X_MAX: f32 = 2.0;

/// Downward drift range.
pub const ENEMY_SPEED_Y_MIN: f32 = 0.2;
pub const ENEMY_SPEED_Y_MAX: f32 = 0.5;

/// Delay before an enemy's first shot (inclusive tick range).
pub const ENEMY_FIRST_SHOT_MIN: u32 = 30;
pub const ENEMY_FIRST_SHOT_MAX: u32 = 120;

/// Delay between subsequent enemy shots (inclusive tick range).
pub const ENEMY_SHOT_INTERVAL_MIN: u32 = 60;
pub const ENEMY_SHOT_INTERVAL_MAX: u32 = 180;

// --- Projectiles ---

pub const PLAYER_BULLET_RADIUS: f32 = 5.0;
pub const PLAYER_BULLET_SPEED: f32 = 7.0;
pub const ENEMY_BULLET_RADIUS: f32 = 4.0;
pub const ENEMY_BULLET_SPEED: f32 = 5.0;

/// Damage dealt by any bullet hit.
pub const BULLET_DAMAGE: u32 = 10;

// --- Explosions ---

pub const EXPLOSION_START_ALPHA: u8 = 255;
pub const EXPLOSION_GROWTH_RATE: f32 = 2.0;
pub const EXPLOSION_FADE_RATE: u8 = 10;
pub const SMALL_EXPLOSION_RADIUS: f32 = 5.0;
pub const SMALL_EXPLOSION_MAX_RADIUS: f32 = 30.0;
pub const LARGE_EXPLOSION_RADIUS: f32 = 10.0;
pub const LARGE_EXPLOSION_MAX_RADIUS: f32 = 45.0;

// --- Power-ups ---

pub const POWER_UP_SIZE: f32 = 25.0;
pub const POWER_UP_FALL_SPEED: f32 = 2.0;

/// Probability that a destroyed enemy drops a power-up.
pub const POWER_UP_DROP_CHANCE: f64 = 0.2;

pub const POWER_UP_HEAL_AMOUNT: u32 = 25;
pub const POWER_UP_SPEED_BOOST: f32 = 1.0;

// --- Spawning ---

/// Enemies present at the start of every session.
pub const INITIAL_ENEMY_COUNT: usize = 5;

/// Ticks between enemy spawn attempts.
pub const ENEMY_SPAWN_INTERVAL: u32 = 180;

/// Enemy population cap is `ENEMY_CAP_BASE + level`.
pub const ENEMY_CAP_BASE: u32 = 5;

/// Ticks between random power-up spawns.
pub const POWER_UP_SPAWN_INTERVAL: u32 = 600;

// --- Scoring ---

pub const ENEMY_KILL_SCORE: u32 = 100;

/// Level `n` advances once score reaches `n * LEVEL_SCORE_STEP`.
pub const LEVEL_SCORE_STEP: u32 = 1000;
