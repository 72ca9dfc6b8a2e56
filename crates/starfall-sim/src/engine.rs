//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, consumes player intents,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use starfall_core::commands::Intent;
use starfall_core::enums::GamePhase;
use starfall_core::events::GameEvent;
use starfall_core::state::GameStateSnapshot;
use starfall_core::types::{PlayArea, SimTime};

use crate::score::ScoreState;
use crate::systems;
use crate::systems::spawner::SpawnTimers;
use crate::world_setup::{self, SpawnSerial};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same intents = same simulation.
    pub seed: u64,
    /// Dimensions of the play area.
    pub area: PlayArea,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            area: PlayArea::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    area: PlayArea,
    rng: ChaCha8Rng,
    serial: SpawnSerial,
    pending_intent: Intent,
    spawn_timers: SpawnTimers,
    score: ScoreState,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine with a fresh session already in progress.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::Playing,
            area: config.area,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            serial: SpawnSerial::default(),
            pending_intent: Intent::idle(),
            spawn_timers: SpawnTimers::default(),
            score: ScoreState::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.start_session();
        info!(seed = config.seed, "session started");
        engine
    }

    /// Store an intent for the next tick boundary. Submissions before the
    /// same tick are merged.
    pub fn submit_intent(&mut self, intent: Intent) {
        self.pending_intent.merge(intent);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        let intent = std::mem::take(&mut self.pending_intent);

        match self.phase {
            GamePhase::Playing => {
                self.run_systems(&intent);
                self.time.advance();
            }
            GamePhase::GameOver => {
                if intent.restart {
                    self.reset();
                }
            }
        }

        self.snapshot()
    }

    /// Submit `intent` and advance one tick.
    pub fn step(&mut self, intent: Intent) -> GameStateSnapshot {
        self.submit_intent(intent);
        self.tick()
    }

    /// Start a fresh session: new player, initial enemies, empty
    /// projectile/effect collections, counters and spawn timers zeroed.
    /// The best score and the RNG stream carry over.
    pub fn reset(&mut self) {
        self.start_session();
        self.events.push(GameEvent::Restarted);
        info!(best_score = self.score.best_score, "session restarted");
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.score, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn spawn_timers(&self) -> SpawnTimers {
        self.spawn_timers
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage exact scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    #[cfg(test)]
    pub fn spawn_timers_mut(&mut self) -> &mut SpawnTimers {
        &mut self.spawn_timers
    }

    /// World, RNG, and spawn serial together, for staging entities in tests.
    #[cfg(test)]
    pub fn parts_mut(&mut self) -> (&mut World, &mut ChaCha8Rng, &mut SpawnSerial) {
        (&mut self.world, &mut self.rng, &mut self.serial)
    }

    fn start_session(&mut self) {
        self.world.clear();
        self.phase = GamePhase::Playing;
        self.spawn_timers = SpawnTimers::default();
        self.score.reset_session();
        self.pending_intent = Intent::idle();
        world_setup::setup_session(&mut self.world, &mut self.rng, &self.area, &mut self.serial);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, intent: &Intent) {
        // 1-2. Player movement, cooldown, and fire
        systems::player::run(
            &mut self.world,
            &self.area,
            intent,
            &mut self.serial,
            &mut self.score,
            &mut self.events,
        );
        // 3. Advance bullets, enemies, power-ups
        systems::movement::run(&mut self.world, &self.area);
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            &self.area,
            &mut self.serial,
            &mut self.events,
        );
        // 4. Collision detection, then combat resolution
        let contacts = systems::collision::run(&self.world);
        let outcome = systems::combat::run(
            &mut self.world,
            &contacts,
            &mut self.rng,
            &mut self.serial,
            &mut self.score,
            &mut self.events,
        );
        if !outcome.player_destroyed {
            // Drops from this tick's kills can be picked up immediately.
            let pickups = systems::collision::pickup_contacts(&self.world);
            systems::combat::run(
                &mut self.world,
                &pickups,
                &mut self.rng,
                &mut self.serial,
                &mut self.score,
                &mut self.events,
            );
        }
        // 5. Explosions, including the ones combat just created
        systems::effects::run(&mut self.world);
        // 6. Spawn scheduler
        let enemy_cap = self.score.enemy_cap();
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.area,
            &mut self.spawn_timers,
            enemy_cap,
            &mut self.serial,
            &mut self.events,
        );
        // 7. Level progression
        if let Some(level) = self.score.check_level_up() {
            info!(level, score = self.score.score, "level up");
            self.events.push(GameEvent::LevelUp { level });
        }
        // 8. Game over takes effect once the whole tick has run
        if outcome.player_destroyed {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.score.score,
            });
            info!(score = self.score.score, level = self.score.level, "game over");
        }
        // 9. Compact dead entities
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        debug_assert!(systems::spawner::live_enemy_count(&self.world) <= self.score.enemy_cap());
    }
}
