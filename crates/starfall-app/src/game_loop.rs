//! Game loop drivers: batch runs and the paced game loop thread.
//!
//! Batch mode ticks as fast as possible. The paced loop owns its engine on a
//! dedicated thread running at `TICK_RATE`; intents arrive via an `mpsc`
//! channel and snapshots are published to shared state for polling and,
//! optionally, to a snapshot channel.

use std::io::Write;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use starfall_core::constants::TICK_RATE;
use starfall_core::events::GameEvent;
use starfall_core::state::GameStateSnapshot;
use starfall_sim::engine::{SimConfig, SimulationEngine};

use crate::pilot::InputSource;
use crate::state::{GameLoopCommand, LoopHandle};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Totals gathered while streaming a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub games_over: u32,
    pub restarts: u32,
    pub best_score: u32,
    pub final_score: u32,
    pub final_level: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
}

impl RunSummary {
    pub fn observe(&mut self, snapshot: &GameStateSnapshot) {
        self.ticks += 1;
        for event in &snapshot.events {
            match event {
                GameEvent::GameOver { .. } => self.games_over += 1,
                GameEvent::Restarted => self.restarts += 1,
                GameEvent::EnemyDestroyed { .. } => self.enemies_destroyed += 1,
                GameEvent::ShotFired => self.shots_fired += 1,
                _ => {}
            }
        }
        self.best_score = self.best_score.max(snapshot.hud.best_score).max(snapshot.hud.score);
        self.final_score = snapshot.hud.score;
        self.final_level = snapshot.hud.level;
    }
}

fn write_snapshot(out: &mut dyn Write, snapshot: &GameStateSnapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snapshot).context("failed to serialize snapshot")?;
    out.write_all(b"\n").context("failed to write snapshot")
}

/// Run `ticks` ticks back to back, streaming one JSON snapshot per line.
pub fn run_batch(
    engine: &mut SimulationEngine,
    input: &mut dyn InputSource,
    ticks: u64,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut last: Option<GameStateSnapshot> = None;

    for _ in 0..ticks {
        let intent = input.next_intent(last.as_ref());
        let snapshot = engine.step(intent);
        write_snapshot(out, &snapshot)?;
        summary.observe(&snapshot);
        last = Some(snapshot);
    }

    out.flush().context("failed to flush snapshot output")?;
    info!(ticks = summary.ticks, best_score = summary.best_score, "batch run finished");
    Ok(summary)
}

/// Spawns the paced game loop in a new thread.
///
/// Every snapshot is stored in the handle's shared state and, when
/// `snapshot_tx` is given, sent down that channel. The loop exits on
/// `Shutdown`, when the command channel disconnects, or when the snapshot
/// receiver is dropped.
pub fn spawn_game_loop(
    config: SimConfig,
    snapshot_tx: Option<mpsc::Sender<GameStateSnapshot>>,
) -> Result<LoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("starfall-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &shared, snapshot_tx);
        })
        .context("failed to spawn game loop thread")?;

    Ok(LoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    snapshot_tx: Option<mpsc::Sender<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Intent(intent)) => engine.submit_intent(intent),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. Stream it
        if let Some(tx) = &snapshot_tx {
            if tx.send(snapshot).is_err() {
                debug!("snapshot receiver dropped, stopping game loop");
                return;
            }
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset instead of catching up
            next_tick_time = now;
        }
    }
}

/// Run `ticks` ticks on the paced loop, feeding intents from `input` and
/// streaming snapshots as they arrive.
pub fn run_realtime(
    config: SimConfig,
    input: &mut dyn InputSource,
    ticks: u64,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let handle = spawn_game_loop(config, Some(snapshot_tx))?;
    let mut summary = RunSummary::default();

    handle.send_intent(input.next_intent(None));
    while summary.ticks < ticks {
        let Ok(snapshot) = snapshot_rx.recv() else {
            break;
        };
        write_snapshot(out, &snapshot)?;
        summary.observe(&snapshot);
        if !handle.send_intent(input.next_intent(Some(&snapshot))) {
            break;
        }
    }

    drop(snapshot_rx);
    handle.shutdown()?;
    out.flush().context("failed to flush snapshot output")?;
    info!(ticks = summary.ticks, best_score = summary.best_score, "realtime run finished");
    Ok(summary)
}
