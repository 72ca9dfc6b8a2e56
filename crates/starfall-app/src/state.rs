//! State shared between the game loop thread and its driver.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use starfall_core::commands::Intent;
use starfall_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An intent to merge into the next tick.
    Intent(Intent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop thread.
///
/// `latest_snapshot` is refreshed after every tick for polling readers;
/// commands go through `command_tx`.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub(crate) thread: JoinHandle<()>,
}

impl LoopHandle {
    /// Forward an intent to the loop. Returns `false` once the loop has exited.
    pub fn send_intent(&self, intent: Intent) -> bool {
        self.command_tx.send(GameLoopCommand::Intent(intent)).is_ok()
    }

    /// Most recent snapshot published by the loop, if any tick has run.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }

    /// Ask the loop to stop and wait for the thread to finish.
    pub fn shutdown(self) -> anyhow::Result<()> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.thread
            .join()
            .map_err(|_| anyhow::anyhow!("game loop thread panicked"))
    }
}
