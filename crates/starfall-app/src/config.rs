//! Run configuration: an optional TOML file overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use starfall_core::constants::TICK_RATE;
use starfall_core::types::PlayArea;
use starfall_sim::SimConfig;

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// RNG seed passed to the simulation.
    pub seed: u64,
    /// Number of ticks to run before exiting.
    pub ticks: u64,
    /// Pace ticks at the fixed tick rate on a dedicated thread.
    pub realtime: bool,
    /// Let the autopilot request a restart after game over.
    pub auto_restart: bool,
    /// Recorded intents to replay instead of the autopilot.
    pub tape: Option<PathBuf>,
    /// Snapshot stream destination; stdout when unset.
    pub output: Option<PathBuf>,
    pub area: PlayArea,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: SimConfig::default().seed,
            ticks: TICK_RATE as u64 * 60,
            realtime: false,
            auto_restart: true,
            tape: None,
            output: None,
            area: PlayArea::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Load a TOML config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in config file {}", path.display()))
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            area: self.area,
        }
    }
}

/// Command-line flags. Anything set here wins over the config file.
#[derive(Parser, Debug, Default)]
#[command(name = "starfall", version, about = "Run the Starfall combat simulation headlessly")]
pub struct Args {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Ticks to simulate
    #[arg(long)]
    pub ticks: Option<u64>,
    /// JSON-lines intent tape to replay
    #[arg(long)]
    pub tape: Option<PathBuf>,
    /// Write snapshots here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Run at the fixed tick rate instead of as fast as possible
    #[arg(long)]
    pub realtime: bool,
    /// Stay on the game over screen instead of restarting
    #[arg(long)]
    pub no_auto_restart: bool,
}

impl Args {
    /// Load the config file (if any) and apply flag overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let base = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        Ok(self.apply(base))
    }

    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        if let Some(tape) = &self.tape {
            config.tape = Some(tape.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        config.realtime |= self.realtime;
        if self.no_auto_restart {
            config.auto_restart = false;
        }
        config
    }
}
