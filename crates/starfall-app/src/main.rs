use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use starfall_app::config::Args;
use starfall_app::game_loop;
use starfall_app::pilot::{Autopilot, InputSource};
use starfall_app::tape::Tape;
use starfall_sim::SimulationEngine;

fn main() -> Result<()> {
    // Snapshots may be streamed to stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.resolve()?;
    info!(seed = config.seed, ticks = config.ticks, realtime = config.realtime, "starting run");

    let mut input: Box<dyn InputSource> = match &config.tape {
        Some(path) => {
            let tape = Tape::load(path)?;
            info!(frames = tape.len(), "replaying tape");
            Box::new(tape)
        }
        None => Box::new(Autopilot::new(config.area, config.auto_restart)),
    };

    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create output: {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = if config.realtime {
        game_loop::run_realtime(config.sim_config(), input.as_mut(), config.ticks, out.as_mut())?
    } else {
        let mut engine = SimulationEngine::new(config.sim_config());
        game_loop::run_batch(&mut engine, input.as_mut(), config.ticks, out.as_mut())?
    };

    eprintln!("Run complete.");
    eprintln!("  Ticks:             {}", summary.ticks);
    eprintln!("  Final score:       {}", summary.final_score);
    eprintln!("  Final level:       {}", summary.final_level);
    eprintln!("  Best score:        {}", summary.best_score);
    eprintln!("  Enemies destroyed: {}", summary.enemies_destroyed);
    eprintln!("  Shots fired:       {}", summary.shots_fired);
    eprintln!("  Games over:        {}", summary.games_over);
    eprintln!("  Restarts:          {}", summary.restarts);

    Ok(())
}
