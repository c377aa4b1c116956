//! Spiral arm simulation runner.
//!
//! Seeds a ring grid with sparse random activations and lets activation
//! spread stochastically for a fixed number of steps.
//!
//! Usage: spiral-sim --rings 110 --steps 30 --spread-prob 0.314 [--seed 7] [--frames]

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use tracing::{info, Level};

use spiral_sim::constants::*;
use spiral_sim::{ActivationState, SimConfig, Simulation};

#[derive(Parser)]
#[command(name = "spiral-sim", about = "Stochastic activation spreading over concentric rings")]
struct Args {
    /// JSON config file; command line values override it
    #[arg(long, short)]
    config: Option<String>,

    /// Number of rings
    #[arg(long, short)]
    rings: Option<usize>,

    /// Number of time steps
    #[arg(long, short, default_value_t = DEFAULT_STEPS)]
    steps: u64,

    /// Probability an "on" cell activates each neighbor
    #[arg(long)]
    spread_prob: Option<f64>,

    /// Probability a cell starts "on"
    #[arg(long)]
    initial_prob: Option<f64>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Log progress every N steps (0 = never), with or without --frames
    #[arg(long, default_value_t = DEFAULT_LOG_INTERVAL)]
    log_interval: u64,

    /// Write one JSON line per step to stdout for an external renderer
    #[arg(long)]
    frames: bool,

    /// Only log warnings
    #[arg(long, short)]
    quiet: bool,
}

/// One line of `--frames` output.
#[derive(Serialize)]
struct Frame<'a> {
    tick: u64,
    active: usize,
    state: &'a ActivationState,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.quiet { Level::WARN } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => SimConfig::default(),
    };
    if let Some(rings) = args.rings {
        config.ring_count = rings;
    }
    if let Some(p) = args.spread_prob {
        config.spread_probability = p;
    }
    if let Some(p) = args.initial_prob {
        config.initial_on_probability = p;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    info!(
        rings = config.ring_count,
        steps = args.steps,
        spread_prob = config.spread_probability,
        initial_prob = config.initial_on_probability,
        seed = ?config.seed,
        "starting spiral simulation"
    );

    let mut sim = Simulation::new(&config).context("Invalid simulation config")?;
    info!(
        initially_on = sim.engine().current_state().active_count(),
        "grid seeded"
    );

    let coverage = if args.frames {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let mut write_err: Option<io::Error> = None;
        let coverage = sim.run_with(args.steps, args.log_interval, |tick, state| {
            if write_err.is_some() {
                return;
            }
            let frame = Frame {
                tick,
                active: state.active_count(),
                state,
            };
            let line = serde_json::to_string(&frame).map_err(io::Error::from);
            if let Err(e) = line.and_then(|l| writeln!(out, "{}", l)) {
                write_err = Some(e);
            }
        });
        if let Some(e) = write_err {
            return Err(e).context("Failed to write frame");
        }
        out.flush()?;
        coverage
    } else {
        sim.run(args.steps, args.log_interval)
    };

    info!(
        ticks = sim.tick(),
        coverage,
        extinct = sim.is_extinct(),
        "simulation finished"
    );
    if sim.is_extinct() {
        info!("activation died out; later steps stay all-off");
    }

    Ok(())
}
