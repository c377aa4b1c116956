//! The Simulation: drives the ActivationEngine for a bounded number of steps.

use tracing::info;

use crate::config::SimConfig;
use crate::engine::ActivationEngine;
use crate::error::SpiralResult;
use crate::state::ActivationState;

/// The main simulation runner.
#[derive(Debug)]
pub struct Simulation {
    /// The activation engine being stepped
    engine: ActivationEngine,

    /// Newly activated cells per completed step
    pub activity_history: Vec<usize>,
}

impl Simulation {
    /// Create a new Simulation. Fails on an invalid config.
    pub fn new(config: &SimConfig) -> SpiralResult<Self> {
        Ok(Self::from_engine(ActivationEngine::new(config)?))
    }

    /// Wrap an already-built engine (e.g. one seeded with a scripted state).
    pub fn from_engine(engine: ActivationEngine) -> Self {
        Self {
            engine,
            activity_history: Vec::new(),
        }
    }

    /// Get a reference to the engine (for inspection).
    pub fn engine(&self) -> &ActivationEngine {
        &self.engine
    }

    /// Steps completed.
    pub fn tick(&self) -> u64 {
        self.engine.tick()
    }

    /// Execute one step. Returns the number of newly activated cells.
    pub fn step(&mut self) -> usize {
        let active = self.engine.step().active_count();
        self.activity_history.push(active);
        active
    }

    /// Run until `max_steps` steps have completed, logging every
    /// `log_interval` steps (0 disables logging). Returns final coverage.
    pub fn run(&mut self, max_steps: u64, log_interval: u64) -> f64 {
        while self.tick() < max_steps {
            let active = self.step();
            self.log_progress(active, log_interval);
        }

        self.coverage()
    }

    /// True if the step just completed falls on a `log_interval` boundary.
    /// An interval of 0 never logs.
    pub fn progress_due(&self, log_interval: u64) -> bool {
        log_interval > 0 && self.tick() > 0 && self.tick() % log_interval == 0
    }

    fn log_progress(&self, active: usize, log_interval: u64) {
        if self.progress_due(log_interval) {
            info!(
                tick = self.tick(),
                active,
                coverage = self.coverage(),
                "step"
            );
        }
    }

    /// Run until `max_steps`, handing every state to `observer` and logging
    /// progress like `run`.
    ///
    /// The observer sees `(0, initial state)` first when nothing has run yet,
    /// then `(tick, one-shot state)` after each step. This is the hook a
    /// renderer plugs into.
    pub fn run_with<F>(&mut self, max_steps: u64, log_interval: u64, mut observer: F) -> f64
    where
        F: FnMut(u64, &ActivationState),
    {
        if self.tick() == 0 {
            observer(0, self.engine.current_state());
        }
        while self.tick() < max_steps {
            let active = self.step();
            observer(self.tick(), self.engine.current_state());
            self.log_progress(active, log_interval);
        }
        self.coverage()
    }

    /// Fraction of all cells that have ever been on.
    pub fn coverage(&self) -> f64 {
        let cumulative = self.engine.cumulative_state();
        let total = cumulative.total_cells();
        if total == 0 {
            return 0.0;
        }
        cumulative.active_count() as f64 / total as f64
    }

    /// True if the current state is all-off: the initial draw before any
    /// step, afterwards the latest step output. Nothing can re-activate from
    /// an all-off state, so every later step is all-off too.
    pub fn is_extinct(&self) -> bool {
        self.engine.current_state().is_all_off()
    }
}
