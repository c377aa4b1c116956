//! The ActivationEngine: owns the grid state and advances it one step at a time.
//!
//! Each step, every "on" cell makes up to six independent spread attempts:
//! - left and right neighbors in its own ring
//! - two proportional neighbors in the inner ring (skipped on ring 0)
//! - two proportional neighbors in the outer ring (skipped on the last ring)
//!
//! The step output holds only the cells activated during that step. Sources
//! that do not re-trigger are not carried forward. The engine also keeps a
//! cumulative OR-merged view of every cell that has ever been on.

use rand::rngs::StdRng;
use tracing::debug;

use crate::config::SimConfig;
use crate::error::SpiralResult;
use crate::state::ActivationState;
use crate::topology::{cell_count, same_ring_neighbors, Direction, Topology};
use crate::utils::{seeded_rng, trial};

/// Stochastic activation spreading over a ring grid.
#[derive(Debug, Clone)]
pub struct ActivationEngine {
    topology: Topology,
    spread_probability: f64,

    /// Owned random source. Every draw in the run comes from here.
    rng: StdRng,

    /// Initial state before the first step, then the latest step output.
    current: ActivationState,

    /// OR of the initial state and every step output so far.
    cumulative: ActivationState,

    /// Steps completed.
    tick: u64,
}

impl ActivationEngine {
    /// Build an engine and draw its initial state: each cell independently on
    /// with probability `initial_on_probability`.
    pub fn new(config: &SimConfig) -> SpiralResult<Self> {
        config.validate()?;
        let topology = Topology::new(config.ring_count);
        let mut rng = seeded_rng(config.seed);

        let mut initial = ActivationState::off(config.ring_count);
        for i in 0..config.ring_count {
            for j in 0..cell_count(i) {
                if trial(&mut rng, config.initial_on_probability) {
                    initial.activate(i, j);
                }
            }
        }

        debug!(
            rings = config.ring_count,
            cells = topology.total_cells(),
            initially_on = initial.active_count(),
            seed = ?config.seed,
            "activation engine initialized"
        );

        Ok(Self::assemble(topology, config.spread_probability, rng, initial))
    }

    /// Build an engine from a caller-supplied initial state.
    ///
    /// `initial_on_probability` is validated but unused. The state must have
    /// exactly `ring_count` rings; ring lengths are guaranteed by
    /// `ActivationState` itself.
    pub fn with_state(config: &SimConfig, initial: ActivationState) -> SpiralResult<Self> {
        config.validate()?;
        let topology = Topology::new(config.ring_count);
        initial.check_ring_count(topology.ring_count())?;

        debug!(
            rings = config.ring_count,
            initially_on = initial.active_count(),
            "activation engine initialized from supplied state"
        );

        let rng = seeded_rng(config.seed);
        Ok(Self::assemble(topology, config.spread_probability, rng, initial))
    }

    fn assemble(
        topology: Topology,
        spread_probability: f64,
        rng: StdRng,
        initial: ActivationState,
    ) -> Self {
        Self {
            topology,
            spread_probability,
            rng,
            cumulative: initial.clone(),
            current: initial,
            tick: 0,
        }
    }

    /// Grid topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Spread probability per neighbor trial.
    pub fn spread_probability(&self) -> f64 {
        self.spread_probability
    }

    /// Steps completed so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Current state: the initial draw before any step, afterwards the cells
    /// activated by the most recent step.
    pub fn current_state(&self) -> &ActivationState {
        &self.current
    }

    /// Every cell that has been on at any point, initial state included.
    pub fn cumulative_state(&self) -> &ActivationState {
        &self.cumulative
    }

    /// Advance one step and return the newly activated cells.
    ///
    /// Sources are visited ring by ring, cell by cell, and each source draws
    /// its trials in a fixed order (left, right, inner pair, outer pair), so a
    /// seeded engine always produces the same sequence. Several sources
    /// hitting the same target simply leave it on.
    pub fn step(&mut self) -> ActivationState {
        let next = Self::spread(
            &self.topology,
            self.spread_probability,
            &mut self.rng,
            &self.current,
        );
        self.cumulative.merge(&next);
        self.current = next.clone();
        self.tick += 1;
        next
    }

    fn spread(
        topology: &Topology,
        p: f64,
        rng: &mut StdRng,
        current: &ActivationState,
    ) -> ActivationState {
        let mut next = ActivationState::off(topology.ring_count());

        for (i, j) in current.active_cells() {
            let (left, right) = same_ring_neighbors(i, j);
            if trial(rng, p) {
                next.activate(i, left);
            }
            if trial(rng, p) {
                next.activate(i, right);
            }

            for direction in [Direction::Inward, Direction::Outward] {
                if let Some((target, candidates)) = topology.radial_neighbors(i, j, direction) {
                    for k in candidates {
                        if trial(rng, p) {
                            next.activate(target, k);
                        }
                    }
                }
            }
        }

        next
    }
}
