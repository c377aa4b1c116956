//! Constants for the spiral arm activation simulation.
//!
//! Ring topology: ring i holds 6*(i+1) - 2 cells, so the grid grows
//! outward like a hexagonal tiling bent into circles.
//! Cell states are binary. Activation spreads stochastically.

// =============================================================================
// Ring Topology
// =============================================================================

/// Cells added per ring step outward.
pub const CELLS_PER_RING: usize = 6;

/// Subtracted from `CELLS_PER_RING * (i + 1)` to get the cell count of ring i.
/// Ring 0 therefore holds 4 cells, ring 1 holds 10, ring 2 holds 16.
pub const CELL_COUNT_OFFSET: usize = 2;

/// Upper bound on spread trials per active cell per step:
/// 2 same-ring + 2 inner-ring + 2 outer-ring.
pub const MAX_TRIALS_PER_CELL: usize = 6;

// =============================================================================
// Simulation Defaults
// =============================================================================

/// Default number of concentric rings.
pub const DEFAULT_RING_COUNT: usize = 110;

/// Default number of time steps for a run.
pub const DEFAULT_STEPS: u64 = 30;

/// Default probability that an "on" cell activates a given neighbor.
pub const DEFAULT_SPREAD_PROBABILITY: f64 = 0.314;

/// Default probability that a cell starts "on" (favoring "off").
pub const DEFAULT_INITIAL_ON_PROBABILITY: f64 = 0.01;

/// Default progress logging interval, in steps.
pub const DEFAULT_LOG_INTERVAL: u64 = 1;
