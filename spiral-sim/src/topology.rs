//! The Topology: concentric rings of cells and the neighbor rules between them.
//!
//! Ring i holds `Nc(i) = 6*(i+1) - 2` cells arranged in a closed cycle.
//! Adjacent rings have different cell counts, so radial neighbors are found
//! by proportional index mapping rather than by equal index.
//!
//! Everything here is deterministic and free of randomness.

use crate::constants::{CELLS_PER_RING, CELL_COUNT_OFFSET};

/// Number of cells in ring `ring`: `6*(ring+1) - 2`.
///
/// Has no failure mode; callers are responsible for keeping `ring` inside
/// the grid they simulate.
///
/// ```
/// use spiral_sim::topology::cell_count;
/// assert_eq!(cell_count(0), 4);
/// assert_eq!(cell_count(1), 10);
/// assert_eq!(cell_count(2), 16);
/// ```
pub fn cell_count(ring: usize) -> usize {
    CELLS_PER_RING * (ring + 1) - CELL_COUNT_OFFSET
}

/// Same-ring neighbors of cell `cell` in ring `ring`, as `(left, right)`.
///
/// Every ring is a closed cycle, so index 0 and index `Nc-1` are adjacent.
pub fn same_ring_neighbors(ring: usize, cell: usize) -> (usize, usize) {
    let nc = cell_count(ring);
    let left = (cell + nc - 1) % nc;
    let right = (cell + 1) % nc;
    (left, right)
}

/// Map cell `cell` of ring `ring` onto a neighboring ring holding `target_nc` cells.
///
/// Returns `[k0, k1]` where `k0 = floor(cell * target_nc / Nc(ring))` and
/// `k1 = (k0 + 1) mod target_nc`. The mapping is proportional, so the two
/// candidates approximate the nearest radial neighbors.
pub fn cross_ring_neighbors(ring: usize, cell: usize, target_nc: usize) -> [usize; 2] {
    let nc = cell_count(ring);
    let k0 = cell * target_nc / nc;
    let k1 = (k0 + 1) % target_nc;
    [k0, k1]
}

/// Radial direction of a cross-ring step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward ring `i - 1`
    Inward,
    /// Toward ring `i + 1`
    Outward,
}

/// A fixed grid of `ring_count` concentric rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    ring_count: usize,
}

impl Topology {
    /// Create a topology of `ring_count` rings. Zero rings is allowed here;
    /// the engine config rejects it.
    pub fn new(ring_count: usize) -> Self {
        Self { ring_count }
    }

    /// Number of rings (Nr).
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// True if `ring` is in `[0, Nr)`.
    pub fn contains_ring(&self, ring: usize) -> bool {
        ring < self.ring_count
    }

    /// True if `(ring, cell)` addresses a real cell.
    pub fn contains(&self, ring: usize, cell: usize) -> bool {
        self.contains_ring(ring) && cell < cell_count(ring)
    }

    /// Cell counts for every ring, innermost first.
    pub fn cell_counts(&self) -> impl Iterator<Item = usize> {
        (0..self.ring_count).map(cell_count)
    }

    /// Total number of cells across all rings.
    pub fn total_cells(&self) -> usize {
        self.cell_counts().sum()
    }

    /// Index of the ring one step in `direction` from `ring`, if it exists.
    ///
    /// Ring 0 has no inner ring and ring `Nr-1` has no outer ring.
    pub fn adjacent_ring(&self, ring: usize, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Inward => ring.checked_sub(1),
            Direction::Outward => Some(ring + 1).filter(|&r| self.contains_ring(r)),
        }
    }

    /// Radial neighbors of `(ring, cell)` in the adjacent ring toward `direction`.
    ///
    /// Returns the target ring index and the candidate cells that fall inside
    /// it. Candidates are bounds checked in both directions; with the mod
    /// wrap in `cross_ring_neighbors` they never fall outside, and debug
    /// builds assert so.
    pub fn radial_neighbors(
        &self,
        ring: usize,
        cell: usize,
        direction: Direction,
    ) -> Option<(usize, impl Iterator<Item = usize>)> {
        let target = self.adjacent_ring(ring, direction)?;
        let target_nc = cell_count(target);
        let candidates = cross_ring_neighbors(ring, cell, target_nc);
        debug_assert!(
            candidates.iter().all(|&k| k < target_nc),
            "radial candidates {:?} out of range for ring {} ({} cells)",
            candidates,
            target,
            target_nc
        );
        Some((target, candidates.into_iter().filter(move |&k| k < target_nc)))
    }
}
