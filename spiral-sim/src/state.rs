//! The ActivationState: per-ring binary cell states.
//!
//! Ring i is a `Vec<bool>` of length `Nc(i)`; the position in the vector is
//! the cell index, which fixes both angular position and adjacency.

use serde::{Deserialize, Serialize};

use crate::error::{SpiralError, SpiralResult};
use crate::topology::{cell_count, Topology};

/// Binary activation state of every cell in the grid.
///
/// Deserialization goes through `from_rings`, so a decoded state always has
/// ring i of length `Nc(i)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct ActivationState {
    rings: Vec<Vec<bool>>,
}

/// Wire form of `ActivationState` before its shape is checked.
#[derive(Deserialize)]
struct RawState {
    rings: Vec<Vec<bool>>,
}

impl TryFrom<RawState> for ActivationState {
    type Error = SpiralError;

    fn try_from(raw: RawState) -> SpiralResult<Self> {
        Self::from_rings(raw.rings)
    }
}

impl ActivationState {
    /// All-off state with every one of `ring_count` rings allocated at `Nc(i)`.
    pub fn off(ring_count: usize) -> Self {
        let rings = (0..ring_count)
            .map(|i| vec![false; cell_count(i)])
            .collect();
        Self { rings }
    }

    /// Wrap caller-built rings, checking each ring length against `Nc(i)`.
    pub fn from_rings(rings: Vec<Vec<bool>>) -> SpiralResult<Self> {
        for (i, ring) in rings.iter().enumerate() {
            let expected = cell_count(i);
            if ring.len() != expected {
                return Err(SpiralError::ShapeMismatch {
                    ring: i,
                    expected,
                    actual: ring.len(),
                });
            }
        }
        Ok(Self { rings })
    }

    /// Check that this state has exactly `ring_count` rings.
    ///
    /// A missing ring is reported as expecting `Nc(i)` cells but holding 0;
    /// an extra ring as expecting 0 cells.
    pub fn check_ring_count(&self, ring_count: usize) -> SpiralResult<()> {
        let held = self.rings.len();
        if held < ring_count {
            return Err(SpiralError::ShapeMismatch {
                ring: held,
                expected: cell_count(held),
                actual: 0,
            });
        }
        if held > ring_count {
            return Err(SpiralError::ShapeMismatch {
                ring: ring_count,
                expected: 0,
                actual: self.rings[ring_count].len(),
            });
        }
        Ok(())
    }

    /// All-off state of `ring_count` rings with the listed `(ring, cell)` pairs on.
    ///
    /// Pairs outside the grid are rejected.
    pub fn with_active(ring_count: usize, cells: &[(usize, usize)]) -> SpiralResult<Self> {
        let topology = Topology::new(ring_count);
        let mut state = Self::off(ring_count);
        for &(i, j) in cells {
            if !topology.contains(i, j) {
                return Err(SpiralError::config(format!(
                    "cell ({}, {}) is outside a grid of {} rings",
                    i, j, ring_count
                )));
            }
            state.activate(i, j);
        }
        Ok(state)
    }

    /// Number of rings held.
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Cell states of ring `ring`, or `None` past the outermost ring.
    pub fn ring(&self, ring: usize) -> Option<&[bool]> {
        self.rings.get(ring).map(Vec::as_slice)
    }

    /// All rings, innermost first.
    pub fn rings(&self) -> &[Vec<bool>] {
        &self.rings
    }

    /// True if cell `(ring, cell)` exists and is on.
    pub fn is_on(&self, ring: usize, cell: usize) -> bool {
        self.rings
            .get(ring)
            .and_then(|r| r.get(cell))
            .copied()
            .unwrap_or(false)
    }

    /// Turn cell `(ring, cell)` on. Returns false (and changes nothing) if the
    /// cell does not exist.
    pub fn activate(&mut self, ring: usize, cell: usize) -> bool {
        match self.rings.get_mut(ring).and_then(|r| r.get_mut(cell)) {
            Some(slot) => {
                *slot = true;
                true
            }
            None => false,
        }
    }

    /// Number of cells that are on.
    pub fn active_count(&self) -> usize {
        self.rings
            .iter()
            .map(|r| r.iter().filter(|&&on| on).count())
            .sum()
    }

    /// Number of cells in the grid.
    pub fn total_cells(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    /// True if no cell is on.
    pub fn is_all_off(&self) -> bool {
        self.rings.iter().all(|r| r.iter().all(|&on| !on))
    }

    /// `(ring, cell)` of every on cell, in ring then cell order.
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rings.iter().enumerate().flat_map(|(i, r)| {
            r.iter()
                .enumerate()
                .filter(|&(_, &on)| on)
                .map(move |(j, _)| (i, j))
        })
    }

    /// OR-merge `other` into `self`: a cell is on if it is on in either.
    ///
    /// Never clears a cell. Rings present in only one side are kept as is.
    pub fn merge(&mut self, other: &ActivationState) {
        for (mine, theirs) in self.rings.iter_mut().zip(&other.rings) {
            for (a, &b) in mine.iter_mut().zip(theirs) {
                *a |= b;
            }
        }
        let held = self.rings.len();
        if other.rings.len() > held {
            self.rings.extend_from_slice(&other.rings[held..]);
        }
    }

    /// True if this state has exactly the ring shape of `topology`.
    pub fn matches_topology(&self, topology: &Topology) -> bool {
        self.rings.len() == topology.ring_count()
            && self
                .rings
                .iter()
                .enumerate()
                .all(|(i, r)| r.len() == cell_count(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_preallocates_every_ring() {
        let state = ActivationState::off(3);
        assert_eq!(state.ring_count(), 3);
        assert_eq!(state.ring(0).map(<[bool]>::len), Some(4));
        assert_eq!(state.ring(1).map(<[bool]>::len), Some(10));
        assert_eq!(state.ring(2).map(<[bool]>::len), Some(16));
        assert!(state.is_all_off());
        assert!(state.matches_topology(&Topology::new(3)));
    }

    #[test]
    fn test_from_rings_rejects_wrong_length() {
        let err = ActivationState::from_rings(vec![vec![false; 4], vec![false; 9]]).unwrap_err();
        assert_eq!(
            err,
            SpiralError::ShapeMismatch { ring: 1, expected: 10, actual: 9 }
        );
    }

    #[test]
    fn test_check_ring_count_names_first_bad_ring() {
        let state = ActivationState::off(2);
        assert!(state.check_ring_count(2).is_ok());
        assert_eq!(
            state.check_ring_count(3).unwrap_err(),
            SpiralError::ShapeMismatch { ring: 2, expected: 16, actual: 0 }
        );
        assert_eq!(
            state.check_ring_count(1).unwrap_err(),
            SpiralError::ShapeMismatch { ring: 1, expected: 0, actual: 10 }
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_ring_length() {
        let err = serde_json::from_str::<ActivationState>(r#"{"rings": [[true, false]]}"#)
            .unwrap_err();
        assert!(
            err.to_string().contains("Shape mismatch in ring 0"),
            "Unexpected error: {}",
            err
        );

        let ok: ActivationState =
            serde_json::from_str(r#"{"rings": [[true, false, false, false]]}"#).unwrap();
        assert!(ok.is_on(0, 0));
    }

    #[test]
    fn test_activate_out_of_range_is_noop() {
        let mut state = ActivationState::off(2);
        assert!(!state.activate(0, 4));
        assert!(!state.activate(2, 0));
        assert!(state.is_all_off());
        assert!(state.activate(1, 9));
        assert!(state.is_on(1, 9));
    }

    #[test]
    fn test_active_cells_order() {
        let state = ActivationState::with_active(3, &[(2, 5), (0, 1), (1, 0)]).unwrap();
        let cells: Vec<_> = state.active_cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (2, 5)]);
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn test_with_active_rejects_outside_cell() {
        assert!(ActivationState::with_active(2, &[(0, 4)]).is_err());
        assert!(ActivationState::with_active(2, &[(2, 0)]).is_err());
    }

    #[test]
    fn test_merge_is_or() {
        let mut a = ActivationState::with_active(2, &[(0, 0)]).unwrap();
        let b = ActivationState::with_active(2, &[(1, 3), (0, 0)]).unwrap();
        a.merge(&b);
        assert!(a.is_on(0, 0));
        assert!(a.is_on(1, 3));
        assert_eq!(a.active_count(), 2);

        // Merging an all-off state clears nothing
        a.merge(&ActivationState::off(2));
        assert_eq!(a.active_count(), 2);
    }
}
