use spiral_sim::topology::{
    cell_count, cross_ring_neighbors, same_ring_neighbors, Direction, Topology,
};

#[test]
fn test_cell_counts_for_three_rings() {
    let counts: Vec<usize> = Topology::new(3).cell_counts().collect();
    assert_eq!(counts, vec![4, 10, 16]);
}

#[test]
fn test_same_ring_neighbors_in_range_and_adjacent() {
    for i in 0..30 {
        let nc = cell_count(i);
        for j in 0..nc {
            let (left, right) = same_ring_neighbors(i, j);
            assert!(left < nc && right < nc, "Neighbors of ({}, {}) out of range", i, j);
            assert_eq!(right, (j + 1) % nc);
            assert_eq!(left, (j + nc - 1) % nc);
            // left and right are inverse steps
            assert_eq!(same_ring_neighbors(i, right).0, j);
            assert_eq!(same_ring_neighbors(i, left).1, j);
        }
    }
}

#[test]
fn test_cross_ring_mapping_is_monotone_and_in_range() {
    for i in 0..30 {
        let nc = cell_count(i);
        let targets = [i.checked_sub(1).map(cell_count), Some(cell_count(i + 1))];
        for target_nc in targets.into_iter().flatten() {
            let mut prev = 0;
            for j in 0..nc {
                let [k0, k1] = cross_ring_neighbors(i, j, target_nc);
                assert!(k0 >= prev, "k0 must not decrease: ring {} cell {}", i, j);
                assert!(k0 < target_nc && k1 < target_nc);
                prev = k0;
            }
        }
    }
}

#[test]
fn test_outward_candidates_never_wrap() {
    // Outer rings are larger, so k0 + 1 always stays inside without the mod.
    for i in 0..50 {
        let target_nc = cell_count(i + 1);
        for j in 0..cell_count(i) {
            let [k0, k1] = cross_ring_neighbors(i, j, target_nc);
            assert_eq!(k1, k0 + 1, "Outward candidate wrapped at ring {} cell {}", i, j);
        }
    }
}

#[test]
fn test_radial_neighbors_respect_boundaries() {
    let topo = Topology::new(3);
    assert!(topo.radial_neighbors(0, 0, Direction::Inward).is_none());
    assert!(topo.radial_neighbors(2, 0, Direction::Outward).is_none());

    let (target, candidates) = topo.radial_neighbors(1, 0, Direction::Inward).unwrap();
    assert_eq!(target, 0);
    assert_eq!(candidates.collect::<Vec<_>>(), vec![0, 1]);

    let (target, candidates) = topo.radial_neighbors(1, 0, Direction::Outward).unwrap();
    assert_eq!(target, 2);
    assert_eq!(candidates.collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn test_contains() {
    let topo = Topology::new(2);
    assert!(topo.contains(0, 3));
    assert!(!topo.contains(0, 4));
    assert!(topo.contains(1, 9));
    assert!(!topo.contains(2, 0));
}
