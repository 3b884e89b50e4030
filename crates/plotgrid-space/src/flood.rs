//! Breadth-first traversal over orthogonally connected positions.

use indexmap::IndexSet;
use plotgrid_core::Pos;
use std::collections::VecDeque;

/// Collect every position reachable from `start` through orthogonal steps.
///
/// A position is traversable when `is_member` accepts it and it is not
/// `blocked`. The blocked position is treated as absent, which lets callers
/// ask "what would be connected if this tile were gone" without mutating
/// anything. The result is in visit (BFS) order and includes `start`;
/// it is empty when `start` itself is not traversable.
pub fn flood_fill(
    start: Pos,
    blocked: Option<Pos>,
    is_member: impl Fn(Pos) -> bool,
) -> IndexSet<Pos> {
    let mut visited = IndexSet::new();
    if Some(start) == blocked || !is_member(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbours() {
            if Some(next) == blocked || visited.contains(&next) || !is_member(next) {
                continue;
            }
            visited.insert(next);
            queue.push_back(next);
        }
    }
    visited
}

/// Partition `positions` into their 4-connected components.
///
/// Components are returned in the order their first member appears in
/// `positions`; each component lists its members in BFS order.
pub fn components(positions: &IndexSet<Pos>) -> Vec<IndexSet<Pos>> {
    let mut out: Vec<IndexSet<Pos>> = Vec::new();
    for &pos in positions {
        if out.iter().any(|c| c.contains(&pos)) {
            continue;
        }
        out.push(flood_fill(pos, None, |p| positions.contains(&p)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(cells: &[(i32, i32)]) -> IndexSet<Pos> {
        cells.iter().map(|&c| Pos::from(c)).collect()
    }

    #[test]
    fn flood_stops_at_blocked_cell() {
        let line = set(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        let reached = flood_fill(Pos::new(0, 0), Some(Pos::new(1, 0)), |p| line.contains(&p));
        assert_eq!(reached, set(&[(0, 0)]));

        let reached = flood_fill(Pos::new(3, 0), Some(Pos::new(1, 0)), |p| line.contains(&p));
        assert_eq!(reached, set(&[(3, 0), (2, 0)]));
    }

    #[test]
    fn flood_ignores_diagonals() {
        let cells = set(&[(0, 0), (1, 1)]);
        let reached = flood_fill(Pos::new(0, 0), None, |p| cells.contains(&p));
        assert_eq!(reached.len(), 1);
    }

    #[test]
    fn flood_from_non_member_is_empty() {
        let cells = set(&[(0, 0)]);
        assert!(flood_fill(Pos::new(5, 5), None, |p| cells.contains(&p)).is_empty());
        assert!(flood_fill(Pos::new(0, 0), Some(Pos::new(0, 0)), |p| cells.contains(&p)).is_empty());
    }

    #[test]
    fn flood_goes_around_a_blocked_cell_in_a_ring() {
        // 3x3 ring without its center: blocking one cell keeps it connected.
        let ring = set(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ]);
        let reached = flood_fill(Pos::new(0, 0), Some(Pos::new(1, 0)), |p| ring.contains(&p));
        assert_eq!(reached.len(), 7);
    }

    #[test]
    fn components_of_two_islands() {
        let cells = set(&[(0, 0), (5, 5), (0, 1), (5, 6), (9, 9)]);
        let comps = components(&cells);
        assert_eq!(comps.len(), 3);
        assert_eq!(comps[0], set(&[(0, 0), (0, 1)]));
        assert_eq!(comps[1], set(&[(5, 5), (5, 6)]));
        assert_eq!(comps[2], set(&[(9, 9)]));
    }

    #[test]
    fn components_of_empty_set() {
        assert!(components(&IndexSet::new()).is_empty());
    }

    proptest! {
        #[test]
        fn components_partition_their_input(
            cells in proptest::collection::vec((0i32..8, 0i32..8), 0..40),
        ) {
            let input: IndexSet<Pos> = cells.into_iter().map(Pos::from).collect();
            let comps = components(&input);
            let total: usize = comps.iter().map(|c| c.len()).sum();
            prop_assert_eq!(total, input.len());
            for (i, a) in comps.iter().enumerate() {
                for b in comps.iter().skip(i + 1) {
                    prop_assert!(a.is_disjoint(b));
                    // No member of one component touches a member of another.
                    for p in a {
                        prop_assert!(b.iter().all(|q| !p.is_adjacent(*q)));
                    }
                }
            }
        }
    }
}
