//! The set of positions where placement is permitted.

use indexmap::IndexSet;
use plotgrid_core::Pos;

/// Legal placement positions, independent of occupancy.
///
/// Iteration follows insertion order so that anything derived from a
/// spot set (frontiers, benchmark scripts, test fixtures) is
/// deterministic across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpotSet {
    spots: IndexSet<Pos>,
}

impl SpotSet {
    /// Create an empty spot set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty spot set with room for `capacity` spots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            spots: IndexSet::with_capacity(capacity),
        }
    }

    /// Add a spot. Returns `false` if it was already present.
    pub fn insert(&mut self, pos: Pos) -> bool {
        self.spots.insert(pos)
    }

    /// Remove a spot, preserving the order of the rest.
    pub fn remove(&mut self, pos: Pos) -> bool {
        self.spots.shift_remove(&pos)
    }

    /// Whether `pos` is a legal spot.
    pub fn contains(&self, pos: Pos) -> bool {
        self.spots.contains(&pos)
    }

    /// Number of legal spots.
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Whether there are no legal spots.
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Spots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.spots.iter().copied()
    }

    /// Inclusive bounding box `(min, max)`, or `None` when empty.
    pub fn bounds(&self) -> Option<(Pos, Pos)> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| {
            (
                Pos::new(lo.x.min(p.x), lo.y.min(p.y)),
                Pos::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl FromIterator<Pos> for SpotSet {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        Self {
            spots: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pos> for SpotSet {
    fn extend<I: IntoIterator<Item = Pos>>(&mut self, iter: I) {
        self.spots.extend(iter);
    }
}
