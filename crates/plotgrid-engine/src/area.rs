//! Connected groups of same-tag tiles.
//!
//! An [`Area`] owns the positions of one 4-connected region together
//! with the host handles placed there. Areas answer membership and
//! adjacency queries for the registry and, before a tile is removed,
//! work out whether the rest of the region stays connected.

use indexmap::{IndexMap, IndexSet};
use plotgrid_core::{AreaId, AreaTag, Pos};
use plotgrid_space::flood_fill;
use smallvec::SmallVec;

/// Result of [`Area::check_connectivity_without`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Connectivity {
    /// The remaining members still form one component.
    Intact,
    /// The remaining members fall apart. Each entry is the position set
    /// of one replacement area, in the order the removed tile's
    /// neighbours were examined. Empty when the removed tile was the
    /// only member.
    Split(SmallVec<[IndexSet<Pos>; 4]>),
}

impl Connectivity {
    /// Whether the area stays in one piece.
    pub fn is_intact(&self) -> bool {
        matches!(self, Self::Intact)
    }

    /// Number of replacement areas, or `None` when intact.
    pub fn part_count(&self) -> Option<usize> {
        match self {
            Self::Intact => None,
            Self::Split(parts) => Some(parts.len()),
        }
    }
}

/// A region of orthogonally connected tiles sharing one [`AreaTag`].
///
/// Members iterate in insertion order. The tag is fixed at construction.
#[derive(Clone, Debug)]
pub struct Area<H> {
    id: AreaId,
    tag: AreaTag,
    members: IndexMap<Pos, H>,
}

impl<H> Area<H> {
    /// Create an empty area.
    pub fn new(id: AreaId, tag: AreaTag) -> Self {
        Self {
            id,
            tag,
            members: IndexMap::new(),
        }
    }

    /// Slot identity of this area.
    pub fn id(&self) -> AreaId {
        self.id
    }

    /// The tag every member shares.
    pub fn tag(&self) -> AreaTag {
        self.tag
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the area has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `pos` is a member.
    pub fn contains(&self, pos: Pos) -> bool {
        self.members.contains_key(&pos)
    }

    /// The handle stored at `pos`.
    pub fn get(&self, pos: Pos) -> Option<&H> {
        self.members.get(&pos)
    }

    /// Member positions in insertion order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.members.keys().copied()
    }

    /// Members with their handles, in insertion order.
    pub fn tiles(&self) -> impl Iterator<Item = (Pos, &H)> + '_ {
        self.members.iter().map(|(pos, handle)| (*pos, handle))
    }

    /// Add a member.
    ///
    /// Returns `false` and leaves the existing handle untouched if `pos`
    /// is already a member; the rejected handle is dropped.
    pub fn insert(&mut self, pos: Pos, handle: H) -> bool {
        match self.members.entry(pos) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
        }
    }

    /// Whether a tile tagged `tag` at `pos` would join this area.
    ///
    /// True iff `pos` is not already a member, `tag` matches, and `pos`
    /// is orthogonally adjacent to at least one member. Diagonal contact
    /// never qualifies.
    pub fn is_eligible_neighbour(&self, pos: Pos, tag: AreaTag) -> bool {
        if tag != self.tag || self.contains(pos) {
            return false;
        }
        pos.neighbours().into_iter().any(|n| self.contains(n))
    }

    /// Absorb every member of `other`.
    ///
    /// The caller guarantees the two areas are disjoint and retires
    /// `other`'s id.
    pub fn merge_with(&mut self, other: Area<H>) {
        debug_assert!(
            other.members.keys().all(|p| !self.members.contains_key(p)),
            "merging overlapping areas {} and {}",
            self.id,
            other.id,
        );
        self.members.reserve(other.members.len());
        self.members.extend(other.members);
    }

    /// Delete `pos` and return its handle.
    ///
    /// Does not check connectivity; the caller has already established
    /// that the area stays in one piece.
    pub fn remove(&mut self, pos: Pos) -> Option<H> {
        self.members.shift_remove(&pos)
    }

    /// Work out, as if `pos` were already gone, whether the remaining
    /// members are still one component.
    ///
    /// Runs one breadth-first search per neighbour of `pos` that is a
    /// member and not yet covered by an earlier search, never stepping
    /// onto `pos`. The first search that reaches every remaining member
    /// short-circuits with [`Connectivity::Intact`]. Otherwise each
    /// search contributes one component to [`Connectivity::Split`].
    /// Each member is visited by at most one search. Read-only.
    pub fn check_connectivity_without(&self, pos: Pos) -> Connectivity {
        self.analyse_without(pos).0
    }

    /// Same as [`check_connectivity_without`](Self::check_connectivity_without),
    /// also returning the number of members the searches visited.
    pub(crate) fn analyse_without(&self, pos: Pos) -> (Connectivity, usize) {
        let remaining = if self.contains(pos) {
            self.len() - 1
        } else {
            self.len()
        };

        let mut found: SmallVec<[IndexSet<Pos>; 4]> = SmallVec::new();
        let mut visited = 0;
        for start in pos.neighbours() {
            if !self.contains(start) || found.iter().any(|c| c.contains(&start)) {
                continue;
            }
            let reached = flood_fill(start, Some(pos), |p| self.contains(p));
            visited += reached.len();
            if reached.len() == remaining {
                return (Connectivity::Intact, visited);
            }
            found.push(reached);
        }
        (Connectivity::Split(found), visited)
    }

    /// Consume the area, taking out `removed` and distributing the other
    /// members over one new area per component.
    ///
    /// `components` comes from [`Connectivity::Split`] on this area and
    /// `next_id` allocates the replacement ids. Handles are moved, never
    /// copied: the removed tile's handle is returned and every other
    /// handle ends up in exactly one replacement area. Members that
    /// `components` misses are regrouped into their own connected parts
    /// rather than dropped, and positions that are not members are
    /// ignored. Returns `Err(self)` unchanged if `removed` is not a member.
    pub(crate) fn split_into(
        self,
        removed: Pos,
        components: impl IntoIterator<Item = IndexSet<Pos>>,
        mut next_id: impl FnMut() -> AreaId,
    ) -> Result<(H, Vec<Area<H>>), Self> {
        let Self {
            id,
            tag,
            mut members,
        } = self;
        let Some(handle) = members.swap_remove(&removed) else {
            return Err(Self { id, tag, members });
        };

        let mut parts: Vec<Area<H>> = Vec::new();
        let mut take = |component: IndexSet<Pos>, members: &mut IndexMap<Pos, H>| {
            let mut part = Area::new(AreaId(0), tag);
            part.members.reserve(component.len());
            for p in component {
                if let Some(h) = members.swap_remove(&p) {
                    part.members.insert(p, h);
                }
            }
            if !part.is_empty() {
                part.id = next_id();
                parts.push(part);
            }
        };
        for component in components {
            take(component, &mut members);
        }
        if !members.is_empty() {
            let rest: IndexSet<Pos> = members.keys().copied().collect();
            for component in plotgrid_space::components(&rest) {
                take(component, &mut members);
            }
        }
        Ok((handle, parts))
    }
}
