//! The grid registry: the single mutable entry point for hosts.
//!
//! [`GridRegistry`] owns the legal spots and the ordered list of areas.
//! [`place`](GridRegistry::place) and [`remove`](GridRegistry::remove)
//! are the only mutating operations; both run to completion and leave
//! every area as one maximal 4-connected group of same-tag tiles.
//!
//! # Ownership model
//!
//! `GridRegistry` is [`Send`] when its handles are, and all mutating
//! methods take `&mut self`. Sharing one registry between threads goes
//! through [`SharedGrid`](crate::SharedGrid), which holds a lock for the
//! full duration of each call.
//!
//! # Failure
//!
//! Rejected calls return an error and leave the areas untouched; only
//! the rejection counters in [`GridMetrics`] move.

use indexmap::IndexSet;
use plotgrid_core::{AreaId, AreaTag, PlaceError, Pos, RemoveError};
use plotgrid_space::SpotSet;
use smallvec::SmallVec;

use crate::area::{Area, Connectivity};
use crate::config::{ConfigError, GridConfig};
use crate::metrics::GridMetrics;
use crate::outcome::{Placement, RegionChange, Removal};

// Compile-time assertion: a registry of Send handles is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GridRegistry<u64>>();
    }
};

/// Legal spots plus the areas currently placed on them.
///
/// # Example
///
/// ```
/// use plotgrid_core::{AreaTag, Pos};
/// use plotgrid_engine::{GridConfig, GridRegistry, Placement};
/// use plotgrid_space::SpotSpec;
///
/// let mut grid = GridRegistry::new(GridConfig::new(SpotSpec::grid(2, 2))).unwrap();
/// grid.place(Pos::new(0, 0), "h1", AreaTag::Fire).unwrap();
/// let placed = grid.place(Pos::new(1, 0), "h2", AreaTag::Fire).unwrap();
/// assert!(matches!(placed, Placement::Extended { .. }));
/// assert_eq!(grid.area_count(), 1);
///
/// let removal = grid.remove(Pos::new(1, 0)).unwrap();
/// assert_eq!(removal.handle, "h2");
/// ```
#[derive(Clone, Debug)]
pub struct GridRegistry<H> {
    spots: SpotSet,
    areas: Vec<Area<H>>,
    next_id: AreaId,
    metrics: GridMetrics,
}

impl<H> GridRegistry<H> {
    /// Build a registry from a validated configuration.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let spots = config.compile_spots()?;
        Ok(Self {
            spots,
            areas: Vec::with_capacity(config.area_capacity),
            next_id: AreaId::FIRST,
            metrics: GridMetrics::default(),
        })
    }

    /// Build a registry over an already-compiled spot set.
    ///
    /// An empty set is accepted; every placement on it fails with
    /// [`PlaceError::IllegalPosition`].
    pub fn with_spots(spots: SpotSet) -> Self {
        Self {
            spots,
            areas: Vec::with_capacity(GridConfig::DEFAULT_AREA_CAPACITY),
            next_id: AreaId::FIRST,
            metrics: GridMetrics::default(),
        }
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Place a tile tagged `tag` at `pos`.
    ///
    /// The tile joins every same-tag area it touches orthogonally. With
    /// no such area it starts a new one; with one it extends it; with
    /// several it is inserted into the first (in area order) and the
    /// others are merged into that one.
    ///
    /// # Errors
    ///
    /// [`PlaceError::IllegalPosition`] if `pos` is not a legal spot, then
    /// [`PlaceError::AlreadyOccupied`] if some area already holds `pos`.
    /// On error `handle` is dropped and nothing else changes.
    pub fn place(&mut self, pos: Pos, handle: H, tag: AreaTag) -> Result<Placement, PlaceError> {
        if !self.spots.contains(pos) {
            self.metrics.rejected_illegal += 1;
            return Err(PlaceError::IllegalPosition { pos });
        }
        if self.area_index_at(pos).is_some() {
            self.metrics.rejected_occupied += 1;
            return Err(PlaceError::AlreadyOccupied { pos });
        }

        let eligible: SmallVec<[usize; 4]> = self
            .areas
            .iter()
            .enumerate()
            .filter(|(_, area)| area.is_eligible_neighbour(pos, tag))
            .map(|(i, _)| i)
            .collect();

        self.metrics.placements += 1;
        let placement = match eligible.as_slice() {
            [] => {
                let id = self.allocate_id();
                let mut area = Area::new(id, tag);
                area.insert(pos, handle);
                self.areas.push(area);
                self.metrics.areas_created += 1;
                Placement::Created { area: id }
            }
            [only] => {
                let area = &mut self.areas[*only];
                area.insert(pos, handle);
                Placement::Extended { area: area.id() }
            }
            [first, rest @ ..] => {
                let first = *first;
                // `rest` is ascending and every index in it is above
                // `first`, so removing back to front keeps all of them
                // (and `first`) valid.
                let mut taken: SmallVec<[Area<H>; 4]> = rest
                    .iter()
                    .rev()
                    .map(|&i| self.areas.remove(i))
                    .collect();
                taken.reverse();

                let survivor = &mut self.areas[first];
                survivor.insert(pos, handle);
                let mut absorbed = SmallVec::new();
                for other in taken {
                    absorbed.push(other.id());
                    survivor.merge_with(other);
                }
                self.metrics.merges += absorbed.len() as u64;
                Placement::Merged {
                    area: survivor.id(),
                    absorbed,
                }
            }
        };
        Ok(placement)
    }

    /// Remove the tile at `pos` and return its handle.
    ///
    /// If the rest of the tile's area stays connected, the area simply
    /// shrinks. Otherwise the area is retired and one new area per
    /// remaining component is appended to the area list; removing an
    /// area's last tile retires it with no replacement.
    ///
    /// # Errors
    ///
    /// [`RemoveError::NotFound`] if no area holds `pos`. Nothing changes.
    pub fn remove(&mut self, pos: Pos) -> Result<Removal<H>, RemoveError> {
        let Some(index) = self.area_index_at(pos) else {
            self.metrics.rejected_not_found += 1;
            return Err(RemoveError::NotFound { pos });
        };

        let (connectivity, visited) = self.areas[index].analyse_without(pos);
        match connectivity {
            Connectivity::Intact => {
                let area = &mut self.areas[index];
                let Some(handle) = area.remove(pos) else {
                    self.metrics.rejected_not_found += 1;
                    return Err(RemoveError::NotFound { pos });
                };
                self.metrics.removals += 1;
                self.metrics.bfs_visits += visited as u64;
                Ok(Removal {
                    pos,
                    handle,
                    change: RegionChange::Intact { area: area.id() },
                })
            }
            Connectivity::Split(components) => {
                let area = self.areas.remove(index);
                let from = area.id();
                let next_id = &mut self.next_id;
                let split = area.split_into(pos, components, || {
                    let id = *next_id;
                    *next_id = id.next();
                    id
                });
                let (handle, parts) = match split {
                    Ok(split) => split,
                    Err(area) => {
                        self.areas.insert(index, area);
                        self.metrics.rejected_not_found += 1;
                        return Err(RemoveError::NotFound { pos });
                    }
                };

                let into: SmallVec<[AreaId; 4]> = parts.iter().map(Area::id).collect();
                self.areas.extend(parts);
                self.metrics.removals += 1;
                self.metrics.bfs_visits += visited as u64;
                if into.is_empty() {
                    self.metrics.areas_vanished += 1;
                } else {
                    self.metrics.splits += 1;
                }
                Ok(Removal {
                    pos,
                    handle,
                    change: RegionChange::Split { from, into },
                })
            }
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Whether `pos` is a legal spot, occupied or not.
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.spots.contains(pos)
    }

    /// Whether a tile sits at `pos`.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.area_index_at(pos).is_some()
    }

    /// The handle of the tile at `pos`.
    pub fn tile(&self, pos: Pos) -> Option<&H> {
        self.area_at(pos).and_then(|area| area.get(pos))
    }

    /// The tag of the tile at `pos`.
    pub fn tag_at(&self, pos: Pos) -> Option<AreaTag> {
        self.area_at(pos).map(Area::tag)
    }

    /// The area holding `pos`.
    pub fn area_at(&self, pos: Pos) -> Option<&Area<H>> {
        self.areas.iter().find(|area| area.contains(pos))
    }

    /// The live area with identity `id`.
    pub fn area(&self, id: AreaId) -> Option<&Area<H>> {
        self.areas.iter().find(|area| area.id() == id)
    }

    /// All areas in registry order.
    pub fn areas(&self) -> &[Area<H>] {
        &self.areas
    }

    /// Number of areas.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Number of occupied positions.
    pub fn occupied_count(&self) -> usize {
        self.areas.iter().map(Area::len).sum()
    }

    /// Every placed tile with its handle, area by area.
    pub fn tiles(&self) -> impl Iterator<Item = (Pos, &H)> + '_ {
        self.areas.iter().flat_map(|area| area.tiles())
    }

    /// The legal-spot universe.
    pub fn spots(&self) -> &SpotSet {
        &self.spots
    }

    /// Empty legal spots orthogonally adjacent to at least one tile.
    ///
    /// These are the positions where a placement would touch existing
    /// land. Ordered by area, then member, then neighbour direction.
    pub fn frontier(&self) -> IndexSet<Pos> {
        let mut out = IndexSet::new();
        for (pos, _) in self.tiles() {
            for n in pos.neighbours() {
                if self.spots.contains(n) && !self.is_occupied(n) {
                    out.insert(n);
                }
            }
        }
        out
    }

    /// Counters accumulated since construction or the last reset.
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// Zero all counters.
    pub fn reset_metrics(&mut self) {
        self.metrics = GridMetrics::default();
    }

    // ── Internals ───────────────────────────────────────────────

    fn area_index_at(&self, pos: Pos) -> Option<usize> {
        self.areas.iter().position(|area| area.contains(pos))
    }

    fn allocate_id(&mut self) -> AreaId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}
