//! What a successful placement or removal did to the areas.
//!
//! Hosts use these to update their presentation state: a [`Removal`]
//! hands back the tile's handle, and both outcomes name the areas that
//! were created, grown, absorbed, or replaced.

use plotgrid_core::{AreaId, Pos};
use smallvec::SmallVec;

/// Result of a successful [`GridRegistry::place`](crate::GridRegistry::place).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// No same-tag area touched the position; a singleton area was created.
    Created {
        /// The new area.
        area: AreaId,
    },
    /// Exactly one same-tag area touched the position and now includes it.
    Extended {
        /// The grown area.
        area: AreaId,
    },
    /// The tile bridged several same-tag areas, which are now one.
    Merged {
        /// The surviving area, which holds the new tile.
        area: AreaId,
        /// Areas folded into `area`, in registry order. Their ids are retired.
        absorbed: SmallVec<[AreaId; 4]>,
    },
}

impl Placement {
    /// The area that holds the placed tile.
    pub fn area(&self) -> AreaId {
        match self {
            Self::Created { area } | Self::Extended { area } | Self::Merged { area, .. } => *area,
        }
    }

    /// Areas retired by this placement.
    pub fn absorbed(&self) -> &[AreaId] {
        match self {
            Self::Merged { absorbed, .. } => absorbed,
            Self::Created { .. } | Self::Extended { .. } => &[],
        }
    }
}

/// Structural effect of a removal on the affected area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionChange {
    /// The area lost one tile and is otherwise unchanged.
    Intact {
        /// The shrunk area.
        area: AreaId,
    },
    /// The area was retired and replaced by `into`.
    ///
    /// `into` is empty when the removed tile was the area's last one.
    Split {
        /// The retired area.
        from: AreaId,
        /// Replacement areas, each internally connected.
        into: SmallVec<[AreaId; 4]>,
    },
}

/// Result of a successful [`GridRegistry::remove`](crate::GridRegistry::remove).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removal<H> {
    /// The emptied position.
    pub pos: Pos,
    /// The handle supplied when the tile was placed.
    pub handle: H,
    /// What happened to the area that held the tile.
    pub change: RegionChange,
}

impl<H> Removal<H> {
    /// Whether the area stayed in one piece.
    pub fn is_intact(&self) -> bool {
        matches!(self.change, RegionChange::Intact { .. })
    }

    /// Number of areas the region now occupies: `1` when intact,
    /// otherwise the number of replacement areas (possibly `0`).
    pub fn parts(&self) -> usize {
        match &self.change {
            RegionChange::Intact { .. } => 1,
            RegionChange::Split { into, .. } => into.len(),
        }
    }

    /// Whether the region disappeared entirely.
    pub fn vanished(&self) -> bool {
        self.parts() == 0
    }
}
