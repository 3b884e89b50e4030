//! Cumulative counters for registry activity.
//!
//! [`GridMetrics`] is updated by every `place`/`remove` call, including
//! rejected ones, so that a host can report how the grid is being used
//! and how much connectivity work removals cost.

/// Counters accumulated since construction or the last reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridMetrics {
    /// Successful placements.
    pub placements: u64,
    /// Singleton areas created by placements.
    pub areas_created: u64,
    /// Areas absorbed into another area by bridging placements.
    pub merges: u64,
    /// Successful removals.
    pub removals: u64,
    /// Removals that broke an area into two or more replacement areas.
    pub splits: u64,
    /// Removals that took an area's last tile.
    pub areas_vanished: u64,
    /// Placements rejected because the position is not a legal spot.
    pub rejected_illegal: u64,
    /// Placements rejected because the position was occupied.
    pub rejected_occupied: u64,
    /// Removals rejected because the position was empty.
    pub rejected_not_found: u64,
    /// Members visited by connectivity searches during removals.
    pub bfs_visits: u64,
}

impl GridMetrics {
    /// Total rejected calls of either kind.
    pub fn rejections(&self) -> u64 {
        self.rejected_illegal + self.rejected_occupied + self.rejected_not_found
    }
}
