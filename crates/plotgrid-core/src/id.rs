//! Strongly-typed area identifiers.

use std::fmt;

/// Identifies one area slot within a grid registry.
///
/// Areas are identified by slot, not by content: two areas holding the
/// same positions at different times have different ids. A registry
/// allocates ids sequentially starting at 1 and never reuses one, so an
/// id returned by an earlier operation either still names the same area
/// or names nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(pub u64);

impl AreaId {
    /// The first id handed out by a fresh registry.
    pub const FIRST: AreaId = AreaId(1);

    /// The id following `self`.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "area#{}", self.0)
    }
}

impl From<u64> for AreaId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
