//! Error types for spot-set construction.

use plotgrid_core::Pos;
use std::fmt;

/// Errors arising from compiling a [`SpotSpec`](crate::SpotSpec).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A rectangle whose minimum corner exceeds its maximum on some axis.
    InvalidRect {
        /// Requested minimum corner.
        min: Pos,
        /// Requested maximum corner.
        max: Pos,
    },
    /// The shape would contain more spots than a registry supports.
    TooManySpots {
        /// Number of spots the shape describes.
        requested: u64,
        /// Upper bound on spots per registry.
        max: u64,
    },
    /// The compiled shape contains no spots at all.
    EmptySpace,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRect { min, max } => {
                write!(f, "invalid rect: min {min} exceeds max {max}")
            }
            Self::TooManySpots { requested, max } => {
                write!(f, "shape describes {requested} spots, limit is {max}")
            }
            Self::EmptySpace => write!(f, "spot set must contain at least one spot"),
        }
    }
}

impl std::error::Error for SpaceError {}
