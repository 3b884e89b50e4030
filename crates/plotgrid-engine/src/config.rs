//! Registry configuration, validation, and error types.
//!
//! [`GridConfig`] is the builder-input for constructing a
//! [`GridRegistry`](crate::GridRegistry). [`validate()`](GridConfig::validate)
//! checks it without building anything.

use std::error::Error;
use std::fmt;

use plotgrid_space::{SpaceError, SpotSet, SpotSpec};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`GridConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The spot specification did not compile.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "spots: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a grid registry.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Shape of the playable grid. Fixed for the registry's lifetime.
    pub spots: SpotSpec,
    /// Initial capacity reserved for the area list. Default: 16.
    pub area_capacity: usize,
}

impl GridConfig {
    /// Default initial capacity for the area list.
    pub const DEFAULT_AREA_CAPACITY: usize = 16;

    /// Configuration for the given shape with default tuning.
    pub fn new(spots: SpotSpec) -> Self {
        Self {
            spots,
            area_capacity: Self::DEFAULT_AREA_CAPACITY,
        }
    }

    /// Set the initial area-list capacity.
    pub fn area_capacity(mut self, capacity: usize) -> Self {
        self.area_capacity = capacity;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.compile_spots().map(|_| ())
    }

    pub(crate) fn compile_spots(&self) -> Result<SpotSet, ConfigError> {
        Ok(self.spots.compile()?)
    }
}
