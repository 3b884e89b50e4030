//! PlotGrid: tile placement on a 2D grid with automatically maintained
//! connected areas.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all PlotGrid sub-crates. For most users, adding `plotgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use plotgrid::prelude::*;
//!
//! // A 3x1 strip of legal spots.
//! let mut grid = GridRegistry::new(GridConfig::new(SpotSpec::grid(3, 1))).unwrap();
//!
//! grid.place(Pos::new(0, 0), "west", AreaTag::Water).unwrap();
//! grid.place(Pos::new(2, 0), "east", AreaTag::Water).unwrap();
//! assert_eq!(grid.area_count(), 2);
//!
//! // The middle tile bridges both singletons.
//! let placed = grid.place(Pos::new(1, 0), "mid", AreaTag::Water).unwrap();
//! assert_eq!(placed.absorbed().len(), 1);
//! assert_eq!(grid.area_count(), 1);
//!
//! // Taking it out again splits the strip.
//! let removal = grid.remove(Pos::new(1, 0)).unwrap();
//! assert_eq!(removal.handle, "mid");
//! assert_eq!(removal.parts(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plotgrid-core` | Positions, tags, area ids, errors |
//! | [`space`] | `plotgrid-space` | Legal-spot shapes and flood fill |
//! | [`engine`] | `plotgrid-engine` | Areas, the registry, shared access |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`plotgrid-core`).
pub use plotgrid_core as types;

/// Legal-spot shapes and connectivity search (`plotgrid-space`).
///
/// Describe the playable grid with [`space::SpotSpec`] and compile it
/// into a [`space::SpotSet`].
pub use plotgrid_space as space;

/// The placement engine (`plotgrid-engine`).
///
/// [`engine::GridRegistry`] for single-owner use,
/// [`engine::SharedGrid`] for sharing across threads.
pub use plotgrid_engine as engine;

/// Common imports for typical PlotGrid usage.
///
/// ```rust
/// use plotgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use plotgrid_core::{AreaId, AreaTag, Pos};

    // Errors
    pub use plotgrid_core::{PlaceError, RemoveError};

    // Space
    pub use plotgrid_space::{SpotSet, SpotSpec};

    // Engine
    pub use plotgrid_engine::{
        Area, ConfigError, GridConfig, GridMetrics, GridRegistry, Placement, RegionChange,
        Removal, SharedGrid, SharedGridError,
    };
}

// Keeps the README example compiling and passing.
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
