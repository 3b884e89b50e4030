//! Tile placement engine maintaining connected same-tag areas.
//!
//! A [`GridRegistry`] owns the legal-spot universe and the list of
//! [`Area`]s. Hosts call [`place`](GridRegistry::place) and
//! [`remove`](GridRegistry::remove); the registry grows, merges, shrinks,
//! or splits areas so that after every call each area is one maximal
//! 4-connected group of same-tag tiles.
//!
//! Tile handles (`H`) are opaque to the engine. They are stored on
//! placement and handed back on removal so that the host can update its
//! own presentation objects.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod config;
pub mod metrics;
pub mod outcome;
pub mod registry;
pub mod shared;

pub use area::{Area, Connectivity};
pub use config::{ConfigError, GridConfig};
pub use metrics::GridMetrics;
pub use outcome::{Placement, RegionChange, Removal};
pub use registry::GridRegistry;
pub use shared::{SharedGrid, SharedGridError};
