//! Legal-spot universes and grid traversal for PlotGrid.
//!
//! A registry only accepts tiles on its legal spots. This crate defines
//! the [`SpotSet`] that holds them, the declarative [`SpotSpec`] used to
//! describe the playable shape, and the orthogonal flood fill used by
//! areas to detect splits.
//!
//! # Spot specifications
//!
//! Shapes are expressed as [`SpotSpec`] values and compiled to a
//! [`SpotSet`] once, when the registry is constructed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod flood;
pub mod spec;
pub mod spots;

pub use error::SpaceError;
pub use flood::{components, flood_fill};
pub use spec::SpotSpec;
pub use spots::SpotSet;
