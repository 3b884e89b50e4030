//! Core types for the PlotGrid tile placement engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: grid positions,
//! area tags, area identifiers, and the error taxonomy reported by
//! placement and removal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod pos;
pub mod tag;

pub use error::{PlaceError, RemoveError, TagError};
pub use id::AreaId;
pub use pos::Pos;
pub use tag::AreaTag;
