//! Error types for the PlotGrid engine.
//!
//! Every failure is a logical precondition violation reported as an
//! ordinary return value. None of them leaves the engine in a modified
//! state, so repeating a failing call yields the same error.

use std::error::Error;
use std::fmt;

use crate::pos::Pos;

/// Errors from placing a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceError {
    /// The position is not one of the registry's legal spots.
    IllegalPosition {
        /// The rejected position.
        pos: Pos,
    },
    /// Another tile already occupies the position.
    AlreadyOccupied {
        /// The rejected position.
        pos: Pos,
    },
}

impl PlaceError {
    /// The position the failed placement targeted.
    pub fn pos(&self) -> Pos {
        match self {
            Self::IllegalPosition { pos } | Self::AlreadyOccupied { pos } => *pos,
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalPosition { pos } => write!(f, "position {pos} is not a legal spot"),
            Self::AlreadyOccupied { pos } => write!(f, "position {pos} is already occupied"),
        }
    }
}

impl Error for PlaceError {}

/// Errors from removing a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveError {
    /// No area holds a tile at the position.
    NotFound {
        /// The position that was empty.
        pos: Pos,
    },
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { pos } => write!(f, "no tile at position {pos}"),
        }
    }
}

impl Error for RemoveError {}

/// Errors from decoding an [`AreaTag`](crate::AreaTag) wire byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagError {
    /// The byte does not name any known tag.
    UnknownTag {
        /// The undecodable byte.
        value: u8,
    },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTag { value } => write!(f, "unknown area tag byte {value}"),
        }
    }
}

impl Error for TagError {}
