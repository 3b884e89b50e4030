//! Area tags: the attribute two adjacent tiles must share to join one area.

use std::fmt;

use crate::error::TagError;

/// Attribute carried by every tile and every area.
///
/// The discriminants are the wire encoding used when tags are synchronized
/// with a server, so they are fixed and must never be renumbered. The set
/// of tags stays below 256 so that the encoding fits in one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AreaTag {
    /// Fire land.
    Fire = 0,
    /// Grass land.
    Grass = 1,
    /// Water land.
    Water = 2,
}

impl AreaTag {
    /// Every tag, in discriminant order.
    pub const ALL: [AreaTag; 3] = [AreaTag::Fire, AreaTag::Grass, AreaTag::Water];

    /// The one-byte wire encoding.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Lower-case name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Grass => "grass",
            Self::Water => "water",
        }
    }
}

impl TryFrom<u8> for AreaTag {
    type Error = TagError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Fire),
            1 => Ok(Self::Grass),
            2 => Ok(Self::Water),
            _ => Err(TagError::UnknownTag { value }),
        }
    }
}

impl From<AreaTag> for u8 {
    fn from(tag: AreaTag) -> Self {
        tag.as_u8()
    }
}

impl fmt::Display for AreaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
