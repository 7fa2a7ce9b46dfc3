use std::fmt;

use serde::Serialize;

use crate::haloweb_errors::HaloWebError;

/// Symbolic NEXUS+ classification of a region of space.
///
/// The discriminants match the flag values stored in MMF files; the derived `Ord` follows the
/// order of increasing structural density, from empty voids up to cluster nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WebClass {
    Void = 0,
    Undefined = 1,
    Wall = 2,
    Filament = 3,
    Node = 4,
}

impl WebClass {
    /// Number of distinct classes.
    pub const COUNT: usize = 5;

    /// All classes in flag order.
    pub const ALL: [WebClass; WebClass::COUNT] = [
        WebClass::Void,
        WebClass::Undefined,
        WebClass::Wall,
        WebClass::Filament,
        WebClass::Node,
    ];

    /// The raw flag value stored in MMF files.
    pub fn flag(&self) -> u16 {
        *self as u16
    }

    /// Translate a raw voxel flag, reporting the voxel index on failure.
    pub(crate) fn from_flag_at(flag: u16, index: [usize; 3]) -> Result<Self, HaloWebError> {
        match flag {
            0 => Ok(WebClass::Void),
            1 => Ok(WebClass::Undefined),
            2 => Ok(WebClass::Wall),
            3 => Ok(WebClass::Filament),
            4 => Ok(WebClass::Node),
            _ => Err(HaloWebError::UnknownWebClass { flag, index }),
        }
    }
}

impl TryFrom<u16> for WebClass {
    type Error = HaloWebError;

    fn try_from(flag: u16) -> Result<Self, Self::Error> {
        WebClass::from_flag_at(flag, [0, 0, 0])
    }
}

impl fmt::Display for WebClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WebClass::Void => "Void",
            WebClass::Undefined => "Undefined",
            WebClass::Wall => "Wall",
            WebClass::Filament => "Filament",
            WebClass::Node => "Node",
        };
        write!(f, "{name}")
    }
}
