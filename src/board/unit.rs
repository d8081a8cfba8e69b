//! Unit types.
//!
//! States list units per nation in two buckets, `armies` and `fleets`; on the
//! map each type is drawn with its own reusable symbol.

/// The type of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Army,
    Fleet,
}

impl UnitType {
    /// Returns the state-file bucket name listing units of this type.
    pub const fn bucket(self) -> &'static str {
        match self {
            UnitType::Army => "armies",
            UnitType::Fleet => "fleets",
        }
    }

    /// Parses a unit type from its state-file bucket name.
    pub fn from_bucket(name: &str) -> Option<UnitType> {
        match name {
            "armies" => Some(UnitType::Army),
            "fleets" => Some(UnitType::Fleet),
            _ => None,
        }
    }

    /// Returns the id of the symbol this unit type is drawn with.
    pub const fn symbol_id(self) -> &'static str {
        match self {
            UnitType::Army => "A",
            UnitType::Fleet => "F",
        }
    }
}
