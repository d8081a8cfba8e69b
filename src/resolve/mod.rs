//! State resolution.
//!
//! Cross-references a state snapshot against its game definition: parses
//! location strings, places units, and records supply-center ownership.

pub mod location;
pub mod ownership;
pub mod units;

pub use location::{parse_location, resolve_location, LocationRef, ResolvedLocation};
pub use ownership::{resolve_ownership, SupplyOwnership};
pub use units::{resolve_units, PlacedUnit, UnitPlacement};
