//! Input records: the game definition and state snapshot.
//!
//! Contains the typed forms of both input documents, the insertion-ordered
//! map they use, and the area index built from a definition.

pub mod definition;
pub mod index;
pub mod ordered;
pub mod scalar;
pub mod state;
pub mod unit;

pub use definition::{
    Area, AssetShapes, BoardSize, GameDefinition, Geometry, Nation, Point, ShapeSpec, StyleTable,
};
pub use index::AreaIndex;
pub use ordered::OrderedMap;
pub use state::{StateSnapshot, UnitBuckets};
pub use unit::UnitType;
