//! Error types for map rendering.
//!
//! `MapError` covers every validation failure raised while cross-referencing
//! a game definition and a state snapshot. All of them are fatal: the render
//! is aborted at the first one and no partial document is produced.

use crate::loader::LoadError;

/// Validation failures detected while resolving or rendering a map.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid shape spec: {0}")]
    InvalidShapeSpec(String),

    #[error("missing shape for area '{0}'")]
    MissingShapeForArea(String),

    #[error("shapes defined for unknown area '{0}'")]
    UnknownShapeArea(String),

    #[error("malformed location '{0}', expected 'Area' or 'Area(Coast)'")]
    MalformedLocation(String),

    #[error("unknown area '{0}'")]
    UnknownArea(String),

    #[error("unknown coast '{coast}' of '{area}'")]
    UnknownCoast { coast: String, area: String },

    #[error("no unit point defined for area '{0}'")]
    MissingUnitPoint(String),

    #[error("unknown unit type '{0}', expected 'armies' or 'fleets'")]
    UnknownUnitType(String),

    #[error("unknown nation '{0}'")]
    UnknownNation(String),

    #[error("duplicate unit for '{0}'")]
    DuplicateUnit(String),

    #[error("area '{0}' does not contain a supply center")]
    NotASupplyCenter(String),

    #[error("duplicate ownership for '{0}'")]
    DuplicateOwnership(String),

    #[error("duplicate area id '{0}'")]
    DuplicateAreaId(String),

    #[error("duplicate area short name '{0}'")]
    DuplicateAreaKey(String),
}

/// Top-level error for a full state-file render.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Map(#[from] MapError),
}
