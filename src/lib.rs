//! Mapmaker library.
//!
//! Exposes the input records, state resolution, and SVG assembly modules for
//! use by integration tests and the binary entry point.

pub mod board;
pub mod error;
pub mod loader;
pub mod resolve;
pub mod svg;

#[cfg(test)]
mod test_support;

use std::path::Path;

pub use error::{Error, MapError};
pub use loader::LoadError;
pub use svg::{render, Document};

/// Loads a state file and its game definition and renders the map.
pub fn render_state_file(state_path: &Path) -> Result<Document, Error> {
    let (game, state) = loader::load(state_path)?;
    Ok(svg::render(&game, &state)?)
}
