//! SVG map output.
//!
//! Builds the document tree for a resolved state: stylesheet, reusable unit
//! and supply-center symbols, area groups, and markers.

pub mod document;
pub mod node;
pub mod shapes;
pub mod style;

pub use document::{render, supply_center_marker, unit_marker, unit_point};
pub use node::{Document, Element, Node};
pub use shapes::{area_group, asset_defs, asset_symbol, shape_node, SUPPLY_CENTER_SYMBOL};
pub use style::{nation_class, style_element, stylesheet};
