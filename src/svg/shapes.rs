//! Shape, asset-symbol, and area-group construction.

use crate::board::{Area, AssetShapes, GameDefinition, Geometry, ShapeSpec, UnitType};
use crate::error::MapError;

use super::node::Element;

/// Symbol id of the supply-center marker.
pub const SUPPLY_CENTER_SYMBOL: &str = "SC";

/// Builds the drawable node for one shape.
pub fn shape_node(spec: &ShapeSpec) -> Result<Element, MapError> {
    let node = match spec.geometry()? {
        Geometry::Polygon { points } => Element::new("polygon").attr("points", points),
        Geometry::Path { d } => Element::new("path").attr("d", d),
        Geometry::Circle { r } => Element::new("circle").attr("r", r),
    };
    Ok(match &spec.class {
        Some(class) => node.attr("class", class.as_str()),
        None => node,
    })
}

fn shape_group(mut group: Element, specs: &[ShapeSpec]) -> Result<Element, MapError> {
    for spec in specs {
        group.push(shape_node(spec)?);
    }
    Ok(group)
}

/// Builds a named, reusable symbol from its shapes.
pub fn asset_symbol(id: &str, specs: &[ShapeSpec]) -> Result<Element, MapError> {
    shape_group(Element::new("g").attr("id", id), specs)
}

/// Builds the `<defs>` block holding the army, fleet and supply-center
/// symbols, in that order.
pub fn asset_defs(assets: &AssetShapes) -> Result<Element, MapError> {
    Ok(Element::new("defs")
        .child(asset_symbol(UnitType::Army.symbol_id(), &assets.army)?)
        .child(asset_symbol(UnitType::Fleet.symbol_id(), &assets.fleet)?)
        .child(asset_symbol(SUPPLY_CENTER_SYMBOL, &assets.sc)?))
}

/// Builds an area's group: its shapes followed by its label.
pub fn area_group(area: &Area, game: &GameDefinition) -> Result<Element, MapError> {
    let specs = game
        .shapes_for(&area.id)
        .ok_or_else(|| MapError::MissingShapeForArea(area.id.clone()))?;

    let group = Element::new("g")
        .attr("title", area.name.as_str())
        .attr("id", format!("area-{}", area.id));
    let group = shape_group(group, specs)?;

    Ok(group.child(
        Element::new("text")
            .attr("x", area.label.x().to_string())
            .attr("y", area.label.y().to_string())
            .text(area.key()),
    ))
}
