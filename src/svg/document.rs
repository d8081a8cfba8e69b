//! Map document assembly.
//!
//! The element order of the output is fixed: title, stylesheet, symbol
//! definitions, areas (definition order), units (state order), then
//! supply-center markers (definition order). Any validation failure aborts
//! the whole render; problems are reported in that same order, so a broken
//! definition is reported before a broken state.

use tracing::{debug, info};

use crate::board::{Area, GameDefinition, Point, StateSnapshot};
use crate::error::MapError;
use crate::resolve::{resolve_ownership, resolve_units, PlacedUnit, SupplyOwnership};

use super::node::{Document, Element};
use super::shapes::{area_group, asset_defs, SUPPLY_CENTER_SYMBOL};
use super::style::{nation_class, style_element, stylesheet, UNOWNED_CLASS};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

fn translate(point: Point) -> String {
    format!("translate({})", point)
}

/// Returns where a unit is drawn: its coast if it names one, else the area's
/// unit point.
pub fn unit_point(unit: &PlacedUnit<'_>) -> Result<Point, MapError> {
    let area = unit.area;
    match unit.coast {
        Some(coast) => area.coast(coast).ok_or_else(|| MapError::UnknownCoast {
            coast: coast.to_string(),
            area: area.key().to_string(),
        }),
        None => area
            .point
            .ok_or_else(|| MapError::MissingUnitPoint(area.key().to_string())),
    }
}

/// Builds the marker for one placed unit.
pub fn unit_marker(unit: &PlacedUnit<'_>) -> Result<Element, MapError> {
    let point = unit_point(unit)?;
    let symbol = Element::new("use")
        .attr("xlink:href", format!("#{}", unit.unit_type.symbol_id()))
        .attr("id", format!("unit-{}", unit.area.id))
        .attr("class", nation_class(unit.nation))
        .attr("transform", translate(point));
    Ok(Element::new("g")
        .attr("title", unit.area.name.as_str())
        .child(symbol))
}

/// Builds the supply-center marker of an area, or `None` if the area has no
/// supply center.
pub fn supply_center_marker(area: &Area, ownership: &SupplyOwnership<'_>) -> Option<Element> {
    let at = area.sc?;
    let class = match ownership.owner(&area.id) {
        Some(owner) => nation_class(owner),
        None => UNOWNED_CLASS.to_string(),
    };
    let symbol = Element::new("use")
        .attr("xlink:href", format!("#{}", SUPPLY_CENTER_SYMBOL))
        .attr("class", class)
        .attr("transform", translate(at));
    Some(
        Element::new("g")
            .attr("title", area.name.as_str())
            .child(symbol),
    )
}

/// Renders a state of a game as an SVG document.
pub fn render(game: &GameDefinition, state: &StateSnapshot) -> Result<Document, MapError> {
    let index = game.index()?;

    let size = game.board_size;
    let mut root = Element::new("svg")
        .attr("viewBox", format!("0 0 {} {}", size.width, size.height))
        .attr("xmlns", SVG_NAMESPACE)
        .attr("xmlns:xlink", XLINK_NAMESPACE)
        .child(Element::new("title").text(format!("{} - {}", game.name, state.date)))
        .child(style_element(stylesheet(&game.style, &game.nations)))
        .child(asset_defs(&game.asset_shapes)?);

    for area in &game.areas {
        root.push(area_group(area, game)?);
    }
    debug!(areas = game.areas.len(), "rendered areas");

    let units = resolve_units(state, &index, &game.nations)?;
    for unit in units.iter() {
        root.push(unit_marker(unit)?);
    }

    let ownership = resolve_ownership(state, &index, &game.nations)?;

    let mut centers = 0;
    for marker in game
        .areas
        .iter()
        .filter_map(|area| supply_center_marker(area, &ownership))
    {
        root.push(marker);
        centers += 1;
    }

    info!(
        game = %game.name,
        date = %state.date,
        units = units.len(),
        supply_centers = centers,
        owned = ownership.len(),
        "rendered map"
    );
    Ok(Document::new(root))
}
