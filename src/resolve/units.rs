//! Unit placement: one unit per area, built from per-nation unit lists.

use std::collections::HashSet;

use tracing::debug;

use super::location::resolve_location;
use crate::board::{Area, AreaIndex, Nation, OrderedMap, StateSnapshot, UnitType};
use crate::error::MapError;

/// A unit resolved to its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedUnit<'a> {
    pub nation: &'a str,
    pub unit_type: UnitType,
    pub area: &'a Area,
    /// Coast token as written in the state; checked when drawn.
    pub coast: Option<&'a str>,
}

/// All units of a state, keyed by area and kept in the order they were
/// listed (nation order, then bucket order, then list order).
#[derive(Debug, Clone, Default)]
pub struct UnitPlacement<'a> {
    units: Vec<PlacedUnit<'a>>,
    occupied: HashSet<&'a str>,
}

impl<'a> UnitPlacement<'a> {
    pub fn new() -> Self {
        UnitPlacement::default()
    }

    /// Places a unit. A second unit in the same area is reported by the
    /// area's name, without any coast.
    pub fn place(&mut self, unit: PlacedUnit<'a>) -> Result<(), MapError> {
        if !self.occupied.insert(unit.area.id.as_str()) {
            return Err(MapError::DuplicateUnit(unit.area.key().to_string()));
        }
        self.units.push(unit);
        Ok(())
    }

    /// Returns the unit occupying an area, by canonical id.
    pub fn get(&self, area_id: &str) -> Option<&PlacedUnit<'a>> {
        if !self.occupied.contains(area_id) {
            return None;
        }
        self.units.iter().find(|u| u.area.id == area_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedUnit<'a>> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Resolves every unit listed in the state.
pub fn resolve_units<'a>(
    state: &'a StateSnapshot,
    index: &AreaIndex<'a>,
    nations: &OrderedMap<Nation>,
) -> Result<UnitPlacement<'a>, MapError> {
    let mut placement = UnitPlacement::new();

    for (nation, buckets) in state.units.iter() {
        if !nations.contains_key(nation) {
            return Err(MapError::UnknownNation(nation.to_string()));
        }

        for (bucket, locations) in buckets.iter() {
            let unit_type = UnitType::from_bucket(bucket)
                .ok_or_else(|| MapError::UnknownUnitType(bucket.to_string()))?;

            for location in locations {
                let resolved = resolve_location(location, index)?;
                placement.place(PlacedUnit {
                    nation,
                    unit_type,
                    area: resolved.area,
                    coast: resolved.coast,
                })?;
            }
        }
    }

    debug!(units = placement.len(), "resolved unit placement");
    Ok(placement)
}
