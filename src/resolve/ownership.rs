//! Supply-center ownership: one owner per supply-center area.

use std::collections::HashMap;

use tracing::debug;

use crate::board::{AreaIndex, Nation, OrderedMap, StateSnapshot};
use crate::error::MapError;

/// Owner of each held supply center, by canonical area id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplyOwnership<'a> {
    owners: HashMap<&'a str, &'a str>,
}

impl<'a> SupplyOwnership<'a> {
    pub fn new() -> Self {
        SupplyOwnership::default()
    }

    pub fn owner(&self, area_id: &str) -> Option<&'a str> {
        self.owners.get(area_id).copied()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Resolves the supply centers held by each nation in the state.
pub fn resolve_ownership<'a>(
    state: &'a StateSnapshot,
    index: &AreaIndex<'a>,
    nations: &OrderedMap<Nation>,
) -> Result<SupplyOwnership<'a>, MapError> {
    let mut ownership = SupplyOwnership::new();

    for (nation, held) in state.scs.iter() {
        if !nations.contains_key(nation) {
            return Err(MapError::UnknownNation(nation.to_string()));
        }

        for name in held {
            let area = index.resolve(name)?;
            if !area.has_supply_center() {
                return Err(MapError::NotASupplyCenter(name.clone()));
            }
            if ownership.owners.insert(area.id.as_str(), nation).is_some() {
                return Err(MapError::DuplicateOwnership(name.clone()));
            }
        }
    }

    debug!(owned = ownership.len(), "resolved supply-center ownership");
    Ok(ownership)
}
