//! Area lookup by state-file name and by canonical id.

use std::collections::HashMap;

use super::definition::Area;
use crate::error::MapError;

/// Two-way index over a definition's areas.
///
/// States name areas by their lookup key (`short` when present, otherwise
/// `id`); rendering addresses them by canonical `id`. Both key spaces must be
/// collision-free.
#[derive(Debug, Clone)]
pub struct AreaIndex<'a> {
    areas: &'a [Area],
    by_key: HashMap<&'a str, usize>,
    by_id: HashMap<&'a str, usize>,
}

impl<'a> AreaIndex<'a> {
    pub fn build(areas: &'a [Area]) -> Result<Self, MapError> {
        let mut by_key = HashMap::with_capacity(areas.len());
        let mut by_id = HashMap::with_capacity(areas.len());

        for (i, area) in areas.iter().enumerate() {
            if by_id.insert(area.id.as_str(), i).is_some() {
                return Err(MapError::DuplicateAreaId(area.id.clone()));
            }
            if by_key.insert(area.key(), i).is_some() {
                return Err(MapError::DuplicateAreaKey(area.key().to_string()));
            }
        }

        Ok(AreaIndex {
            areas,
            by_key,
            by_id,
        })
    }

    /// Resolves a state-file area name to its area.
    pub fn resolve(&self, key: &str) -> Result<&'a Area, MapError> {
        self.by_key
            .get(key)
            .map(|&i| &self.areas[i])
            .ok_or_else(|| MapError::UnknownArea(key.to_string()))
    }

    /// Looks up an area by canonical id.
    pub fn area(&self, id: &str) -> Option<&'a Area> {
        self.by_id.get(id).map(|&i| &self.areas[i])
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
