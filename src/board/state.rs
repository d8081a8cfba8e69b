//! State snapshot: unit positions and supply-center ownership for one turn.

use serde::Deserialize;

use super::ordered::OrderedMap;
use super::scalar;

/// Unit lists of one nation, keyed by bucket name (`armies`, `fleets`).
pub type UnitBuckets = OrderedMap<Vec<String>>;

/// The board position at a given point in a game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateSnapshot {
    /// Name of the game definition file, without extension, relative to the
    /// state file's directory.
    #[serde(rename = "game")]
    pub game_ref: String,
    /// Display label such as `Spring 1901`.
    #[serde(deserialize_with = "scalar::text")]
    pub date: String,
    #[serde(default)]
    pub units: OrderedMap<UnitBuckets>,
    /// Supply centers held by each nation, by area short name or id.
    #[serde(default)]
    pub scs: OrderedMap<Vec<String>>,
}

impl StateSnapshot {
    /// Total number of units listed, across all nations and buckets.
    pub fn unit_count(&self) -> usize {
        self.units
            .iter()
            .flat_map(|(_, buckets)| buckets.iter())
            .map(|(_, list)| list.len())
            .sum()
    }
}
