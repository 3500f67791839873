//! Biome configuration: the declarative input that drives generation.
//!
//! A configuration names terrain categories with target coverage percentages
//! and pins landmarks to explicit coordinates. It is supplied per request as
//! JSON, typically authored by an external service, and consumed once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Default edge length when a configuration or request omits dimensions.
pub const DEFAULT_MAP_EDGE: usize = 50;

/// Grid dimensions declared by a biome configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapSize {
    /// Column count.
    pub width: usize,
    /// Row count.
    pub height: usize,
}

impl Default for MapSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_EDGE,
            height: DEFAULT_MAP_EDGE,
        }
    }
}

/// One landmark placement entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkSpec {
    /// Target coordinates, bounds-checked at placement time.
    pub position: Position,
    /// Explicit label; when absent the kind's default label applies.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Entries for one landmark kind: a single placement or an ordered list.
///
/// Configuration JSON may give either a lone object or an array; both
/// shapes are accepted and treated as a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LandmarkEntries {
    /// A single placement.
    One(LandmarkSpec),
    /// An ordered list of placements.
    Many(Vec<LandmarkSpec>),
}

impl LandmarkEntries {
    /// View the entries as a slice regardless of wire shape.
    pub fn as_slice(&self) -> &[LandmarkSpec] {
        match self {
            Self::One(spec) => std::slice::from_ref(spec),
            Self::Many(specs) => specs,
        }
    }
}

/// Declarative coverage targets and landmark placements for one generation run.
///
/// Coverage percentages are interpreted against the total tile count and
/// need not sum to 100; elevation thresholds can override any category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiomeConfig {
    /// Grid dimensions for the generated world.
    pub map_size: MapSize,
    /// Coverage percent (0-100) per terrain category name.
    pub terrain: BTreeMap<String, f64>,
    /// Placement entries per landmark kind.
    pub landmarks: BTreeMap<String, LandmarkEntries>,
}
