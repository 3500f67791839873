//! Terrain categories assigned to grid tiles.
//!
//! Two categories are structural: water and mountain are forced by elevation
//! thresholds regardless of configured coverage. Everything else comes from
//! the biome configuration's coverage pool, with grass as the default when
//! the pool is exhausted. Category names outside the built-in set round-trip
//! verbatim as custom categories, so configurations can invent vocabularies
//! like `desert` or `swamp` without code changes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A tile's terrain category.
///
/// Serialized as its lowercase wire name (`"water"`, `"grass"`, ...);
/// custom categories keep the configured name verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Terrain {
    /// Open grassland. The default when no coverage budget remains.
    #[default]
    Grass,
    /// Water, forced below the low elevation threshold.
    Water,
    /// Mountain, forced above the high elevation threshold.
    Mountain,
    /// Forest, a built-in name because quest rules key on it.
    Forest,
    /// Any configured category outside the built-in set.
    Custom(String),
}

impl Terrain {
    /// Parse a category name.
    ///
    /// Built-in names match case-insensitively; anything else becomes
    /// [`Terrain::Custom`] with the name kept verbatim.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "grass" => Self::Grass,
            "water" => Self::Water,
            "mountain" => Self::Mountain,
            "forest" => Self::Forest,
            _ => Self::Custom(name.to_owned()),
        }
    }

    /// The category name as it appears on the wire.
    pub fn name(&self) -> &str {
        match self {
            Self::Grass => "grass",
            Self::Water => "water",
            Self::Mountain => "mountain",
            Self::Forest => "forest",
            Self::Custom(name) => name,
        }
    }

    /// Whether this is the water category.
    pub const fn is_water(&self) -> bool {
        matches!(self, Self::Water)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Terrain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Terrain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
