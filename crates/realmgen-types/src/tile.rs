//! The atomic unit of the world grid.

use serde::{Deserialize, Serialize};

use crate::quest::Quest;
use crate::terrain::Terrain;

/// One grid cell's full gameplay-relevant state.
///
/// The landmark and quest flags are derived rather than stored: a tile is a
/// landmark exactly when `landmark_kind` is set and has a quest exactly when
/// `quest` is set, so the pair of invariants cannot drift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Terrain category assigned by the classifier.
    pub category: Terrain,
    /// Fog-of-war flag. Generation always leaves this `false`.
    pub discovered: bool,
    /// Landmark label, if a landmark occupies this tile.
    pub landmark_kind: Option<String>,
    /// Whether a merchant was scattered onto this tile.
    pub has_merchant: bool,
    /// The quest bound to this tile, if any.
    pub quest: Option<Quest>,
}

impl Tile {
    /// An undiscovered, featureless tile of the given category.
    pub const fn new(category: Terrain) -> Self {
        Self {
            category,
            discovered: false,
            landmark_kind: None,
            has_merchant: false,
            quest: None,
        }
    }

    /// Whether a landmark occupies this tile.
    pub const fn is_landmark(&self) -> bool {
        self.landmark_kind.is_some()
    }

    /// Whether a quest is bound to this tile.
    pub const fn has_quest(&self) -> bool {
        self.quest.is_some()
    }
}
