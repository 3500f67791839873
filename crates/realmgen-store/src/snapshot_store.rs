//! The snapshot envelope and the persistence boundary it crosses.
//!
//! A generated grid leaves the pipeline wrapped in a [`WorldSnapshot`]
//! carrying the player, session, and capture time. [`SnapshotStore`]
//! abstracts the keyed backend behind it; the generator never retries a
//! failed write itself, it only reports the failure distinctly.

use chrono::{DateTime, Utc};
use realmgen_types::WorldGrid;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A generated world captured for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    /// The player the world was generated for.
    pub player_id: String,
    /// Opaque player state stored alongside the grid.
    #[serde(default = "default_player_data")]
    pub player_data: serde_json::Value,
    /// The play session the generation request belonged to.
    pub session_id: i64,
    /// The fully populated grid.
    pub world_grid: WorldGrid,
    /// When the snapshot was captured.
    pub timestamp: DateTime<Utc>,
}

impl WorldSnapshot {
    /// Wrap a generated grid, stamped with the current time.
    ///
    /// Player data starts at the origin position; replace it with
    /// [`Self::with_player_data`].
    pub fn new(player_id: &str, session_id: i64, world_grid: WorldGrid) -> Self {
        Self {
            player_id: player_id.to_owned(),
            player_data: default_player_data(),
            session_id,
            world_grid,
            timestamp: Utc::now(),
        }
    }

    /// Replace the opaque player state.
    #[must_use]
    pub fn with_player_data(mut self, player_data: serde_json::Value) -> Self {
        self.player_data = player_data;
        self
    }
}

/// Fresh players start at the origin.
fn default_player_data() -> serde_json::Value {
    serde_json::json!({ "position": { "x": 0, "y": 0 } })
}

/// Keyed persistence for world snapshots.
///
/// Snapshots are keyed by player and session, and the newest write per
/// player stays directly retrievable. Implementations report failure
/// only; the caller decides whether a failed write invalidates the
/// generated world.
#[async_trait::async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist one snapshot, overwriting any earlier write for the same
    /// player and session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the snapshot cannot be
    /// encoded, or [`StoreError::Unavailable`] if the backend fails.
    async fn put(&self, snapshot: &WorldSnapshot) -> Result<(), StoreError>;

    /// Fetch the most recently stored snapshot for a player.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if a stored payload cannot
    /// be decoded, or [`StoreError::Unavailable`] if the backend fails.
    async fn latest_for_player(
        &self,
        player_id: &str,
    ) -> Result<Option<WorldSnapshot>, StoreError>;

    /// Fetch the snapshot stored for one player session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if a stored payload cannot
    /// be decoded, or [`StoreError::Unavailable`] if the backend fails.
    async fn for_session(
        &self,
        player_id: &str,
        session_id: i64,
    ) -> Result<Option<WorldSnapshot>, StoreError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_with_wire_field_names() {
        let grid = WorldGrid::new(1, 2).unwrap();
        let snapshot = WorldSnapshot::new("aria", 7, grid);

        let value = serde_json::to_value(&snapshot).unwrap();
        let object = value.as_object().unwrap();
        for key in ["playerId", "playerData", "sessionId", "worldGrid", "timestamp"] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(object["sessionId"], 7);
        assert_eq!(object["playerData"]["position"]["x"], 0);
        assert_eq!(object["playerData"]["position"]["y"], 0);
    }

    #[test]
    fn missing_player_data_defaults_to_the_origin() {
        // A single empty grid row keeps the payload minimal.
        let payload = serde_json::json!({
            "playerId": "aria",
            "sessionId": 3,
            "worldGrid": [[]],
            "timestamp": "2025-06-01T00:00:00Z",
        });

        let snapshot: WorldSnapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(
            snapshot.player_data,
            serde_json::json!({ "position": { "x": 0, "y": 0 } })
        );
    }

    #[test]
    fn player_data_override_round_trips() {
        let grid = WorldGrid::new(1, 1).unwrap();
        let snapshot = WorldSnapshot::new("aria", 1, grid)
            .with_player_data(serde_json::json!({ "position": { "x": 4, "y": 9 } }));

        let encoded = serde_json::to_string(&snapshot).unwrap();
        let decoded: WorldSnapshot = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
