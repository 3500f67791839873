//! In-memory snapshot store for tests and single-process runs.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::StoreError;
use crate::snapshot_store::{SnapshotStore, WorldSnapshot};

/// [`SnapshotStore`] backed by a mutex-guarded map.
///
/// Values are held as serialized JSON, so writes and reads exercise the
/// same encoding path a networked backend would. Keys are
/// `(player, session)` pairs, with a per-player pointer at the session
/// written most recently.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    by_session: BTreeMap<(String, i64), String>,
    latest: BTreeMap<String, i64>,
}

impl MemorySnapshotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("snapshot mutex poisoned".to_owned()))
    }
}

fn read_snapshot(
    inner: &Inner,
    player_id: &str,
    session_id: i64,
) -> Result<Option<WorldSnapshot>, StoreError> {
    inner
        .by_session
        .get(&(player_id.to_owned(), session_id))
        .map_or_else(
            || Ok(None),
            |payload| Ok(Some(serde_json::from_str(payload)?)),
        )
}

#[async_trait::async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn put(&self, snapshot: &WorldSnapshot) -> Result<(), StoreError> {
        let payload = serde_json::to_string(snapshot)?;
        let mut inner = self.guard()?;
        inner
            .by_session
            .insert((snapshot.player_id.clone(), snapshot.session_id), payload);
        inner
            .latest
            .insert(snapshot.player_id.clone(), snapshot.session_id);

        tracing::debug!(
            player_id = %snapshot.player_id,
            session_id = snapshot.session_id,
            "Stored world snapshot"
        );
        Ok(())
    }

    async fn latest_for_player(
        &self,
        player_id: &str,
    ) -> Result<Option<WorldSnapshot>, StoreError> {
        let inner = self.guard()?;
        let Some(&session_id) = inner.latest.get(player_id) else {
            return Ok(None);
        };
        read_snapshot(&inner, player_id, session_id)
    }

    async fn for_session(
        &self,
        player_id: &str,
        session_id: i64,
    ) -> Result<Option<WorldSnapshot>, StoreError> {
        let inner = self.guard()?;
        read_snapshot(&inner, player_id, session_id)
    }
}
