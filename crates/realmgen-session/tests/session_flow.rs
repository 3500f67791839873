//! Integration tests for the `realmgen-session` orchestration flow.
//!
//! These run the full request path against the in-memory snapshot store:
//! mode resolution, configuration fallback, generation, persistence, and
//! the error split between "could not generate" and "could not persist".

// Tests use unwrap and expect extensively for clarity -- panicking on
// failure is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use rand::SeedableRng;
use rand::rngs::SmallRng;
use realmgen_session::{ConfigProvenance, SessionError, run_session};
use realmgen_store::{MemorySnapshotStore, SnapshotStore, StoreError, WorldSnapshot};
use realmgen_types::GenerationRequest;
use realmgen_world::WorldGenError;

// =============================================================================
// Helpers
// =============================================================================

fn make_request(player: &str, session_id: i64) -> GenerationRequest {
    GenerationRequest {
        player: player.to_owned(),
        session_id,
        ..GenerationRequest::default()
    }
}

/// A sink whose writes always fail, for exercising the persistence path.
struct OfflineStore;

#[async_trait::async_trait]
impl SnapshotStore for OfflineStore {
    async fn put(&self, _snapshot: &WorldSnapshot) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backend offline".to_owned()))
    }

    async fn latest_for_player(
        &self,
        _player_id: &str,
    ) -> Result<Option<WorldSnapshot>, StoreError> {
        Ok(None)
    }

    async fn for_session(
        &self,
        _player_id: &str,
        _session_id: i64,
    ) -> Result<Option<WorldSnapshot>, StoreError> {
        Ok(None)
    }
}

// =============================================================================
// Basic mode
// =============================================================================

#[tokio::test]
async fn basic_session_generates_and_persists() {
    let store = MemorySnapshotStore::new();
    let request = make_request("aria", 7);
    let mut rng = SmallRng::seed_from_u64(42);

    let outcome = run_session(&store, &request, None, &mut rng)
        .await
        .unwrap();
    assert_eq!(outcome.message, "World generated successfully");
    assert_eq!(outcome.config_provenance, None);
    assert_eq!(outcome.snapshot.world_grid.height(), 50);
    assert_eq!(outcome.snapshot.world_grid.width(), 50);

    // The mandatory village marks the basic-mode origin.
    let origin = outcome.snapshot.world_grid.tile(0, 0).unwrap();
    assert_eq!(origin.landmark_kind.as_deref(), Some("village"));

    let stored = store.for_session("aria", 7).await.unwrap().unwrap();
    assert_eq!(stored, outcome.snapshot);
}

#[tokio::test]
async fn basic_sessions_are_reproducible_per_seed() {
    let store = MemorySnapshotStore::new();
    let request = make_request("aria", 1);

    let mut rng_a = SmallRng::seed_from_u64(9);
    let first = run_session(&store, &request, None, &mut rng_a)
        .await
        .unwrap();
    let mut rng_b = SmallRng::seed_from_u64(9);
    let second = run_session(&store, &request, None, &mut rng_b)
        .await
        .unwrap();

    // Timestamps differ between runs; the worlds must not.
    assert_eq!(first.snapshot.world_grid, second.snapshot.world_grid);
}

// =============================================================================
// Configured mode
// =============================================================================

#[tokio::test]
async fn imaginary_session_uses_the_supplied_configuration() {
    let store = MemorySnapshotStore::new();
    let mut request = make_request("aria", 3);
    request.imaginary_world = true;
    let raw = r#"{
        "mapSize": { "width": 12, "height": 9 },
        "terrain": { "grass": 100 },
        "landmarks": {}
    }"#;
    let mut rng = SmallRng::seed_from_u64(11);

    let outcome = run_session(&store, &request, Some(raw), &mut rng)
        .await
        .unwrap();
    assert_eq!(outcome.config_provenance, Some(ConfigProvenance::Supplied));
    assert_eq!(outcome.snapshot.world_grid.height(), 9);
    assert_eq!(outcome.snapshot.world_grid.width(), 12);
    // Configured runs skip the mandatory layout.
    let grid = &outcome.snapshot.world_grid;
    assert!(grid.tile(0, 0).unwrap().landmark_kind.is_none());
}

#[tokio::test]
async fn imaginary_session_without_config_takes_the_default() {
    let store = MemorySnapshotStore::new();
    let mut request = make_request("aria", 4);
    request.imaginary_world = true;
    let mut rng = SmallRng::seed_from_u64(13);

    let outcome = run_session(&store, &request, None, &mut rng)
        .await
        .unwrap();
    assert_eq!(
        outcome.config_provenance,
        Some(ConfigProvenance::FallbackMissing)
    );

    // Default-config landmarks land at their fixed tiles.
    let grid = &outcome.snapshot.world_grid;
    assert_eq!(grid.height(), 50);
    assert_eq!(grid.width(), 50);
    assert_eq!(
        grid.tile(10, 10).unwrap().landmark_kind.as_deref(),
        Some("structure")
    );
    assert_eq!(
        grid.tile(15, 35).unwrap().landmark_kind.as_deref(),
        Some("crash site")
    );
    assert_eq!(
        grid.tile(25, 25).unwrap().landmark_kind.as_deref(),
        Some("hidden core")
    );
}

#[tokio::test]
async fn malformed_config_still_generates_a_world() {
    let store = MemorySnapshotStore::new();
    let mut request = make_request("aria", 5);
    request.imaginary_world = true;
    let mut rng = SmallRng::seed_from_u64(17);

    let outcome = run_session(&store, &request, Some("{ not json"), &mut rng)
        .await
        .unwrap();
    assert_eq!(
        outcome.config_provenance,
        Some(ConfigProvenance::FallbackInvalid)
    );
    assert_eq!(outcome.snapshot.world_grid.height(), 50);
    assert!(store.for_session("aria", 5).await.unwrap().is_some());
}

// =============================================================================
// Error split
// =============================================================================

#[tokio::test]
async fn blank_players_are_rejected_before_generation() {
    let store = MemorySnapshotStore::new();
    let request = make_request("   ", 6);
    let mut rng = SmallRng::seed_from_u64(19);

    let error = run_session(&store, &request, None, &mut rng)
        .await
        .unwrap_err();
    assert!(matches!(error, SessionError::EmptyPlayer));
    assert!(store.latest_for_player("   ").await.unwrap().is_none());
}

#[tokio::test]
async fn generation_failures_persist_nothing() {
    let store = MemorySnapshotStore::new();
    let mut request = make_request("aria", 8);
    request.width = 0;
    let mut rng = SmallRng::seed_from_u64(23);

    let error = run_session(&store, &request, None, &mut rng)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        SessionError::Generation {
            source: WorldGenError::EmptyGrid { .. }
        }
    ));
    assert!(store.latest_for_player("aria").await.unwrap().is_none());
}

#[tokio::test]
async fn persistence_failures_carry_the_generated_snapshot() {
    let request = make_request("aria", 9);
    let mut rng = SmallRng::seed_from_u64(27);

    let error = run_session(&OfflineStore, &request, None, &mut rng)
        .await
        .unwrap_err();
    let SessionError::Persistence { source, snapshot } = error else {
        panic!("expected a persistence error");
    };
    assert!(matches!(source, StoreError::Unavailable(_)));
    assert_eq!(snapshot.player_id, "aria");
    assert_eq!(snapshot.session_id, 9);
    assert_eq!(snapshot.world_grid.height(), 50);
}
