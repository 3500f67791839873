//! Demo binary for the Realmgen world generator.
//!
//! This is the entry point that wires the full generation path together:
//! request assembly, biome configuration resolution, the staged world
//! pipeline, and the snapshot store. It generates one world for one
//! player, persists it to the in-memory store, then reads the snapshot
//! back and logs a summary.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Assemble the generation request from environment variables
//! 3. Load the optional biome configuration file
//! 4. Seed the random stream
//! 5. Run one generation session against the memory store
//! 6. Read the snapshot back and log a world summary
//!
//! # Environment
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `REALMGEN_PLAYER` | `wanderer` | Player the world is generated for |
//! | `REALMGEN_SESSION` | `1` | Numeric session identifier |
//! | `REALMGEN_BIOME` | unset | Path to a biome configuration JSON file |
//! | `REALMGEN_SEED` | drawn fresh | Seed for the random stream |

mod error;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use realmgen_session::run_session;
use realmgen_store::{MemorySnapshotStore, SnapshotStore};
use realmgen_types::GenerationRequest;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Application entry point for the demo engine.
///
/// Generates and persists one world, then reads it back. Returns an
/// error code on failure.
///
/// # Errors
///
/// Returns an error if request assembly, generation, or persistence fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("realmgen-engine starting");

    // 2. Assemble the generation request.
    let mut request = load_request()?;

    // 3. Load the optional biome configuration.
    let raw_config = load_biome_config()?;
    request.imaginary_world = raw_config.is_some();
    info!(
        player = request.player,
        session_id = request.session_id,
        imaginary_world = request.imaginary_world,
        "Generation request assembled"
    );

    // 4. Seed the random stream.
    let seed = load_seed()?;
    let mut rng = SmallRng::seed_from_u64(seed);
    info!(seed, "Random stream seeded");

    // 5. Run one generation session against the memory store.
    let store = MemorySnapshotStore::new();
    let outcome = run_session(&store, &request, raw_config.as_deref(), &mut rng).await?;
    info!(
        message = outcome.message,
        provenance = ?outcome.config_provenance,
        "Session completed"
    );

    // 6. Read the snapshot back and summarize the world.
    let snapshot = store
        .latest_for_player(&request.player)
        .await?
        .ok_or("no snapshot stored for the demo player")?;
    let grid = &snapshot.world_grid;
    let landmarks = grid.tiles().filter(|tile| tile.is_landmark()).count();
    let merchants = grid.tiles().filter(|tile| tile.has_merchant).count();
    let quests = grid.tiles().filter(|tile| tile.has_quest()).count();
    info!(
        height = grid.height(),
        width = grid.width(),
        landmarks,
        merchants,
        quests,
        generated_at = %snapshot.timestamp,
        "World summary"
    );

    info!("realmgen-engine shutdown complete");
    Ok(())
}

/// Assemble the generation request from environment variables.
///
/// `REALMGEN_PLAYER` and `REALMGEN_SESSION` override the defaults; all
/// other request fields keep their built-in values.
fn load_request() -> Result<GenerationRequest, EngineError> {
    let player = std::env::var("REALMGEN_PLAYER").unwrap_or_else(|_| "wanderer".to_owned());
    let session_id = match std::env::var("REALMGEN_SESSION") {
        Ok(raw) => raw.parse::<i64>().map_err(|e| EngineError::Environment {
            variable: "REALMGEN_SESSION",
            message: format!("{e}"),
        })?,
        Err(_) => 1,
    };
    Ok(GenerationRequest {
        player,
        session_id,
        ..GenerationRequest::default()
    })
}

/// Read the biome configuration file named by `REALMGEN_BIOME`.
///
/// Returns `None` when the variable is unset. The contents are passed
/// through verbatim; a file that fails to parse downstream falls back
/// to the built-in defaults rather than aborting the run.
fn load_biome_config() -> Result<Option<String>, EngineError> {
    let Ok(path) = std::env::var("REALMGEN_BIOME") else {
        return Ok(None);
    };
    let contents = std::fs::read_to_string(&path).map_err(|e| EngineError::BiomeConfig {
        path: path.clone(),
        message: format!("{e}"),
    })?;
    info!(path, "Biome configuration loaded");
    Ok(Some(contents))
}

/// Resolve the seed for the demo's random stream.
///
/// `REALMGEN_SEED` pins the stream for reproducible runs; otherwise a
/// fresh seed is drawn from the thread-local generator.
fn load_seed() -> Result<u64, EngineError> {
    match std::env::var("REALMGEN_SEED") {
        Ok(raw) => raw.parse::<u64>().map_err(|e| EngineError::Environment {
            variable: "REALMGEN_SEED",
            message: format!("{e}"),
        }),
        Err(_) => Ok(rand::rng().random()),
    }
}
