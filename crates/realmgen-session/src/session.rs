//! The generate-then-persist session flow.
//!
//! One session is one request: resolve the generation mode, run the
//! pipeline, wrap the grid in a snapshot, persist it. Stages run strictly
//! in that order; persistence failures never invalidate the generated
//! world.

use rand::Rng;
use realmgen_store::{SnapshotStore, WorldSnapshot};
use realmgen_types::GenerationRequest;
use realmgen_world::{GenerationMode, GenerationParams, QuestOptions, generate};
use tracing::info;

use crate::config::{ConfigProvenance, ResolvedConfig, resolve_config};
use crate::error::SessionError;

/// The result of a completed session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    /// Status line for the response surface.
    pub message: String,
    /// The snapshot that was persisted.
    pub snapshot: WorldSnapshot,
    /// Where the biome configuration came from; `None` for basic-mode
    /// runs, which use no configuration.
    pub config_provenance: Option<ConfigProvenance>,
}

/// Run one generation session end to end.
///
/// `imaginaryWorld` requests resolve `raw_config` (with the built-in
/// fallback) and take their dimensions from it; basic requests use the
/// dimensions on the request and the mandatory landmark layout. The
/// generated grid is wrapped in a snapshot and handed to the sink once,
/// with no retries.
///
/// # Errors
///
/// Returns [`SessionError::EmptyPlayer`] for a blank player name,
/// [`SessionError::Generation`] when the pipeline fails (nothing is
/// persisted), and [`SessionError::Persistence`] when the sink rejects
/// the snapshot, with the still-valid snapshot attached.
pub async fn run_session(
    store: &dyn SnapshotStore,
    request: &GenerationRequest,
    raw_config: Option<&str>,
    rng: &mut impl Rng,
) -> Result<SessionOutcome, SessionError> {
    if request.player.trim().is_empty() {
        return Err(SessionError::EmptyPlayer);
    }

    let (mode, provenance) = if request.imaginary_world {
        let ResolvedConfig { config, provenance } = resolve_config(raw_config);
        (GenerationMode::Configured(config), Some(provenance))
    } else {
        (GenerationMode::Basic, None)
    };

    let params = GenerationParams {
        height: request.height,
        width: request.width,
        mode,
        merchant_density: request.landmark_percentage,
        quest_options: QuestOptions::default(),
    };
    let grid = generate(&params, rng)?;

    let snapshot = WorldSnapshot::new(&request.player, request.session_id, grid);
    match store.put(&snapshot).await {
        Ok(()) => {
            info!(
                player_id = %snapshot.player_id,
                session_id = snapshot.session_id,
                "Session generated and persisted"
            );
            Ok(SessionOutcome {
                message: "World generated successfully".to_owned(),
                snapshot,
                config_provenance: provenance,
            })
        }
        Err(source) => Err(SessionError::Persistence {
            source,
            snapshot: Box::new(snapshot),
        }),
    }
}
