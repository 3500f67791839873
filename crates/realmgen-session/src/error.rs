//! Error types for session orchestration.
//!
//! The split mirrors what callers need to distinguish: a request that
//! could not be serviced at all, a world that could not be generated, and
//! a world that generated fine but could not be persisted.

use realmgen_store::{StoreError, WorldSnapshot};
use realmgen_world::WorldGenError;

/// Errors that can occur while running a generation session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The request named no player to generate for.
    #[error("generation request has a blank player name")]
    EmptyPlayer,

    /// The world pipeline failed; nothing was persisted.
    #[error("world generation failed: {source}")]
    Generation {
        /// The underlying pipeline error.
        #[from]
        source: WorldGenError,
    },

    /// The persistence sink rejected the snapshot.
    ///
    /// The generated world itself is still valid; it rides along so the
    /// caller can decide whether to hand it back anyway.
    #[error("snapshot persistence failed: {source}")]
    Persistence {
        /// The underlying store error.
        source: StoreError,
        /// The snapshot that failed to persist.
        snapshot: Box<WorldSnapshot>,
    },
}
