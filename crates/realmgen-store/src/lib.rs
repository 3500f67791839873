//! Snapshot persistence boundary for the Realmgen workspace.
//!
//! Generated worlds leave the pipeline as [`WorldSnapshot`] envelopes
//! keyed by player and session. [`SnapshotStore`] abstracts the backend;
//! [`MemorySnapshotStore`] is the in-process implementation used by tests
//! and the demo binary.
//!
//! # Modules
//!
//! - [`error`] -- Persistence failure types
//! - [`memory`] -- The in-memory store implementation
//! - [`snapshot_store`] -- The snapshot envelope and store trait

pub mod error;
pub mod memory;
pub mod snapshot_store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::MemorySnapshotStore;
pub use snapshot_store::{SnapshotStore, WorldSnapshot};
