//! Session orchestration for the Realmgen workspace.
//!
//! This crate ties the pieces together for one generation request:
//! resolving the biome configuration (with its explicit built-in
//! fallback), running the world pipeline, and persisting the snapshot
//! through the store boundary. Transport concerns stay outside; callers
//! hand in a parsed request and an optional configuration payload.
//!
//! # Modules
//!
//! - [`config`] -- Biome configuration resolution and the built-in default
//! - [`error`] -- The generation/persistence error split
//! - [`session`] -- The generate-then-persist flow

pub mod config;
pub mod error;
pub mod session;

// Re-export primary types for convenience.
pub use config::{ConfigProvenance, ResolvedConfig, default_config, resolve_config};
pub use error::SessionError;
pub use session::{SessionOutcome, run_session};
