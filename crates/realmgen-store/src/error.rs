//! Error types for the snapshot store boundary.
//!
//! All persistence failures surface as [`StoreError`], kept apart from
//! generation errors so callers can tell "could not generate" from
//! "could not persist".

/// Errors that can occur while persisting or loading world snapshots.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A snapshot could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store could not service the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
