//! Error types for the `realmgen-world` crate.
//!
//! Fallible operations in this crate return [`WorldGenError`] through the
//! standard [`Result`] type alias. Recoverable conditions (out-of-bounds
//! landmarks, exhausted coverage budgets, scarce merchant tiles) are handled
//! in place and never reach this type.

/// Errors that can occur while generating a world grid.
#[derive(Debug, thiserror::Error)]
pub enum WorldGenError {
    /// The requested grid has no tiles.
    #[error("cannot generate a {height}x{width} world: the grid has no tiles")]
    EmptyGrid {
        /// Requested row count.
        height: usize,
        /// Requested column count.
        width: usize,
    },

    /// The requested grid area does not fit in addressable memory.
    #[error("cannot generate a {height}x{width} world: the tile count overflows")]
    GridTooLarge {
        /// Requested row count.
        height: usize,
        /// Requested column count.
        width: usize,
    },
}
