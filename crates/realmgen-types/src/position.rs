//! Grid coordinates as they appear on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A coordinate pair addressing one grid tile.
///
/// `x` indexes the row (bounded by grid height) and `y` the column (bounded
/// by grid width). Wire values are signed because externally authored
/// configurations may carry coordinates outside the grid; placement code
/// bounds-checks before use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub x: i64,
    /// Column index.
    pub y: i64,
}

impl Position {
    /// Create a position from raw wire coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Build a position from in-grid row and column indices.
    pub fn from_indices(row: usize, col: usize) -> Self {
        Self {
            x: i64::try_from(row).unwrap_or(i64::MAX),
            y: i64::try_from(col).unwrap_or(i64::MAX),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
