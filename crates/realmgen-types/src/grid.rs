//! The world grid: an owned, rectangular arena of tiles.

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::position::Position;
use crate::tile::Tile;

/// A rectangular arena of [`Tile`] values, stored row-major.
///
/// Addressed by `(x, y)` where `x ∈ [0, height)` selects the row and
/// `y ∈ [0, width)` the column. Exclusively owned by one generation
/// invocation; tiles hold no references back to the grid.
///
/// The wire form is the nested `[row][col]` array snapshot consumers
/// expect; deserialization rejects ragged input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    tiles: Vec<Tile>,
    height: usize,
    width: usize,
}

impl WorldGrid {
    /// Create a `height x width` grid of undiscovered grass tiles.
    ///
    /// Returns `None` when the tile count would overflow `usize`.
    pub fn new(height: usize, width: usize) -> Option<Self> {
        let area = height.checked_mul(width)?;
        Some(Self {
            tiles: vec![Tile::default(); area],
            height,
            width,
        })
    }

    /// Grid height (row count).
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid width (column count).
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of tiles.
    pub const fn total_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid contains no tiles.
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `(x, y)` lies inside the grid.
    pub const fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.height && y < self.width
    }

    /// The tile at `(x, y)`, or `None` out of bounds.
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.index_of(x, y).and_then(|index| self.tiles.get(index))
    }

    /// Mutable access to the tile at `(x, y)`, or `None` out of bounds.
    pub fn tile_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.index_of(x, y)
            .and_then(|index| self.tiles.get_mut(index))
    }

    /// Resolve a wire position to in-bounds row and column indices.
    ///
    /// Returns `None` for negative or out-of-range coordinates.
    pub fn resolve(&self, position: Position) -> Option<(usize, usize)> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        self.in_bounds(x, y).then_some((x, y))
    }

    /// Iterate all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if self.in_bounds(x, y) {
            x.checked_mul(self.width)?.checked_add(y)
        } else {
            None
        }
    }
}

impl Serialize for WorldGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        if self.width == 0 {
            let empty: &[Tile] = &[];
            for _ in 0..self.height {
                seq.serialize_element(empty)?;
            }
        } else {
            for row in self.tiles.chunks(self.width) {
                seq.serialize_element(row)?;
            }
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for WorldGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<Tile>>::deserialize(deserializer)?;
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let area = height
            .checked_mul(width)
            .ok_or_else(|| D::Error::custom("grid area overflows"))?;
        let mut tiles = Vec::with_capacity(area);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                let got = row.len();
                return Err(D::Error::custom(format!(
                    "ragged grid: row {row_index} has {got} tiles, expected {width}"
                )));
            }
            tiles.extend(row);
        }

        Ok(Self {
            tiles,
            height,
            width,
        })
    }
}
