//! Elevation sampling for terrain classification.
//!
//! Elevation is a deterministic scalar field over grid coordinates: the same
//! source instance always reports the same value for the same tile, which is
//! what makes a generation run reproducible. One source is created per run,
//! so concurrent requests never share noise state.

use noise::{NoiseFn, Perlin};

/// Scale divisor applied to grid coordinates before sampling.
///
/// Larger values stretch terrain features across more tiles.
pub const DEFAULT_ELEVATION_SCALE: f64 = 50.0;

/// A deterministic elevation field over grid coordinates.
///
/// Implementations must be pure: for a given instance, the same `(x, y)`
/// always yields the same value in `[-1, 1]`.
pub trait ElevationSource {
    /// Sample the elevation for the tile at `(x, y)`.
    fn elevation(&self, x: usize, y: usize) -> f64;
}

/// Perlin-noise elevation with a fixed coordinate scale.
///
/// Grid coordinates are divided by the scale before sampling so neighboring
/// tiles land on nearby points of the noise lattice, producing smooth
/// regional variation instead of per-tile static.
#[derive(Debug, Clone)]
pub struct PerlinElevation {
    perlin: Perlin,
    scale: f64,
}

impl PerlinElevation {
    /// Create a seeded field with the default scale.
    pub fn new(seed: u32) -> Self {
        Self::with_scale(seed, DEFAULT_ELEVATION_SCALE)
    }

    /// Create a seeded field with an explicit scale divisor.
    ///
    /// Non-positive and non-finite scales fall back to the default.
    pub fn with_scale(seed: u32, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            DEFAULT_ELEVATION_SCALE
        };
        Self {
            perlin: Perlin::new(seed),
            scale,
        }
    }
}

impl ElevationSource for PerlinElevation {
    fn elevation(&self, x: usize, y: usize) -> f64 {
        // Grid dimensions stay far below 2^52; the conversion is exact.
        #[allow(clippy::cast_precision_loss)]
        let sample = self
            .perlin
            .get([x as f64 / self.scale, y as f64 / self.scale]);
        sample.clamp(-1.0, 1.0)
    }
}

/// A constant elevation field for tests and degenerate scenarios.
#[derive(Debug, Clone, Copy)]
pub struct FlatElevation(
    /// The value reported for every tile.
    pub f64,
);

impl ElevationSource for FlatElevation {
    fn elevation(&self, _x: usize, _y: usize) -> f64 {
        self.0
    }
}
