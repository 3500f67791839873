//! Landmark placement: configured embedding and the basic-mode fallback.
//!
//! The two operations are mutually exclusive per generation run. Configured
//! placement walks the biome configuration's entries; the mandatory trio is
//! a fallback for runs without any configuration. Neither touches a tile's
//! terrain category.

use std::collections::BTreeMap;

use realmgen_types::{LandmarkEntries, WorldGrid};
use tracing::warn;

/// Label of the mandatory landmark at the origin corner.
pub const VILLAGE_LABEL: &str = "village";

/// Label of the mandatory landmark at the grid center.
pub const CAVE_LABEL: &str = "cave";

/// Label of the mandatory landmark at the far corner.
pub const TREASURE_LABEL: &str = "treasure";

/// Embed every configured landmark into the grid.
///
/// Each entry carries explicit coordinates and an optional label; entries
/// without one take their kind's default label. Coordinates outside the
/// grid are logged and skipped, never an error. Returns the number of
/// landmarks placed.
pub fn place_configured(
    grid: &mut WorldGrid,
    landmarks: &BTreeMap<String, LandmarkEntries>,
) -> usize {
    let mut placed: usize = 0;
    for (kind, entries) in landmarks {
        for spec in entries.as_slice() {
            let resolved = grid.resolve(spec.position);
            let Some(tile) = resolved.and_then(|(x, y)| grid.tile_mut(x, y)) else {
                warn!(
                    kind = kind.as_str(),
                    position = %spec.position,
                    "skipping out-of-bounds landmark"
                );
                continue;
            };
            let label = spec.kind.clone().unwrap_or_else(|| default_label(kind));
            tile.landmark_kind = Some(label);
            placed = placed.saturating_add(1);
        }
    }
    placed
}

/// Force the three mandatory landmarks at their canonical tiles.
///
/// Village at the origin, cave at the center (integer division), treasure
/// at the far corner. Overwrites whatever those tiles held, so repeated
/// calls leave the same state. Used only for runs without a biome
/// configuration.
pub fn place_mandatory(grid: &mut WorldGrid) {
    let height = grid.height();
    let width = grid.width();
    let center_x = height.checked_div(2).unwrap_or(0);
    let center_y = width.checked_div(2).unwrap_or(0);
    set_landmark(grid, 0, 0, VILLAGE_LABEL);
    set_landmark(grid, center_x, center_y, CAVE_LABEL);
    set_landmark(
        grid,
        height.saturating_sub(1),
        width.saturating_sub(1),
        TREASURE_LABEL,
    );
}

/// Overwrite the landmark label at `(x, y)`; out of bounds is a no-op.
fn set_landmark(grid: &mut WorldGrid, x: usize, y: usize, label: &str) {
    if let Some(tile) = grid.tile_mut(x, y) {
        tile.landmark_kind = Some(label.to_owned());
    }
}

/// The label applied when an entry names no explicit type.
///
/// Known kinds map to singular display labels; unknown kinds fall back to
/// the kind key itself, keeping the placer open to new configuration
/// vocabularies.
fn default_label(kind: &str) -> String {
    match kind {
        "structures" => "structure".to_owned(),
        "crashSites" => "crash site".to_owned(),
        "hiddenCore" => "hidden core".to_owned(),
        other => other.to_owned(),
    }
}
