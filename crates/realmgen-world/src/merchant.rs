//! Merchant scatter: seeding eligible tiles under a global density budget.

use rand::Rng;
use realmgen_types::WorldGrid;
use tracing::debug;

/// Compute the merchant target for a grid area and density.
///
/// `floor(total_tiles * density)`. Non-finite and non-positive densities
/// yield zero; the result never exceeds the tile count.
pub fn merchant_target(total_tiles: usize, density: f64) -> usize {
    if !density.is_finite() || density <= 0.0 || total_tiles == 0 {
        return 0;
    }
    // Grid areas stay far below 2^52, so the f64 round trip is exact.
    #[allow(clippy::cast_precision_loss)]
    let raw = (total_tiles as f64 * density).floor();
    if raw <= 0.0 {
        return 0;
    }
    // floor() of a positive finite value; saturation covers absurd densities.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let target = raw as usize;
    target.min(total_tiles)
}

/// Scatter merchants onto up to `target_count` eligible tiles.
///
/// A tile is eligible when it is not water and holds no merchant yet. The
/// eligible set is collected up front and sampled without replacement via a
/// partial Fisher-Yates shuffle, so the walk terminates in bounded time even
/// when eligible tiles are scarcer than the target (an all-water grid places
/// nothing). Returns the number of merchants placed.
pub fn scatter_merchants(grid: &mut WorldGrid, target_count: usize, rng: &mut impl Rng) -> usize {
    let mut eligible: Vec<(usize, usize)> = Vec::new();
    for x in 0..grid.height() {
        for y in 0..grid.width() {
            let open = grid
                .tile(x, y)
                .is_some_and(|tile| !tile.category.is_water() && !tile.has_merchant);
            if open {
                eligible.push((x, y));
            }
        }
    }

    let count = target_count.min(eligible.len());
    for i in 0..count {
        let j = rng.random_range(i..eligible.len());
        eligible.swap(i, j);
    }

    let mut placed: usize = 0;
    for &(x, y) in eligible.iter().take(count) {
        if let Some(tile) = grid.tile_mut(x, y) {
            tile.has_merchant = true;
            placed = placed.saturating_add(1);
        }
    }

    debug!(
        target = target_count,
        placed,
        eligible_tiles = eligible.len(),
        "merchants scattered"
    );
    placed
}
