//! End-to-end world generation: terrain, landmarks, merchants, quests.

use rand::Rng;
use realmgen_types::{BiomeConfig, DEFAULT_MAP_EDGE, DEFAULT_MERCHANT_DENSITY, WorldGrid};
use tracing::info;

use crate::elevation::{ElevationSource, PerlinElevation};
use crate::error::WorldGenError;
use crate::landmark::{place_configured, place_mandatory};
use crate::merchant::{merchant_target, scatter_merchants};
use crate::quest::{QuestOptions, assign_quests};
use crate::terrain::{CategoryBudgets, classify};

/// Where terrain coverage and landmark placements come from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GenerationMode {
    /// Elevation-only terrain with the three mandatory landmarks at the
    /// origin, the center, and the far corner.
    #[default]
    Basic,
    /// Coverage and landmarks come from a biome configuration, which also
    /// fixes the grid dimensions. Mandatory landmarks are skipped.
    Configured(BiomeConfig),
}

/// Inputs for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Grid height in tiles. Configured mode reads dimensions from the
    /// biome map size instead.
    pub height: usize,
    /// Grid width in tiles. Configured mode reads dimensions from the
    /// biome map size instead.
    pub width: usize,
    /// Terrain and landmark source.
    pub mode: GenerationMode,
    /// Fraction of tiles seeded with merchants.
    pub merchant_density: f64,
    /// Quest assignment tuning.
    pub quest_options: QuestOptions,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            height: DEFAULT_MAP_EDGE,
            width: DEFAULT_MAP_EDGE,
            mode: GenerationMode::Basic,
            merchant_density: DEFAULT_MERCHANT_DENSITY,
            quest_options: QuestOptions::default(),
        }
    }
}

/// Run the full pipeline against a caller-supplied elevation source.
///
/// Stages run strictly in sequence over one exclusively owned grid, and
/// all randomness flows through `rng`, so a seeded generator plus a fixed
/// elevation source reproduce the same world for the same parameters.
///
/// # Errors
///
/// Returns [`WorldGenError::EmptyGrid`] when either dimension is zero and
/// [`WorldGenError::GridTooLarge`] when the tile count overflows.
pub fn generate_world(
    params: &GenerationParams,
    elevation: &dyn ElevationSource,
    rng: &mut impl Rng,
) -> Result<WorldGrid, WorldGenError> {
    let (height, width) = dimensions(params);
    if height == 0 || width == 0 {
        return Err(WorldGenError::EmptyGrid { height, width });
    }
    let total_tiles = height
        .checked_mul(width)
        .ok_or(WorldGenError::GridTooLarge { height, width })?;
    let mut grid =
        WorldGrid::new(height, width).ok_or(WorldGenError::GridTooLarge { height, width })?;

    info!(
        height,
        width,
        mode = mode_name(&params.mode),
        "world generation started"
    );

    // --- Stage 1: terrain classification ---
    let mut budgets = match &params.mode {
        GenerationMode::Basic => CategoryBudgets::default(),
        GenerationMode::Configured(config) => {
            CategoryBudgets::from_coverage(&config.terrain, total_tiles)
        }
    };
    for x in 0..height {
        for y in 0..width {
            let category = classify(elevation.elevation(x, y), &mut budgets, rng);
            if let Some(tile) = grid.tile_mut(x, y) {
                tile.category = category;
            }
        }
    }

    // --- Stage 2: landmark placement ---
    match &params.mode {
        GenerationMode::Basic => place_mandatory(&mut grid),
        GenerationMode::Configured(config) => {
            place_configured(&mut grid, &config.landmarks);
        }
    }
    let landmarks = grid.tiles().filter(|tile| tile.is_landmark()).count();

    // --- Stage 3: merchant scatter ---
    let target = merchant_target(total_tiles, params.merchant_density);
    let merchants = scatter_merchants(&mut grid, target, rng);

    // --- Stage 4: quest assignment ---
    let quests = assign_quests(&mut grid, params.quest_options, rng);

    info!(
        landmarks,
        merchants,
        quests = quests.len(),
        "world generation finished"
    );
    Ok(grid)
}

/// Generate a world with a freshly seeded Perlin elevation source.
///
/// The noise seed is drawn from `rng`, so the whole world, terrain
/// included, reproduces from one seeded generator.
///
/// # Errors
///
/// Propagates any [`WorldGenError`] from [`generate_world`].
pub fn generate(params: &GenerationParams, rng: &mut impl Rng) -> Result<WorldGrid, WorldGenError> {
    let seed: u32 = rng.random();
    let elevation = PerlinElevation::new(seed);
    generate_world(params, &elevation, rng)
}

const fn dimensions(params: &GenerationParams) -> (usize, usize) {
    match &params.mode {
        GenerationMode::Basic => (params.height, params.width),
        GenerationMode::Configured(config) => (config.map_size.height, config.map_size.width),
    }
}

const fn mode_name(mode: &GenerationMode) -> &'static str {
    match mode {
        GenerationMode::Basic => "basic",
        GenerationMode::Configured(_) => "configured",
    }
}
