//! Terrain classification: fixed elevation thresholds plus a
//! coverage-weighted category pool.
//!
//! Classification is approximate: elevation forces water and mountain
//! outright, so configured coverage only shapes the mid-band tiles.
//! Exact category counts are not guaranteed, but no category is ever
//! drawn beyond its budget.

use std::collections::BTreeMap;

use rand::Rng;
use realmgen_types::Terrain;

/// Elevation below which a tile is always water.
pub const WATER_THRESHOLD: f64 = -0.2;

/// Elevation above which a tile is always mountain.
pub const MOUNTAIN_THRESHOLD: f64 = 0.5;

/// Remaining per-category draw budgets for the classifier pool.
///
/// Budgets are derived once per generation run: each configured category
/// gets `floor(percent / 100 * total_tiles)` draws. Selection picks
/// uniformly among categories with budget left and decrements the winner.
/// Once the pool is spent, tiles default to grass and the grass budget is
/// reseeded to one so later defaults keep flowing through the same path;
/// grass can therefore exceed its configured share, other categories never
/// exceed theirs.
#[derive(Debug, Clone, Default)]
pub struct CategoryBudgets {
    remaining: BTreeMap<Terrain, usize>,
}

impl CategoryBudgets {
    /// Derive budgets from a coverage map for a grid of `total_tiles`.
    ///
    /// Negative and non-finite coverage values contribute nothing, and a
    /// zero-tile grid produces an empty pool. Names that normalize to the
    /// same category accumulate into one budget.
    pub fn from_coverage(coverage: &BTreeMap<String, f64>, total_tiles: usize) -> Self {
        let mut remaining: BTreeMap<Terrain, usize> = BTreeMap::new();
        for (name, &percent) in coverage {
            let budget = category_budget(percent, total_tiles);
            if budget > 0 {
                let slot = remaining.entry(Terrain::from_name(name)).or_insert(0);
                *slot = slot.saturating_add(budget);
            }
        }
        Self { remaining }
    }

    /// Remaining budget for one category.
    pub fn remaining(&self, category: &Terrain) -> usize {
        self.remaining.get(category).copied().unwrap_or(0)
    }

    /// Whether any category still has budget.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.values().all(|&budget| budget == 0)
    }

    /// Uniformly draw a category with remaining budget, decrementing it.
    ///
    /// Returns grass and reseeds the grass budget to one when the pool is
    /// exhausted.
    fn draw(&mut self, rng: &mut impl Rng) -> Terrain {
        let live: Vec<Terrain> = self
            .remaining
            .iter()
            .filter(|&(_, &budget)| budget > 0)
            .map(|(category, _)| category.clone())
            .collect();

        if live.is_empty() {
            self.remaining.insert(Terrain::Grass, 1);
            return Terrain::Grass;
        }

        let index = rng.random_range(0..live.len());
        let category = live.get(index).cloned().unwrap_or_default();
        if let Some(budget) = self.remaining.get_mut(&category) {
            *budget = budget.saturating_sub(1);
        }
        category
    }
}

/// Classify one tile from its elevation and the shared budget pool.
///
/// Elevation thresholds win outright: strictly below [`WATER_THRESHOLD`]
/// is water, strictly above [`MOUNTAIN_THRESHOLD`] is mountain. Only
/// mid-band tiles consume pool budget (and random draws).
pub fn classify(elevation: f64, budgets: &mut CategoryBudgets, rng: &mut impl Rng) -> Terrain {
    if elevation < WATER_THRESHOLD {
        return Terrain::Water;
    }
    if elevation > MOUNTAIN_THRESHOLD {
        return Terrain::Mountain;
    }
    budgets.draw(rng)
}

/// `floor(percent / 100 * total_tiles)`, clamped to the tile count.
fn category_budget(percent: f64, total_tiles: usize) -> usize {
    if !percent.is_finite() || percent <= 0.0 || total_tiles == 0 {
        return 0;
    }
    // Grid areas stay far below 2^52, so the f64 round trip is exact.
    #[allow(clippy::cast_precision_loss)]
    let raw = (percent / 100.0 * total_tiles as f64).floor();
    if raw <= 0.0 {
        return 0;
    }
    // floor() of a positive finite value; saturation covers absurd percents.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let budget = raw as usize;
    budget.min(total_tiles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn coverage(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|&(name, percent)| (name.to_owned(), percent))
            .collect()
    }

    #[test]
    fn low_elevation_is_always_water() {
        let mut budgets = CategoryBudgets::from_coverage(&coverage(&[("forest", 100.0)]), 100);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(classify(-0.21, &mut budgets, &mut rng), Terrain::Water);
        assert_eq!(classify(-1.0, &mut budgets, &mut rng), Terrain::Water);
        // The threshold itself is not water.
        assert_ne!(classify(-0.2, &mut budgets, &mut rng), Terrain::Water);
    }

    #[test]
    fn high_elevation_is_always_mountain() {
        let mut budgets = CategoryBudgets::from_coverage(&coverage(&[("forest", 100.0)]), 100);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(classify(0.51, &mut budgets, &mut rng), Terrain::Mountain);
        assert_eq!(classify(1.0, &mut budgets, &mut rng), Terrain::Mountain);
        // The threshold itself is not mountain.
        assert_ne!(classify(0.5, &mut budgets, &mut rng), Terrain::Mountain);
    }

    #[test]
    fn thresholds_ignore_the_pool() {
        let mut budgets = CategoryBudgets::default();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(classify(-0.5, &mut budgets, &mut rng), Terrain::Water);
        // No budget was consumed or seeded by the forced draw.
        assert_eq!(budgets.remaining(&Terrain::Grass), 0);
    }

    #[test]
    fn budgets_floor_the_coverage_share() {
        let budgets = CategoryBudgets::from_coverage(&coverage(&[("forest", 33.0)]), 100);
        assert_eq!(budgets.remaining(&Terrain::Forest), 33);

        // 33% of 10 tiles floors to 3.
        let small = CategoryBudgets::from_coverage(&coverage(&[("forest", 33.0)]), 10);
        assert_eq!(small.remaining(&Terrain::Forest), 3);
    }

    #[test]
    fn duplicate_names_accumulate_after_normalization() {
        let mut map = BTreeMap::new();
        map.insert("Forest".to_owned(), 10.0);
        map.insert("forest".to_owned(), 20.0);
        let budgets = CategoryBudgets::from_coverage(&map, 100);
        assert_eq!(budgets.remaining(&Terrain::Forest), 30);
    }

    #[test]
    fn invalid_coverage_values_contribute_nothing() {
        let budgets = CategoryBudgets::from_coverage(
            &coverage(&[("forest", -10.0), ("desert", f64::NAN), ("swamp", 20.0)]),
            100,
        );
        assert_eq!(budgets.remaining(&Terrain::Forest), 0);
        assert_eq!(budgets.remaining(&Terrain::Custom("desert".to_owned())), 0);
        assert_eq!(budgets.remaining(&Terrain::Custom("swamp".to_owned())), 20);
    }

    #[test]
    fn zero_tile_grids_produce_an_empty_pool() {
        let budgets = CategoryBudgets::from_coverage(&coverage(&[("forest", 100.0)]), 0);
        assert!(budgets.is_exhausted());
    }

    #[test]
    fn draws_never_exceed_a_category_budget() {
        let mut budgets = CategoryBudgets::from_coverage(
            &coverage(&[("forest", 10.0), ("desert", 10.0)]),
            100,
        );
        let mut rng = SmallRng::seed_from_u64(99);

        let mut forest_count: usize = 0;
        for _ in 0..200 {
            if classify(0.0, &mut budgets, &mut rng) == Terrain::Forest {
                forest_count = forest_count.saturating_add(1);
            }
        }
        assert_eq!(forest_count, 10, "forest budget must drain exactly once");
    }

    #[test]
    fn exhausted_pool_defaults_to_grass_and_reseeds() {
        let mut budgets = CategoryBudgets::default();
        let mut rng = SmallRng::seed_from_u64(5);

        assert_eq!(classify(0.0, &mut budgets, &mut rng), Terrain::Grass);
        // The default seeded grass so the next draw goes through the pool.
        assert_eq!(budgets.remaining(&Terrain::Grass), 1);
        assert_eq!(classify(0.0, &mut budgets, &mut rng), Terrain::Grass);
        assert_eq!(budgets.remaining(&Terrain::Grass), 0);
    }

    #[test]
    fn all_configured_categories_get_drawn() {
        let mut budgets = CategoryBudgets::from_coverage(
            &coverage(&[("forest", 50.0), ("desert", 50.0)]),
            100,
        );
        let mut rng = SmallRng::seed_from_u64(7);

        let mut forest: usize = 0;
        let mut desert: usize = 0;
        for _ in 0..100 {
            match classify(0.0, &mut budgets, &mut rng) {
                Terrain::Forest => forest = forest.saturating_add(1),
                Terrain::Custom(name) if name == "desert" => {
                    desert = desert.saturating_add(1);
                }
                _ => {}
            }
        }
        assert_eq!(forest, 50);
        assert_eq!(desert, 50);
        assert!(budgets.is_exhausted());
    }
}
