//! Quest assignment: per-tile predicates evaluated in strict priority order.

use rand::Rng;
use realmgen_types::{Position, Quest, QuestKind, QuestRewards, Terrain, WorldGrid};
use tracing::debug;

use crate::landmark::CAVE_LABEL;

/// Probability that a forest tile yields a gathering quest.
pub const FOREST_QUEST_CHANCE: f64 = 0.1;

/// Edge-to-center offset applied by the legacy location wrap.
const WRAP_WINDOW: usize = 25;

/// Grid edge length the legacy wrap is pinned to.
const WRAP_EDGE: usize = 50;

/// Highest in-bounds coordinate on a grid of [`WRAP_EDGE`] tiles.
const WRAP_FAR_EDGE: usize = WRAP_EDGE - 1;

/// Tuning for quest assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestOptions {
    /// Report quest locations through the fixed edge wrap older 50x50 maps
    /// used. Off by default, and ignored entirely on any other grid size.
    pub legacy_location_wrap: bool,
}

/// Walk the grid row by row and attach at most one quest per tile.
///
/// Predicates run in strict priority order, stopping at the first match:
/// merchant delivery, cave exploration, forest gathering with probability
/// [`FOREST_QUEST_CHANCE`], then shoreline search on grass next to water.
/// Tiles matching no predicate stay quest-free. Returns every quest handed
/// out, in walk order; each tile also keeps its own copy.
pub fn assign_quests(
    grid: &mut WorldGrid,
    options: QuestOptions,
    rng: &mut impl Rng,
) -> Vec<Quest> {
    let wrap =
        options.legacy_location_wrap && grid.height() == WRAP_EDGE && grid.width() == WRAP_EDGE;
    let mut assigned = Vec::new();

    for x in 0..grid.height() {
        for y in 0..grid.width() {
            let Some(quest) = quest_for_tile(grid, x, y, wrap, rng) else {
                continue;
            };
            if let Some(tile) = grid.tile_mut(x, y) {
                tile.quest = Some(quest.clone());
                assigned.push(quest);
            }
        }
    }

    debug!(quests = assigned.len(), "quests assigned");
    assigned
}

/// Whether any of the eight surrounding tiles is water.
///
/// Out-of-bounds neighbors count as dry, so edge and corner tiles only
/// consider the neighbors that exist.
pub fn is_near_water(grid: &WorldGrid, x: usize, y: usize) -> bool {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
    OFFSETS.iter().any(|&(dx, dy)| {
        let Some(nx) = offset_index(x, dx) else {
            return false;
        };
        let Some(ny) = offset_index(y, dy) else {
            return false;
        };
        grid.tile(nx, ny)
            .is_some_and(|tile| tile.category.is_water())
    })
}

fn quest_for_tile(
    grid: &WorldGrid,
    x: usize,
    y: usize,
    wrap: bool,
    rng: &mut impl Rng,
) -> Option<Quest> {
    let tile = grid.tile(x, y)?;
    let location = quest_location(x, y, wrap);

    if tile.has_merchant {
        return Some(Quest {
            description: "Deliver a parcel to the traveling merchant".to_owned(),
            location,
            kind: QuestKind::Delivery,
            rewards: QuestRewards::with_gold(100, 50),
        });
    }
    if tile.landmark_kind.as_deref() == Some(CAVE_LABEL) {
        return Some(Quest {
            description: "Explore the depths of the cave".to_owned(),
            location,
            kind: QuestKind::Exploration,
            rewards: QuestRewards::with_items(150, vec!["Rare Gem".to_owned()]),
        });
    }
    if tile.category == Terrain::Forest && rng.random_bool(FOREST_QUEST_CHANCE) {
        return Some(Quest {
            description: "Gather herbs from the deep forest".to_owned(),
            location,
            kind: QuestKind::Gathering,
            rewards: QuestRewards::with_items(75, vec!["Healing Potion".to_owned()]),
        });
    }
    if tile.category == Terrain::Grass && is_near_water(grid, x, y) {
        return Some(Quest {
            description: "Search the shoreline for lost cargo".to_owned(),
            location,
            kind: QuestKind::Search,
            rewards: QuestRewards::with_items(50, vec!["Fishing Rod".to_owned()]),
        });
    }
    None
}

fn quest_location(x: usize, y: usize, wrap: bool) -> Position {
    if wrap {
        Position::from_indices(wrap_coordinate(x), wrap_coordinate(y))
    } else {
        Position::from_indices(x, y)
    }
}

const fn wrap_coordinate(coord: usize) -> usize {
    if coord == 0 {
        WRAP_WINDOW
    } else if coord >= WRAP_FAR_EDGE {
        coord.saturating_sub(WRAP_WINDOW)
    } else {
        coord
    }
}

const fn offset_index(base: usize, delta: isize) -> Option<usize> {
    base.checked_add_signed(delta)
}
