//! Quest value types bound to grid tiles.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// The quest archetype, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    /// Bring goods to a merchant.
    Delivery,
    /// Venture into a landmark.
    Exploration,
    /// Collect materials from the terrain.
    Gathering,
    /// Comb an area for a lost item.
    Search,
}

/// Rewards granted on quest completion.
///
/// Quests pay experience plus either gold or items, never both; the unused
/// field serializes as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestRewards {
    /// Experience points.
    pub experience: u32,
    /// Currency payout, for quests that pay in gold.
    pub gold: Option<u32>,
    /// Item names, for quests that pay in goods.
    pub items: Option<Vec<String>>,
}

impl QuestRewards {
    /// Experience plus a gold payout.
    pub const fn with_gold(experience: u32, gold: u32) -> Self {
        Self {
            experience,
            gold: Some(gold),
            items: None,
        }
    }

    /// Experience plus an item payout.
    pub const fn with_items(experience: u32, items: Vec<String>) -> Self {
        Self {
            experience,
            gold: None,
            items: Some(items),
        }
    }
}

/// A gameplay objective bound to exactly one tile.
///
/// Immutable once created and owned by the tile it is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Player-facing objective text.
    pub description: String,
    /// The coordinates the quest reports as its location.
    pub location: Position,
    /// Quest archetype.
    pub kind: QuestKind,
    /// Completion rewards.
    pub rewards: QuestRewards,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let value = serde_json::to_value(QuestKind::Delivery).unwrap();
        assert_eq!(value, serde_json::json!("delivery"));
    }

    #[test]
    fn gold_rewards_have_no_items() {
        let rewards = QuestRewards::with_gold(100, 50);
        assert_eq!(rewards.experience, 100);
        assert_eq!(rewards.gold, Some(50));
        assert_eq!(rewards.items, None);
    }

    #[test]
    fn item_rewards_have_no_gold() {
        let rewards = QuestRewards::with_items(150, vec!["Rare Gem".to_owned()]);
        assert_eq!(rewards.gold, None);
        assert_eq!(rewards.items.unwrap(), vec!["Rare Gem".to_owned()]);
    }

    #[test]
    fn quest_wire_shape_is_camel_case() {
        let quest = Quest {
            description: "Explore the depths of the cave".to_owned(),
            location: Position::new(10, 25),
            kind: QuestKind::Exploration,
            rewards: QuestRewards::with_items(150, vec!["Rare Gem".to_owned()]),
        };
        let value = serde_json::to_value(quest).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "Explore the depths of the cave",
                "location": {"x": 10, "y": 25},
                "kind": "exploration",
                "rewards": {"experience": 150, "gold": null, "items": ["Rare Gem"]},
            })
        );
    }
}
