//! Relationship factor components attached to NPC profiles.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Factors shaping how an NPC's relationship with a player evolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipFactors {
    /// Weight applied per interest the player shares with the NPC.
    #[serde(default = "default_interest_weight")]
    pub likes_interests_in_common: i32,

    #[serde(default = "default_true")]
    pub prefers_compliments: bool,

    #[serde(default = "default_true")]
    pub dislikes_rudeness: bool,

    #[serde(default)]
    pub gift_preferences: GiftPreferences,

    #[serde(default)]
    pub puzzle_interactions: PuzzleInteractions,
}

impl Default for RelationshipFactors {
    fn default() -> Self {
        Self {
            likes_interests_in_common: default_interest_weight(),
            prefers_compliments: true,
            dislikes_rudeness: true,
            gift_preferences: GiftPreferences::default(),
            puzzle_interactions: PuzzleInteractions::default(),
        }
    }
}

/// How an NPC values gifted items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftPreferences {
    /// Explicit per-item scores; an entry here overrides every other rule.
    #[serde(default)]
    pub specific_items: HashMap<String, i32>,

    /// Item kinds that earn a flat bonus.
    #[serde(default)]
    pub liked_types: HashSet<String>,

    /// Item kinds scored with a flat penalty, overriding all bonuses.
    #[serde(default)]
    pub disliked_types: HashSet<String>,

    /// Lower-case genre names matched against music track metadata.
    #[serde(default)]
    pub liked_genres: HashSet<String>,

    /// Lower-case style names matched against wearable and art metadata.
    #[serde(default)]
    pub liked_styles: HashSet<String>,

    /// Rarity tier that earns a flat bonus on exact match.
    #[serde(default = "default_cherished_rarity")]
    pub cherished_rarity: String,

    /// Multiplier applied when item text mentions one of the NPC's interests.
    #[serde(default = "default_value_multiplier")]
    pub value_multiplier: f32,
}

impl Default for GiftPreferences {
    fn default() -> Self {
        Self {
            specific_items: HashMap::new(),
            liked_types: HashSet::new(),
            disliked_types: HashSet::new(),
            liked_genres: HashSet::new(),
            liked_styles: HashSet::new(),
            cherished_rarity: default_cherished_rarity(),
            value_multiplier: default_value_multiplier(),
        }
    }
}

/// How an NPC engages with puzzles.
///
/// Carried on the profile for dialogue and presentation layers; the gift
/// scoring engine does not consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleInteractions {
    /// Puzzles this NPC can legitimately offer.
    #[serde(default)]
    pub offered_puzzle_ids: HashSet<String>,

    #[serde(default)]
    pub likes_solving_puzzles: bool,

    #[serde(default)]
    pub good_at_puzzle_types: HashSet<String>,

    #[serde(default = "default_reward_multiplier")]
    pub reward_multiplier: f32,
}

impl Default for PuzzleInteractions {
    fn default() -> Self {
        Self {
            offered_puzzle_ids: HashSet::new(),
            likes_solving_puzzles: false,
            good_at_puzzle_types: HashSet::new(),
            reward_multiplier: default_reward_multiplier(),
        }
    }
}

fn default_interest_weight() -> i32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_cherished_rarity() -> String {
    "legendary".to_string()
}

fn default_value_multiplier() -> f32 {
    1.5
}

fn default_reward_multiplier() -> f32 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let factors = RelationshipFactors::default();
        assert_eq!(factors.likes_interests_in_common, 2);
        assert!(factors.prefers_compliments);
        assert!(factors.dislikes_rudeness);
    }

    #[test]
    fn test_default_gift_preferences() {
        let prefs = GiftPreferences::default();
        assert_eq!(prefs.cherished_rarity, "legendary");
        assert_eq!(prefs.value_multiplier, 1.5);
        assert!(prefs.specific_items.is_empty());
        assert!(prefs.liked_types.is_empty());
    }

    #[test]
    fn test_default_puzzle_interactions() {
        let interactions = PuzzleInteractions::default();
        assert!(!interactions.likes_solving_puzzles);
        assert_eq!(interactions.reward_multiplier, 1.0);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let factors: RelationshipFactors = serde_json::from_str(
            r#"{"gift_preferences": {"liked_genres": ["jazz"]}}"#,
        )
        .unwrap();

        assert_eq!(factors.likes_interests_in_common, 2);
        assert!(factors.prefers_compliments);
        assert!(factors.gift_preferences.liked_genres.contains("jazz"));
        assert_eq!(factors.gift_preferences.cherished_rarity, "legendary");
        assert_eq!(factors.gift_preferences.value_multiplier, 1.5);
    }
}
