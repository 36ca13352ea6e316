//! NPC profile definitions.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{GiftPreferences, PuzzleInteractions, RelationshipFactors};

/// A non-player character: identity, personality, and the relationship
/// factors consumed by the scoring and session engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcProfile {
    /// Stable registry key, unique for the lifetime of the store.
    pub id: String,
    pub name: String,

    /// Lower-cased at construction; membership checks are case-insensitive.
    #[serde(default)]
    pub interests: HashSet<String>,

    /// Opaque numeric trait map, passed through untouched.
    #[serde(default)]
    pub core_personality: HashMap<String, f64>,

    /// Lower-cased at construction.
    #[serde(default)]
    pub descriptive_tags: HashSet<String>,

    #[serde(default = "default_dialogue_style")]
    pub dialogue_style: String,

    #[serde(default)]
    pub relationship_factors: RelationshipFactors,
}

impl NpcProfile {
    /// Create a profile with the given id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            interests: HashSet::new(),
            core_personality: HashMap::new(),
            descriptive_tags: HashSet::new(),
            dialogue_style: default_dialogue_style(),
            relationship_factors: RelationshipFactors::default(),
        }
    }

    /// Set the interest list, lower-casing every entry.
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests = interests
            .into_iter()
            .map(|i| i.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Add a single personality trait value.
    pub fn with_trait(mut self, name: impl Into<String>, value: f64) -> Self {
        self.core_personality.insert(name.into(), value);
        self
    }

    /// Set the descriptive tag list, lower-casing every entry.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.descriptive_tags = tags
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Set the dialogue style.
    pub fn with_dialogue_style(mut self, style: impl Into<String>) -> Self {
        self.dialogue_style = style.into();
        self
    }

    /// Replace the full relationship factor set.
    pub fn with_factors(mut self, factors: RelationshipFactors) -> Self {
        self.relationship_factors = factors;
        self
    }

    /// Replace just the gift preferences.
    pub fn with_gift_preferences(mut self, prefs: GiftPreferences) -> Self {
        self.relationship_factors.gift_preferences = prefs;
        self
    }

    /// Replace just the puzzle interaction factors.
    pub fn with_puzzle_interactions(mut self, interactions: PuzzleInteractions) -> Self {
        self.relationship_factors.puzzle_interactions = interactions;
        self
    }

    /// Case-insensitive interest membership.
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.contains(&interest.to_lowercase())
    }

    /// Case-insensitive descriptive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.descriptive_tags.contains(&tag.to_lowercase())
    }

    /// Serializable snapshot for presentation layers.
    pub fn view(&self) -> ProfileView {
        let mut interests: Vec<String> = self.interests.iter().cloned().collect();
        interests.sort();
        let mut descriptive_tags: Vec<String> = self.descriptive_tags.iter().cloned().collect();
        descriptive_tags.sort();

        ProfileView {
            id: self.id.clone(),
            name: self.name.clone(),
            interests,
            core_personality: self.core_personality.clone(),
            descriptive_tags,
            dialogue_style: self.dialogue_style.clone(),
            relationship_factors: self.relationship_factors.clone(),
        }
    }
}

/// A stable snapshot of a profile, with set fields sorted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub interests: Vec<String>,
    pub core_personality: HashMap<String, f64>,
    pub descriptive_tags: Vec<String>,
    pub dialogue_style: String,
    pub relationship_factors: RelationshipFactors,
}

fn default_dialogue_style() -> String {
    "friendly".to_string()
}
