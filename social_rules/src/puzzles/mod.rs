//! Puzzle definitions - content records consumed by the session engine's
//! catalog.

mod content;

pub use content::*;

use serde::{Deserialize, Serialize};

use crate::items::ItemMetadata;

/// Difficulty tiers for puzzle content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// A single puzzle content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub id: String,

    /// Category tag, e.g. "riddle" or "logic".
    #[serde(default)]
    pub kind: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Matched against answers case-insensitively, with surrounding
    /// whitespace trimmed on both sides.
    pub solution: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Submissions allowed before the session fails. Zero disables the cap.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Advisory restriction on which NPC may offer this puzzle.
    #[serde(default)]
    pub npc_exclusive: Option<String>,

    #[serde(default)]
    pub rewards: PuzzleRewards,

    /// Served strictly in order, never repeated.
    #[serde(default)]
    pub hints: Vec<String>,
}

impl PuzzleDefinition {
    /// Create a definition with the given id, title, and solution.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: String::new(),
            title: title.into(),
            description: String::new(),
            solution: solution.into(),
            difficulty: Difficulty::default(),
            max_attempts: default_max_attempts(),
            npc_exclusive: None,
            rewards: PuzzleRewards::default(),
            hints: Vec::new(),
        }
    }

    /// Set the category tag.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the description shown when the puzzle is offered.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the difficulty tier.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the attempt cap. Zero allows unlimited attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Restrict which NPC may offer this puzzle (advisory only).
    pub fn with_npc_exclusive(mut self, npc_id: impl Into<String>) -> Self {
        self.npc_exclusive = Some(npc_id.into());
        self
    }

    /// Set the relationship points granted on a solve.
    pub fn with_relationship_points(mut self, points: i32) -> Self {
        self.rewards.relationship_points = points;
        self
    }

    /// Add a reward item granted on a solve.
    pub fn with_reward_item(mut self, item: RewardItem) -> Self {
        self.rewards.items.push(item);
        self
    }

    /// Append a hint to the ordered hint list.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

/// What a solved puzzle pays out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PuzzleRewards {
    /// Base relationship points, before hint and attempt penalties.
    #[serde(default)]
    pub relationship_points: i32,

    #[serde(default)]
    pub items: Vec<RewardItem>,
}

/// An item granted through the inventory collaborator on a solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardItem {
    pub item_id: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl RewardItem {
    /// Create a single-quantity reward item.
    pub fn new(item_id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: default_quantity(),
            kind: kind.into(),
            metadata: ItemMetadata::default(),
        }
    }

    /// Set the granted quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Attach item metadata forwarded verbatim to the inventory.
    pub fn with_metadata(mut self, metadata: ItemMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_quantity() -> u32 {
    1
}
