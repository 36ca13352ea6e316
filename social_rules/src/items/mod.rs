//! Item descriptors and rarity mechanics consumed by gift scoring.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Item category carrying music metadata (`genre`).
pub const MUSIC_TRACK_KIND: &str = "MusicTrackNFT";

/// Item category carrying a `style_tag`.
pub const WEARABLE_ACCESSORY_KIND: &str = "WearableAccessoryNFT";

/// Item category carrying a `style_tag` and/or a `style`.
pub const ART_PIECE_KIND: &str = "ArtPieceNFT";

/// External, read-only description of an item offered as a gift.
///
/// Items are owned by an inventory layer elsewhere; this core only reads
/// them to compute preference scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemDescriptor {
    pub item_id: String,

    /// Free-form category tag, e.g. "MusicTrackNFT" or "collectible_common".
    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl ItemDescriptor {
    /// Create a descriptor with the given id and category.
    pub fn new(item_id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            kind: kind.into(),
            metadata: ItemMetadata::default(),
        }
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: ItemMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Metadata fields the scoring engine interprets, plus an opaque remainder
/// passed through to collaborators untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemMetadata {
    pub genre: Option<String>,
    pub style_tag: Option<String>,
    pub style: Option<String>,
    pub rarity: Option<String>,
    pub description: Option<String>,
    pub title: Option<String>,

    /// Fields this core does not interpret (artist names, token ids, ...).
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Rarity tiers, ranked for gift scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
    UniquePersonalCreation,
}

impl Rarity {
    /// Parse a rarity string, case-insensitively. Unknown tiers fall back
    /// to `Common`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            "legendary" => Rarity::Legendary,
            "unique_personal_creation" => Rarity::UniquePersonalCreation,
            _ => Rarity::Common,
        }
    }

    /// Ordinal weight used additively by the scoring engine.
    pub fn rank(self) -> i32 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
            Rarity::UniquePersonalCreation => 5,
        }
    }
}
