//! Puzzle pack parsing and the stock puzzle set.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use super::{Difficulty, PuzzleDefinition, RewardItem};
use crate::items::{ItemMetadata, MUSIC_TRACK_KIND};

/// Hard failures raised while parsing a puzzle pack document.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid puzzle pack: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct PuzzlePack {
    #[serde(default)]
    puzzle: Vec<PuzzleDefinition>,
}

/// Parse a TOML puzzle pack (`[[puzzle]]` tables) into an ordered list of
/// definitions suitable for wholesale catalog loading.
pub fn parse_puzzle_pack(source: &str) -> Result<Vec<PuzzleDefinition>, PackError> {
    let pack: PuzzlePack = toml::from_str(source)?;
    Ok(pack.puzzle)
}

/// The stock puzzle set shipped with the engine.
pub fn builtin_puzzles() -> Vec<PuzzleDefinition> {
    vec![
        PuzzleDefinition::new("riddle_of_time", "Riddle of Time", "a map")
            .with_kind("riddle")
            .with_description(
                "I have cities, but no houses. I have mountains, but no trees. \
                 I have water, but no fish. What am I?",
            )
            .with_difficulty(Difficulty::Easy)
            .with_relationship_points(5)
            .with_reward_item(RewardItem::new("insight_token_common", "collectible_common"))
            .with_hint("Think about representations.")
            .with_hint("What shows you places but isn't the place itself?"),
        PuzzleDefinition::new("logic_bridge_crossing", "Bridge Crossing Puzzle", "15")
            .with_kind("logic")
            .with_description(
                "Four people need to cross a bridge at night with one flashlight. \
                 Person A takes 1 min, B takes 2 mins, C takes 5 mins, D takes 8 mins. \
                 Max two people can cross at once, sharing the flashlight. Flashlight \
                 must be carried back and forth. What is the minimum time for all to cross?",
            )
            .with_difficulty(Difficulty::Medium)
            .with_relationship_points(10)
            .with_reward_item(
                RewardItem::new("logic_crystal_rare_nft", "collectible_rare_nft").with_metadata(
                    ItemMetadata {
                        description: Some("A crystal awarded for keen logic.".to_string()),
                        extra: HashMap::from([("token_id".to_string(), Value::from("LC001"))]),
                        ..Default::default()
                    },
                ),
            )
            .with_hint("The fastest people should do some of the returning.")
            .with_hint("Think about who should cross together in the slowest trips."),
        PuzzleDefinition::new("kai_song_lyric", "Kai's Missing Lyric", "stream")
            .with_kind("lyric_completion")
            .with_description(
                "Kai is stuck on a lyric for his new song: 'City lights gleam, a neon \
                 _____, chasing dreams where shadows play.' What word fits?",
            )
            .with_difficulty(Difficulty::Easy)
            .with_npc_exclusive("npc_kai")
            .with_relationship_points(7)
            .with_reward_item(
                RewardItem::new("kai_song_demo_nft", MUSIC_TRACK_KIND).with_metadata(
                    ItemMetadata {
                        title: Some("Neon Stream - Demo".to_string()),
                        genre: Some("electronic".to_string()),
                        extra: HashMap::from([
                            ("artist_name".to_string(), Value::from("Kai")),
                            ("token_id".to_string(), Value::from("MUSIC_KAI01")),
                        ]),
                        ..Default::default()
                    },
                ),
            )
            .with_hint("It should rhyme with 'gleam'.")
            .with_hint("Think of something flowing and bright."),
    ]
}
