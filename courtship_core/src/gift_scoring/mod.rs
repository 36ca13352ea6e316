//! Gift preference scoring - a pure, bounded utility over profile rules.
//!
//! The algorithm is ordered and short-circuiting:
//! 1. **Override**: an explicit per-item score wins outright
//! 2. **Veto**: a disliked item kind is a flat penalty
//! 3. **Accumulate**: a base score collects bonuses for liked kinds,
//!    matched genres and styles, and rarity
//! 4. **Amplify**: interest mentions in the item's description and title
//!    each multiply the running total
//! 5. **Clamp**: the result lands in `[SCORE_FLOOR, SCORE_CEILING]`

use social_rules::{
    ItemDescriptor, NpcProfile, Rarity, ART_PIECE_KIND, MUSIC_TRACK_KIND, WEARABLE_ACCESSORY_KIND,
};

/// Lower bound of a clamped gift score.
pub const SCORE_FLOOR: i32 = -10;

/// Upper bound of a clamped gift score.
pub const SCORE_CEILING: i32 = 30;

/// Flat score for an item whose kind the NPC dislikes.
const DISLIKED_TYPE_SCORE: i32 = -5;

/// Starting score for any item that is neither overridden nor vetoed.
const BASE_SCORE: i32 = 2;

const LIKED_TYPE_BONUS: i32 = 5;
const LIKED_GENRE_BONUS: i32 = 8;
const LIKED_STYLE_BONUS: i32 = 7;
const CHERISHED_RARITY_BONUS: i32 = 5;
const RARITY_RANK_WEIGHT: i32 = 2;

/// Score how favorably an NPC regards an item.
///
/// Deterministic and side-effect free for a given profile and item. An item
/// with an empty id scores 0. Explicit `specific_items` entries are returned
/// as-is; every other path is clamped to `[SCORE_FLOOR, SCORE_CEILING]`.
pub fn score_gift(profile: &NpcProfile, item: &ItemDescriptor) -> i32 {
    if item.item_id.is_empty() {
        return 0;
    }

    let prefs = &profile.relationship_factors.gift_preferences;

    if let Some(score) = prefs.specific_items.get(&item.item_id) {
        return *score;
    }

    let kind = if item.kind.is_empty() {
        "unknown"
    } else {
        item.kind.as_str()
    };

    if prefs.disliked_types.contains(kind) {
        return DISLIKED_TYPE_SCORE;
    }

    let mut score = BASE_SCORE;

    if prefs.liked_types.contains(kind) {
        score += LIKED_TYPE_BONUS;
    }

    if kind == MUSIC_TRACK_KIND {
        if let Some(genre) = item.metadata.genre.as_deref() {
            if prefs.liked_genres.contains(&genre.to_lowercase()) {
                score += LIKED_GENRE_BONUS;
            }
        }
    }

    // `style_tag` applies to wearables and art pieces; the separate `style`
    // field on art pieces can stack a second bonus.
    if kind == WEARABLE_ACCESSORY_KIND || kind == ART_PIECE_KIND {
        if let Some(tag) = item.metadata.style_tag.as_deref() {
            if prefs.liked_styles.contains(&tag.to_lowercase()) {
                score += LIKED_STYLE_BONUS;
            }
        }
    }
    if kind == ART_PIECE_KIND {
        if let Some(style) = item.metadata.style.as_deref() {
            if prefs.liked_styles.contains(&style.to_lowercase()) {
                score += LIKED_STYLE_BONUS;
            }
        }
    }

    let rarity = item
        .metadata
        .rarity
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_else(|| "common".to_string());
    score += Rarity::parse(&rarity).rank() * RARITY_RANK_WEIGHT;
    if rarity == prefs.cherished_rarity.to_lowercase() {
        score += CHERISHED_RARITY_BONUS;
    }

    // Interest mentions in the description and title each apply the
    // multiplier; both can fire and compound.
    if let Some(description) = item.metadata.description.as_deref() {
        let description = description.to_lowercase();
        if profile.interests.iter().any(|i| description.contains(i.as_str())) {
            score = (score as f32 * prefs.value_multiplier).floor() as i32;
        }
    }
    if let Some(title) = item.metadata.title.as_deref() {
        let title = title.to_lowercase();
        if profile.interests.iter().any(|i| title.contains(i.as_str())) {
            score = (score as f32 * prefs.value_multiplier).floor() as i32;
        }
    }

    score.clamp(SCORE_FLOOR, SCORE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use social_rules::{GiftPreferences, ItemMetadata};
    use std::collections::HashMap;

    fn kai() -> NpcProfile {
        NpcProfile::new("npc_kai", "Kai")
            .with_interests(["music", "synthwave"])
            .with_gift_preferences(GiftPreferences {
                liked_types: ["collectible_rare_nft".to_string()].into_iter().collect(),
                disliked_types: ["junk".to_string()].into_iter().collect(),
                liked_genres: ["electronic".to_string()].into_iter().collect(),
                liked_styles: ["neon".to_string()].into_iter().collect(),
                ..Default::default()
            })
    }

    fn music_item(genre: &str, rarity: &str) -> ItemDescriptor {
        ItemDescriptor::new("track_01", MUSIC_TRACK_KIND).with_metadata(ItemMetadata {
            genre: Some(genre.to_string()),
            rarity: Some(rarity.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_item_id_scores_zero() {
        let item = ItemDescriptor::default();
        assert_eq!(score_gift(&kai(), &item), 0);
    }

    #[test]
    fn test_specific_item_overrides_everything() {
        let mut profile = kai();
        profile
            .relationship_factors
            .gift_preferences
            .specific_items = HashMap::from([("junk_heirloom".to_string(), 25)]);
        profile
            .relationship_factors
            .gift_preferences
            .disliked_types
            .insert("junk".to_string());

        // Disliked kind, hostile metadata - the explicit entry still wins.
        let item = ItemDescriptor::new("junk_heirloom", "junk").with_metadata(ItemMetadata {
            rarity: Some("common".to_string()),
            description: Some("nothing kai cares about".to_string()),
            ..Default::default()
        });
        assert_eq!(score_gift(&profile, &item), 25);
    }

    #[test]
    fn test_specific_item_returns_exact_value_even_out_of_band() {
        let mut profile = kai();
        profile
            .relationship_factors
            .gift_preferences
            .specific_items = HashMap::from([("cursed_doll".to_string(), -40)]);

        let item = ItemDescriptor::new("cursed_doll", "collectible_common");
        assert_eq!(score_gift(&profile, &item), -40);
    }

    #[test]
    fn test_disliked_type_is_flat_penalty() {
        // Even a legendary rarity cannot rescue a disliked kind.
        let item = ItemDescriptor::new("shiny_junk", "junk").with_metadata(ItemMetadata {
            rarity: Some("legendary".to_string()),
            ..Default::default()
        });
        assert_eq!(score_gift(&kai(), &item), -5);
    }

    #[test]
    fn test_liked_genre_scenario() {
        // base 2 + genre 8 + rare rank 2*2 = 14; no multiplier triggers.
        assert_eq!(score_gift(&kai(), &music_item("electronic", "rare")), 14);
    }

    #[test]
    fn test_unmatched_genre_only_gets_rarity() {
        // base 2 + rare rank 2*2 = 6.
        assert_eq!(score_gift(&kai(), &music_item("country", "rare")), 6);
    }

    #[test]
    fn test_liked_type_bonus() {
        // base 2 + liked type 5 + common rank 1*2 = 9.
        let item = ItemDescriptor::new("crystal", "collectible_rare_nft");
        assert_eq!(score_gift(&kai(), &item), 9);
    }

    #[test]
    fn test_cherished_rarity_bonus() {
        // base 2 + legendary rank 4*2 + cherished 5 = 15.
        let item = ItemDescriptor::new("relic", "collectible_common").with_metadata(ItemMetadata {
            rarity: Some("Legendary".to_string()),
            ..Default::default()
        });
        assert_eq!(score_gift(&kai(), &item), 15);
    }

    #[test]
    fn test_unknown_rarity_ranks_as_common_but_matches_cherished_string() {
        let mut profile = kai();
        profile
            .relationship_factors
            .gift_preferences
            .cherished_rarity = "mythic".to_string();

        // base 2 + fallback rank 1*2 + cherished string match 5 = 9.
        let item = ItemDescriptor::new("odd_relic", "collectible_common").with_metadata(
            ItemMetadata {
                rarity: Some("Mythic".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(score_gift(&profile, &item), 9);
    }

    #[test]
    fn test_absent_rarity_defaults_to_common_rank() {
        // base 2 + common rank 1*2 = 4.
        let item = ItemDescriptor::new("pebble", "collectible_common");
        assert_eq!(score_gift(&kai(), &item), 4);
    }

    #[test]
    fn test_art_piece_style_fields_stack() {
        // base 2 + style_tag 7 + style 7 + common rank 2 = 18.
        let item = ItemDescriptor::new("canvas", ART_PIECE_KIND).with_metadata(ItemMetadata {
            style_tag: Some("Neon".to_string()),
            style: Some("NEON".to_string()),
            ..Default::default()
        });
        assert_eq!(score_gift(&kai(), &item), 18);
    }

    #[test]
    fn test_wearable_ignores_plain_style_field() {
        // base 2 + style_tag 7 + common rank 2 = 11; `style` alone does not
        // count for wearables.
        let tagged = ItemDescriptor::new("visor", WEARABLE_ACCESSORY_KIND).with_metadata(
            ItemMetadata {
                style_tag: Some("neon".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(score_gift(&kai(), &tagged), 11);

        let styled = ItemDescriptor::new("visor", WEARABLE_ACCESSORY_KIND).with_metadata(
            ItemMetadata {
                style: Some("neon".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(score_gift(&kai(), &styled), 4);
    }

    #[test]
    fn test_interest_multipliers_compound_and_floor() {
        // base 2 + genre 8 + common rank 2 = 12; description mention floors
        // 12 * 1.5 = 18, title mention floors 18 * 1.5 = 27.
        let item = ItemDescriptor::new("track_02", MUSIC_TRACK_KIND).with_metadata(ItemMetadata {
            genre: Some("electronic".to_string()),
            description: Some("A late-night music session".to_string()),
            title: Some("Synthwave Sunrise".to_string()),
            ..Default::default()
        });
        assert_eq!(score_gift(&kai(), &item), 27);
    }

    #[test]
    fn test_score_is_clamped_to_ceiling() {
        // base 2 + genre 8 + unique rank 10 + description and title
        // multipliers push past the ceiling.
        let item = ItemDescriptor::new("magnum_opus", MUSIC_TRACK_KIND).with_metadata(
            ItemMetadata {
                genre: Some("electronic".to_string()),
                rarity: Some("unique_personal_creation".to_string()),
                description: Some("music for the ages".to_string()),
                title: Some("synthwave requiem".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(score_gift(&kai(), &item), SCORE_CEILING);
    }

    #[test]
    fn test_score_stays_in_bounds_without_overrides() {
        let kinds = [
            "junk",
            "collectible_common",
            "collectible_rare_nft",
            MUSIC_TRACK_KIND,
            WEARABLE_ACCESSORY_KIND,
            ART_PIECE_KIND,
            "",
        ];
        let rarities = [None, Some("common"), Some("rare"), Some("legendary"), Some("mythic")];
        let texts = [None, Some("music box"), Some("a plain trinket")];

        let profile = kai();
        for kind in kinds {
            for rarity in rarities {
                for description in texts {
                    for title in texts {
                        let item = ItemDescriptor::new("fuzz_item", kind).with_metadata(
                            ItemMetadata {
                                genre: Some("electronic".to_string()),
                                style_tag: Some("neon".to_string()),
                                style: Some("neon".to_string()),
                                rarity: rarity.map(str::to_string),
                                description: description.map(str::to_string),
                                title: title.map(str::to_string),
                                ..Default::default()
                            },
                        );
                        let score = score_gift(&profile, &item);
                        assert!(
                            (SCORE_FLOOR..=SCORE_CEILING).contains(&score),
                            "score {score} out of bounds for kind {kind:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let item = music_item("electronic", "epic");
        let profile = kai();
        assert_eq!(score_gift(&profile, &item), score_gift(&profile, &item));
    }
}
