//! Collaborator ports - the in-process boundaries the session engine emits
//! effects into.
//!
//! Each port is a synchronous trait owned by the hosting application:
//! relationship ledger, inventory, notifications, and the durable player
//! record. The engine never assumes anything about what sits behind them.

mod memory;

pub use memory::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use social_rules::ItemMetadata;

/// Reason tags attached to relationship score updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipReason {
    PuzzleSolvedWithNpc,
    PuzzleFailedWithNpc,
}

impl RelationshipReason {
    /// Wire-format tag for this reason.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipReason::PuzzleSolvedWithNpc => "puzzle_solved_with_npc",
            RelationshipReason::PuzzleFailedWithNpc => "puzzle_failed_with_npc",
        }
    }
}

impl fmt::Display for RelationshipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categories attached to player notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    PuzzleStart,
    PuzzleSuccess,
    PuzzleFail,
}

impl NotificationCategory {
    /// Wire-format tag for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationCategory::PuzzleStart => "puzzle_start",
            NotificationCategory::PuzzleSuccess => "puzzle_success",
            NotificationCategory::PuzzleFail => "puzzle_fail",
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A score adjustment forwarded to the relationship ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub value: i32,
}

/// Receives relationship score adjustments.
pub trait RelationshipLedger {
    fn update_score(
        &mut self,
        player_id: &str,
        npc_id: &str,
        reason: RelationshipReason,
        delta: ScoreDelta,
    );
}

/// Receives reward item grants.
pub trait InventorySink {
    fn grant_item(
        &mut self,
        player_id: &str,
        item_id: &str,
        quantity: u32,
        kind: &str,
        metadata: &ItemMetadata,
    );
}

/// Receives player-facing notifications and decorative effect signals.
pub trait NotificationSink {
    fn notify(&mut self, player_id: &str, message: &str, category: NotificationCategory);

    /// Cosmetic solved effect; implies no state change.
    fn puzzle_solved_effect(&mut self, _puzzle_id: &str) {}
}

/// Durable per-player puzzle history, owned by an external player record.
pub trait PlayerRecordSink {
    /// Marking the same puzzle twice must be harmless.
    fn mark_puzzle_solved(&mut self, player_id: &str, puzzle_id: &str);
}
