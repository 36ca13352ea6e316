//! In-memory recording collaborators for tests and local composition roots.
//!
//! Each type is a cheaply clonable handle over shared state, so a test can
//! keep one clone for assertions while the engine owns another.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use social_rules::ItemMetadata;

use super::{
    InventorySink, NotificationCategory, NotificationSink, PlayerRecordSink, RelationshipLedger,
    RelationshipReason, ScoreDelta,
};

/// A recorded relationship score update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub player_id: String,
    pub npc_id: String,
    pub reason: RelationshipReason,
    pub delta: ScoreDelta,
}

/// Recording ledger; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    updates: Rc<RefCell<Vec<ScoreUpdate>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded updates, oldest first.
    pub fn updates(&self) -> Vec<ScoreUpdate> {
        self.updates.borrow().clone()
    }

    /// The most recent update, if any.
    pub fn last(&self) -> Option<ScoreUpdate> {
        self.updates.borrow().last().cloned()
    }
}

impl RelationshipLedger for MemoryLedger {
    fn update_score(
        &mut self,
        player_id: &str,
        npc_id: &str,
        reason: RelationshipReason,
        delta: ScoreDelta,
    ) {
        self.updates.borrow_mut().push(ScoreUpdate {
            player_id: player_id.to_string(),
            npc_id: npc_id.to_string(),
            reason,
            delta,
        });
    }
}

/// A recorded inventory grant.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGrant {
    pub player_id: String,
    pub item_id: String,
    pub quantity: u32,
    pub kind: String,
    pub metadata: ItemMetadata,
}

/// Recording inventory; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    grants: Rc<RefCell<Vec<ItemGrant>>>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded grants, oldest first.
    pub fn grants(&self) -> Vec<ItemGrant> {
        self.grants.borrow().clone()
    }
}

impl InventorySink for MemoryInventory {
    fn grant_item(
        &mut self,
        player_id: &str,
        item_id: &str,
        quantity: u32,
        kind: &str,
        metadata: &ItemMetadata,
    ) {
        self.grants.borrow_mut().push(ItemGrant {
            player_id: player_id.to_string(),
            item_id: item_id.to_string(),
            quantity,
            kind: kind.to_string(),
            metadata: metadata.clone(),
        });
    }
}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub player_id: String,
    pub message: String,
    pub category: NotificationCategory,
}

/// Recording notifier; clones share the same logs.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    sent: Rc<RefCell<Vec<SentNotification>>>,
    effects: Rc<RefCell<Vec<String>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded notifications, oldest first.
    pub fn notifications(&self) -> Vec<SentNotification> {
        self.sent.borrow().clone()
    }

    /// Puzzle ids that triggered the decorative solved effect.
    pub fn effects(&self) -> Vec<String> {
        self.effects.borrow().clone()
    }
}

impl NotificationSink for MemoryNotifier {
    fn notify(&mut self, player_id: &str, message: &str, category: NotificationCategory) {
        self.sent.borrow_mut().push(SentNotification {
            player_id: player_id.to_string(),
            message: message.to_string(),
            category,
        });
    }

    fn puzzle_solved_effect(&mut self, puzzle_id: &str) {
        self.effects.borrow_mut().push(puzzle_id.to_string());
    }
}

/// Shared per-player puzzle history; marking is idempotent.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlayerRecord {
    solved: Rc<RefCell<HashSet<(String, String)>>>,
}

impl MemoryPlayerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the player has ever solved the puzzle.
    pub fn has_solved(&self, player_id: &str, puzzle_id: &str) -> bool {
        self.solved
            .borrow()
            .contains(&(player_id.to_string(), puzzle_id.to_string()))
    }

    /// Number of distinct (player, puzzle) solves recorded.
    pub fn solved_count(&self) -> usize {
        self.solved.borrow().len()
    }
}

impl PlayerRecordSink for MemoryPlayerRecord {
    fn mark_puzzle_solved(&mut self, player_id: &str, puzzle_id: &str) {
        self.solved
            .borrow_mut()
            .insert((player_id.to_string(), puzzle_id.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_clones_share_log() {
        let ledger = MemoryLedger::new();
        let mut handle = ledger.clone();

        handle.update_score(
            "p1",
            "npc_kai",
            RelationshipReason::PuzzleSolvedWithNpc,
            ScoreDelta { value: 4 },
        );

        assert_eq!(ledger.updates().len(), 1);
        assert_eq!(ledger.last().unwrap().delta.value, 4);
    }

    #[test]
    fn test_player_record_is_idempotent() {
        let record = MemoryPlayerRecord::new();
        let mut handle = record.clone();

        handle.mark_puzzle_solved("p1", "riddle_of_time");
        handle.mark_puzzle_solved("p1", "riddle_of_time");

        assert!(record.has_solved("p1", "riddle_of_time"));
        assert!(!record.has_solved("p2", "riddle_of_time"));
        assert_eq!(record.solved_count(), 1);
    }

    #[test]
    fn test_notifier_records_effects() {
        let notifier = MemoryNotifier::new();
        let mut handle = notifier.clone();

        handle.notify("p1", "New Puzzle!", NotificationCategory::PuzzleStart);
        handle.puzzle_solved_effect("riddle_of_time");

        assert_eq!(notifier.notifications().len(), 1);
        assert_eq!(notifier.effects(), vec!["riddle_of_time"]);
    }
}
