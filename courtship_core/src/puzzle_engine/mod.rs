//! Puzzle session engine - the per-player state machine from offered puzzle
//! through hints and attempts to terminal resolution.
//!
//! Sessions move `no session -> active -> solved | failed`; terminal states
//! immediately collapse back to `no session`, with solved history forwarded
//! to the player record collaborator. Every operation is non-fatal: missing
//! puzzles and sessions come back as descriptive outcome variants.

mod catalog;
mod session;

pub use catalog::*;
pub use session::*;

use std::collections::HashMap;

use social_rules::{PuzzleDefinition, PuzzleRewards};

use crate::collaborators::{
    InventorySink, NotificationCategory, NotificationSink, PlayerRecordSink, RelationshipLedger,
    RelationshipReason, ScoreDelta,
};

/// Fixed relationship penalty when a puzzle fails with an NPC attached.
const FAILURE_PENALTY: i32 = -2;

/// Points deducted per hint consumed before the solve.
const HINT_PENALTY: i32 = 2;

/// Outcome of starting a puzzle session.
#[derive(Debug, Clone)]
pub enum StartOutcome {
    /// Session created; the definition is echoed back for presentation.
    Started(PuzzleDefinition),

    /// Session created despite an advisory NPC-exclusivity mismatch. The
    /// dialogue layer is expected to prevent mismatched offers upstream.
    StartedWithWarning(PuzzleDefinition),

    /// Unknown puzzle id; nothing changed.
    NotFound,
}

impl StartOutcome {
    /// The definition behind the created session, if one was created.
    pub fn puzzle(&self) -> Option<&PuzzleDefinition> {
        match self {
            StartOutcome::Started(puzzle) | StartOutcome::StartedWithWarning(puzzle) => {
                Some(puzzle)
            }
            StartOutcome::NotFound => None,
        }
    }
}

/// Outcome of a hint request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// The next unseen hint, in authored order.
    Hint(String),
    NoActiveSession,
    /// The puzzle has no hints at all.
    NoHints,
    /// Every hint has already been served; hints never wrap.
    Exhausted,
}

impl HintOutcome {
    /// Player-facing text for this outcome.
    pub fn message(&self) -> &str {
        match self {
            HintOutcome::Hint(hint) => hint,
            HintOutcome::NoActiveSession => "You don't have an active puzzle.",
            HintOutcome::NoHints => "No hints available for this puzzle.",
            HintOutcome::Exhausted => "No more hints available.",
        }
    }
}

/// Outcome of an answer submission.
#[derive(Debug, Clone)]
pub enum AnswerOutcome {
    /// Correct; the session is cleared and reward effects have been emitted.
    Solved {
        title: String,
        rewards: PuzzleRewards,
    },

    /// Wrong, with attempts remaining; the session stays active.
    TryAgain { title: String },

    /// Wrong on the final allowed attempt; the session is cleared and the
    /// solution revealed.
    Failed { title: String, solution: String },

    /// No session to submit against.
    NoActiveSession,

    /// The active session's definition vanished from the catalog.
    DefinitionMissing,
}

impl AnswerOutcome {
    /// Whether the submission solved the puzzle.
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Solved { .. })
    }

    /// Player-facing text for this outcome.
    pub fn message(&self) -> String {
        match self {
            AnswerOutcome::Solved { .. } => "Correct!".to_string(),
            AnswerOutcome::TryAgain { .. } => "Not quite. Try again!".to_string(),
            AnswerOutcome::Failed { solution, .. } => format!(
                "Incorrect. You've reached the maximum attempts for this puzzle. \
                 The answer was: {solution}"
            ),
            AnswerOutcome::NoActiveSession => "You don't have an active puzzle.".to_string(),
            AnswerOutcome::DefinitionMissing => "Error finding puzzle details.".to_string(),
        }
    }
}

/// The puzzle session engine.
///
/// Owns the catalog and the per-player active-session map (at most one
/// session per player; starting a new puzzle silently replaces the old one),
/// and forwards terminal effects into the injected collaborators.
pub struct PuzzleEngine {
    catalog: PuzzleCatalog,
    sessions: HashMap<String, SessionState>,
    ledger: Box<dyn RelationshipLedger>,
    inventory: Box<dyn InventorySink>,
    notifier: Box<dyn NotificationSink>,
    records: Box<dyn PlayerRecordSink>,
}

impl PuzzleEngine {
    /// Create an engine over a catalog and collaborator set.
    pub fn new(
        catalog: PuzzleCatalog,
        ledger: Box<dyn RelationshipLedger>,
        inventory: Box<dyn InventorySink>,
        notifier: Box<dyn NotificationSink>,
        records: Box<dyn PlayerRecordSink>,
    ) -> Self {
        Self {
            catalog,
            sessions: HashMap::new(),
            ledger,
            inventory,
            notifier,
            records,
        }
    }

    /// Replace the entire catalog. Active sessions keep their puzzle ids and
    /// resolve against the new contents.
    pub fn load_catalog(&mut self, definitions: Vec<PuzzleDefinition>) {
        self.catalog.load_all(definitions);
    }

    /// Look up a puzzle definition.
    pub fn puzzle(&self, puzzle_id: &str) -> Option<&PuzzleDefinition> {
        self.catalog.get(puzzle_id)
    }

    /// The definition behind a player's active session, if any.
    pub fn active_puzzle(&self, player_id: &str) -> Option<&PuzzleDefinition> {
        self.sessions
            .get(player_id)
            .and_then(|state| self.catalog.get(&state.puzzle_id))
    }

    /// The player's live session state, if any.
    pub fn session_state(&self, player_id: &str) -> Option<&SessionState> {
        self.sessions.get(player_id)
    }

    /// Start (or restart) a session for a player.
    ///
    /// An NPC-exclusivity mismatch is advisory: it is logged and reported in
    /// the outcome but never blocks session creation. Any prior session for
    /// the player is silently replaced.
    pub fn start_puzzle(
        &mut self,
        player_id: &str,
        puzzle_id: &str,
        npc_id: Option<&str>,
    ) -> StartOutcome {
        let Some(puzzle) = self.catalog.get(puzzle_id) else {
            tracing::warn!(puzzle_id, "puzzle not found");
            return StartOutcome::NotFound;
        };
        let puzzle = puzzle.clone();

        let mismatch = puzzle
            .npc_exclusive
            .as_deref()
            .is_some_and(|owner| Some(owner) != npc_id);
        if mismatch {
            tracing::warn!(
                puzzle_id,
                owner = puzzle.npc_exclusive.as_deref(),
                npc_id,
                "puzzle offered by the wrong NPC; session created anyway"
            );
        }

        self.sessions
            .insert(player_id.to_string(), SessionState::new(puzzle_id, npc_id));
        self.notifier.notify(
            player_id,
            &format!("New Puzzle: {}! {}", puzzle.title, puzzle.description),
            NotificationCategory::PuzzleStart,
        );

        if mismatch {
            StartOutcome::StartedWithWarning(puzzle)
        } else {
            StartOutcome::Started(puzzle)
        }
    }

    /// Serve the next unseen hint for the player's active puzzle.
    ///
    /// Hints come back in authored order, exactly once each.
    pub fn hint(&mut self, player_id: &str) -> HintOutcome {
        let Some(state) = self.sessions.get_mut(player_id) else {
            return HintOutcome::NoActiveSession;
        };
        let Some(puzzle) = self.catalog.get(&state.puzzle_id) else {
            return HintOutcome::NoHints;
        };

        if puzzle.hints.is_empty() {
            return HintOutcome::NoHints;
        }
        if state.hints_used >= puzzle.hints.len() {
            return HintOutcome::Exhausted;
        }

        let hint = puzzle.hints[state.hints_used].clone();
        state.hints_used += 1;
        HintOutcome::Hint(hint)
    }

    /// Submit an answer against the player's active session.
    ///
    /// Attempts count up on every submission, correct or not. Correctness is
    /// trimmed, case-insensitive string equality against the solution. A
    /// terminal outcome clears the session before its effects are emitted.
    pub fn submit_answer(&mut self, player_id: &str, answer: &str) -> AnswerOutcome {
        let Some(state) = self.sessions.get_mut(player_id) else {
            return AnswerOutcome::NoActiveSession;
        };
        let Some(puzzle) = self.catalog.get(&state.puzzle_id).cloned() else {
            return AnswerOutcome::DefinitionMissing;
        };

        state.attempts += 1;
        let attempts = state.attempts;

        let correct = answer.trim().to_lowercase() == puzzle.solution.trim().to_lowercase();
        if correct {
            if let Some(snapshot) = self.sessions.remove(player_id) {
                self.resolve(player_id, &snapshot, &puzzle, true);
            }
            AnswerOutcome::Solved {
                title: puzzle.title,
                rewards: puzzle.rewards,
            }
        } else if puzzle.max_attempts > 0 && attempts >= puzzle.max_attempts {
            if let Some(snapshot) = self.sessions.remove(player_id) {
                self.resolve(player_id, &snapshot, &puzzle, false);
            }
            AnswerOutcome::Failed {
                title: puzzle.title,
                solution: puzzle.solution,
            }
        } else {
            AnswerOutcome::TryAgain {
                title: puzzle.title,
            }
        }
    }

    /// Terminal step: emit the solved/failed notification, relationship
    /// delta, item grants, and the solved-history mark.
    fn resolve(
        &mut self,
        player_id: &str,
        session: &SessionState,
        puzzle: &PuzzleDefinition,
        success: bool,
    ) {
        self.notifier.notify(
            player_id,
            &format!(
                "Puzzle '{}' {}",
                puzzle.title,
                if success { "Solved!" } else { "Failed." }
            ),
            if success {
                NotificationCategory::PuzzleSuccess
            } else {
                NotificationCategory::PuzzleFail
            },
        );

        if !success {
            if let Some(npc_id) = session.npc_id.as_deref() {
                self.ledger.update_score(
                    player_id,
                    npc_id,
                    RelationshipReason::PuzzleFailedWithNpc,
                    ScoreDelta {
                        value: FAILURE_PENALTY,
                    },
                );
            }
            return;
        }

        self.notifier.puzzle_solved_effect(&puzzle.id);

        if puzzle.rewards.relationship_points > 0 {
            if let Some(npc_id) = session.npc_id.as_deref() {
                let points = adjusted_reward_points(
                    puzzle.rewards.relationship_points,
                    session.hints_used,
                    session.attempts,
                );
                self.ledger.update_score(
                    player_id,
                    npc_id,
                    RelationshipReason::PuzzleSolvedWithNpc,
                    ScoreDelta { value: points },
                );
            }
        }

        for item in &puzzle.rewards.items {
            self.inventory.grant_item(
                player_id,
                &item.item_id,
                item.quantity,
                &item.kind,
                &item.metadata,
            );
        }

        self.records.mark_puzzle_solved(player_id, &puzzle.id);
    }
}

/// Reward points after penalties: hints first, attempts second, each floored
/// at 1 independently. The order is part of the contract.
pub fn adjusted_reward_points(base: i32, hints_used: usize, attempts: u32) -> i32 {
    let after_hints = (base - hints_used as i32 * HINT_PENALTY).max(1);
    (after_hints - (attempts as i32 - 1)).max(1)
}
