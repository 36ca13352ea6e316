//! Live session state for a player's active puzzle.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for one puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The live, mutable state of one player's attempt at one puzzle.
///
/// A player has at most one of these at a time; starting a new puzzle
/// replaces the previous state wholesale.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub session_id: SessionId,
    pub puzzle_id: String,

    /// NPC the puzzle was started with, if any.
    pub npc_id: Option<String>,

    /// Informational only; sessions never time out.
    pub started_at: DateTime<Utc>,

    /// Submitted answers, correct or not.
    pub attempts: u32,

    pub hints_used: usize,
}

impl SessionState {
    /// Fresh session with zeroed counters.
    pub fn new(puzzle_id: impl Into<String>, npc_id: Option<&str>) -> Self {
        Self {
            session_id: SessionId::new(),
            puzzle_id: puzzle_id.into(),
            npc_id: npc_id.map(str::to_string),
            started_at: Utc::now(),
            attempts: 0,
            hints_used: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_counters() {
        let state = SessionState::new("riddle_of_time", Some("npc_kai"));
        assert_eq!(state.attempts, 0);
        assert_eq!(state.hints_used, 0);
        assert_eq!(state.npc_id.as_deref(), Some("npc_kai"));
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = SessionState::new("riddle_of_time", None);
        let b = SessionState::new("riddle_of_time", None);
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_session_state_snapshot_serializes() {
        let state = SessionState::new("riddle_of_time", Some("npc_kai"));
        let value = serde_json::to_value(&state).unwrap();

        assert_eq!(value["puzzle_id"], "riddle_of_time");
        assert_eq!(value["npc_id"], "npc_kai");
        assert_eq!(value["attempts"], 0);
        assert_eq!(value["hints_used"], 0);
    }
}
