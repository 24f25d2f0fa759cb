//! Match-level facts that are neither pyramid nor player data.

use serde::{Deserialize, Serialize};

use crate::cards::Era;
use crate::core::{ConflictTrack, PlayerId};

/// Shared match facts handed to the search projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMeta {
    /// Era currently being drafted.
    pub era: Era,

    /// Player to move.
    pub to_move: PlayerId,

    /// Conflict marker.
    pub conflict: ConflictTrack,

    /// Turns the search may look ahead. `None` means "until the current
    /// pyramid is empty".
    pub round_budget: Option<u32>,
}

impl MatchMeta {
    /// Start of a match: era I, first player to move, marker centered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            era: Era::First,
            to_move: PlayerId::FIRST,
            conflict: ConflictTrack::default(),
            round_budget: None,
        }
    }

    /// Set the round budget (builder pattern).
    #[must_use]
    pub fn with_round_budget(mut self, rounds: u32) -> Self {
        self.round_budget = Some(rounds);
        self
    }
}

impl Default for MatchMeta {
    fn default() -> Self {
        Self::new()
    }
}
