//! Conflict (military) track.
//!
//! A single marker moves between `-LIMIT` and `+LIMIT`. Shields gained by
//! the first player push it toward `+LIMIT`, shields gained by the second
//! player push it toward `-LIMIT`. Reaching either end is a military
//! supremacy win for the player who pushed it there.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Position of the conflict marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConflictTrack(i8);

impl ConflictTrack {
    /// Distance from the center to either end.
    pub const LIMIT: i8 = 9;

    /// Create a track at `position`, clamped into range.
    #[must_use]
    pub fn new(position: i8) -> Self {
        Self(position.clamp(-Self::LIMIT, Self::LIMIT))
    }

    /// Signed marker position (positive favors the first player).
    #[must_use]
    pub const fn position(self) -> i8 {
        self.0
    }

    /// Move the marker `shields` steps toward `player`'s winning end.
    pub fn push(&mut self, player: PlayerId, shields: u8) {
        let steps = i16::from(shields);
        let delta = if player == PlayerId::FIRST { steps } else { -steps };
        let limit = i16::from(Self::LIMIT);
        self.0 = (i16::from(self.0) + delta).clamp(-limit, limit) as i8;
    }

    /// The player whose end the marker has reached, if any.
    #[must_use]
    pub fn supremacy(self) -> Option<PlayerId> {
        match self.0 {
            p if p >= Self::LIMIT => Some(PlayerId::FIRST),
            p if p <= -Self::LIMIT => Some(PlayerId::SECOND),
            _ => None,
        }
    }

    /// Steps the marker sits toward `player`'s winning end (negative when
    /// the opponent leads).
    #[must_use]
    pub fn advantage(self, player: PlayerId) -> i8 {
        if player == PlayerId::FIRST {
            self.0
        } else {
            -self.0
        }
    }

    /// Absolute distance from the center.
    #[must_use]
    pub fn distance_from_center(self) -> u8 {
        self.0.unsigned_abs()
    }

    /// Victory points the track is worth to `player` at game end.
    ///
    /// Only the leading player scores: 2 VP at 3-5 steps, 5 VP at 6-8.
    #[must_use]
    pub fn military_vp(self, player: PlayerId) -> u32 {
        match self.advantage(player) {
            3..=5 => 2,
            6..=8 => 5,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_directions() {
        let mut track = ConflictTrack::default();
        track.push(PlayerId::FIRST, 3);
        assert_eq!(track.position(), 3);
        track.push(PlayerId::SECOND, 5);
        assert_eq!(track.position(), -2);
        assert_eq!(track.advantage(PlayerId::SECOND), 2);
    }

    #[test]
    fn test_push_clamps() {
        let mut track = ConflictTrack::new(7);
        track.push(PlayerId::FIRST, 200);
        assert_eq!(track.position(), ConflictTrack::LIMIT);
        assert_eq!(ConflictTrack::new(-40).position(), -ConflictTrack::LIMIT);
    }

    #[test]
    fn test_supremacy() {
        assert_eq!(ConflictTrack::new(9).supremacy(), Some(PlayerId::FIRST));
        assert_eq!(ConflictTrack::new(-9).supremacy(), Some(PlayerId::SECOND));
        assert_eq!(ConflictTrack::new(8).supremacy(), None);
    }

    #[test]
    fn test_military_vp_zones() {
        let track = ConflictTrack::new(-4);
        assert_eq!(track.military_vp(PlayerId::SECOND), 2);
        assert_eq!(track.military_vp(PlayerId::FIRST), 0);
        assert_eq!(ConflictTrack::new(7).military_vp(PlayerId::FIRST), 5);
        assert_eq!(ConflictTrack::new(2).military_vp(PlayerId::FIRST), 0);
        assert_eq!(ConflictTrack::new(-6).distance_from_center(), 6);
    }
}
