//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two duelists.
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage backed by `[T; 2]`. Unlike a `Vec`, a pair
//! of `Copy` values is itself `Copy`, which keeps search-state clones cheap.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier of one of the two players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The second player.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Both players in seat order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::FIRST, PlayerId::SECOND];

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "A duel has exactly two players");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    ///
    /// ```
    /// use duel_draft::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data for exactly two players.
///
/// ## Example
///
/// ```
/// use duel_draft::core::{PlayerId, PlayerPair};
///
/// let mut coins: PlayerPair<u32> = PlayerPair::with_value(7);
/// coins[PlayerId::SECOND] += 2;
///
/// assert_eq!(coins[PlayerId::FIRST], 7);
/// assert_eq!(coins[PlayerId::SECOND], 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit values, first player first.
    pub const fn from_array(data: [T; 2]) -> Self {
        Self { data }
    }

    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Unwrap into the underlying array, first player first.
    pub fn into_array(self) -> [T; 2] {
        self.data
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter_mut())
    }

    /// Map both entries into a new pair.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerPair<U> {
        PlayerPair {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
