//! Per-era card pools.
//!
//! A loader (out of this crate) fills a `CardPool` with the cards drafted
//! into each era. At the start of an era the pool deals a shuffled copy of
//! that era's cards, which the pyramid builder consumes front to back.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::GameRng;

/// One of the three drafting eras.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Era {
    First,
    Second,
    Third,
}

impl Era {
    /// All eras in play order.
    pub const ALL: [Era; 3] = [Era::First, Era::Second, Era::Third];

    /// Standard pyramid row counts for this era, top row first.
    #[must_use]
    pub const fn row_counts(self) -> &'static [usize] {
        match self {
            Era::First => &[2, 3, 4, 5, 6],
            Era::Second => &[6, 5, 4, 3, 2],
            Era::Third => &[2, 3, 4, 2, 4, 3, 2],
        }
    }

    /// Number of cards the standard pyramid holds.
    #[must_use]
    pub fn slot_count(self) -> usize {
        self.row_counts().iter().sum()
    }

    /// The era after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Era> {
        match self {
            Era::First => Some(Era::Second),
            Era::Second => Some(Era::Third),
            Era::Third => None,
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = match self {
            Era::First => "I",
            Era::Second => "II",
            Era::Third => "III",
        };
        write!(f, "Era {}", n)
    }
}

/// Ordered card lists keyed by era.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardPool {
    eras: FxHashMap<Era, Vec<Card>>,
}

impl CardPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to an era's list.
    pub fn insert(&mut self, era: Era, card: Card) {
        self.eras.entry(era).or_default().push(card);
    }

    /// Append many cards to an era's list.
    pub fn extend(&mut self, era: Era, cards: impl IntoIterator<Item = Card>) {
        self.eras.entry(era).or_default().extend(cards);
    }

    /// Cards registered for an era, in insertion order.
    #[must_use]
    pub fn cards(&self, era: Era) -> &[Card] {
        self.eras.get(&era).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of cards registered for an era.
    #[must_use]
    pub fn len(&self, era: Era) -> usize {
        self.cards(era).len()
    }

    /// Check if an era has no cards.
    #[must_use]
    pub fn is_empty(&self, era: Era) -> bool {
        self.len(era) == 0
    }

    /// Deal a shuffled copy of an era's cards.
    ///
    /// The pool itself is untouched, so dealing is repeatable with a
    /// re-seeded RNG.
    pub fn deal(&self, era: Era, rng: &mut GameRng) -> Vec<Card> {
        let mut cards = self.cards(era).to_vec();
        rng.shuffle(&mut cards);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Color};

    fn pool_with(n: u32) -> CardPool {
        let mut pool = CardPool::new();
        for i in 0..n {
            pool.insert(Era::First, Card::age(CardId::new(i), format!("c{}", i), Color::Blue));
        }
        pool
    }

    #[test]
    fn test_era_slot_counts() {
        assert_eq!(Era::First.slot_count(), 20);
        assert_eq!(Era::Second.slot_count(), 20);
        assert_eq!(Era::Third.slot_count(), 20);
    }

    #[test]
    fn test_era_order() {
        assert_eq!(Era::First.next(), Some(Era::Second));
        assert_eq!(Era::Third.next(), None);
        assert_eq!(Era::Second.to_string(), "Era II");
    }

    #[test]
    fn test_pool_insert_and_len() {
        let pool = pool_with(5);
        assert_eq!(pool.len(Era::First), 5);
        assert!(pool.is_empty(Era::Second));
        assert_eq!(pool.cards(Era::First)[2].id, CardId::new(2));
    }

    #[test]
    fn test_deal_is_a_permutation() {
        let pool = pool_with(20);
        let mut rng = GameRng::new(7);
        let dealt = pool.deal(Era::First, &mut rng);

        let mut ids: Vec<_> = dealt.iter().map(|c| c.id.raw()).collect();
        assert_ne!(ids, (0..20).collect::<Vec<_>>());
        ids.sort_unstable();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_deal_is_deterministic() {
        let pool = pool_with(20);
        let a = pool.deal(Era::First, &mut GameRng::new(9));
        let b = pool.deal(Era::First, &mut GameRng::new(9));
        assert_eq!(a, b);
    }
}
