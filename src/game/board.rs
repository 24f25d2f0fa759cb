//! A player's live city: coins, built cards and wonders.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, ResourceCounts, ScienceSymbol};
use crate::error::{DraftError, Result};

/// Coins each player starts the match with.
pub const STARTING_COINS: u32 = 7;

/// Base price the bank pays for a sold card.
pub const SELL_BASE: u32 = 2;

/// One player's city.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    /// Coins in the treasury.
    pub coins: u32,

    /// Built age and guild cards, in build order.
    pub cards: Vec<Card>,

    /// Owned wonders, built or not.
    pub wonders: Vec<Card>,

    /// Cards spent on wonders.
    pub tucked: Vec<Card>,

    /// Victory points from progress tokens (tracked by the caller).
    pub progress_vp: u32,

    /// Resources this player can buy at a fixed discount.
    pub trading: ResourceCounts,
}

impl PlayerBoard {
    /// Create a board with the standard starting coins and the given wonders.
    ///
    /// Fails with `NotAWonder` if any card in `wonders` is not a wonder.
    pub fn new(wonders: Vec<Card>) -> Result<Self> {
        if let Some(card) = wonders.iter().find(|c| !c.is_wonder()) {
            return Err(DraftError::NotAWonder { card: card.id });
        }
        Ok(Self {
            coins: STARTING_COINS,
            wonders,
            ..Self::default()
        })
    }

    /// Number of built cards of a color.
    #[must_use]
    pub fn color_count(&self, color: Color) -> u8 {
        self.color_counts()[color.index()]
    }

    /// Built cards per color.
    #[must_use]
    pub fn color_counts(&self) -> [u8; Color::COUNT] {
        let mut counts = [0u8; Color::COUNT];
        for color in self.cards.iter().filter_map(Card::color) {
            counts[color.index()] = counts[color.index()].saturating_add(1);
        }
        counts
    }

    /// Built scientific symbols per type.
    #[must_use]
    pub fn science_histogram(&self) -> [u8; ScienceSymbol::COUNT] {
        let mut counts = [0u8; ScienceSymbol::COUNT];
        for symbol in self.cards.iter().filter_map(Card::science_symbol) {
            counts[symbol.index()] = counts[symbol.index()].saturating_add(1);
        }
        counts
    }

    /// Number of distinct scientific symbol types built.
    #[must_use]
    pub fn distinct_science(&self) -> usize {
        self.science_histogram().iter().filter(|&&c| c > 0).count()
    }

    /// Resources produced by built cards.
    #[must_use]
    pub fn production(&self) -> ResourceCounts {
        let mut total = ResourceCounts::EMPTY;
        for card in &self.cards {
            total.add(&card.production());
        }
        total
    }

    /// Victory points from built cards of VP-bearing colors.
    #[must_use]
    pub fn building_vp(&self) -> u32 {
        self.cards
            .iter()
            .filter(|c| c.color().is_some_and(Color::bears_victory_points))
            .map(|c| u32::from(c.victory_points()))
            .sum()
    }

    /// Victory points from constructed wonders.
    #[must_use]
    pub fn wonder_vp(&self) -> u32 {
        self.wonders
            .iter()
            .filter(|w| w.is_constructed())
            .map(|w| u32::from(w.victory_points()))
            .sum()
    }

    /// Coins the bank pays this player for a sold card.
    #[must_use]
    pub fn sell_price(&self) -> u32 {
        SELL_BASE + u32::from(self.color_count(Color::Yellow))
    }

    /// Add a drafted card to the city.
    pub fn build(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Receive coins for a sold card; returns the coins gained.
    pub fn sell(&mut self) -> u32 {
        let price = self.sell_price();
        self.coins += price;
        price
    }

    /// Check that wonder `index` exists and is unbuilt.
    pub fn check_wonder(&self, index: usize) -> Result<&Card> {
        let wonder = self.wonders.get(index).ok_or(DraftError::WonderOutOfRange {
            wonder: index,
            len: self.wonders.len(),
        })?;
        if wonder.is_constructed() {
            return Err(DraftError::WonderAlreadyBuilt { wonder: index });
        }
        Ok(wonder)
    }

    /// Construct wonder `index` by spending `card`.
    ///
    /// Returns the constructed wonder.
    pub fn construct_wonder(&mut self, index: usize, card: Card) -> Result<&Card> {
        self.check_wonder(index)?;
        self.tucked.push(card);
        let wonder = &mut self.wonders[index];
        wonder.mark_constructed();
        Ok(wonder)
    }

    /// Indices of unbuilt wonders.
    pub fn unbuilt_wonders(&self) -> impl Iterator<Item = usize> + '_ {
        self.wonders
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_constructed())
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Resource};

    fn board() -> PlayerBoard {
        PlayerBoard::new(vec![
            Card::wonder(CardId::new(90), "Pyramids").with_victory_points(4),
            Card::wonder(CardId::new(91), "Colossus").with_shields(2),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = board();
        assert_eq!(board.coins, STARTING_COINS);
        assert!(board.cards.is_empty());
        assert_eq!(board.unbuilt_wonders().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_new_rejects_non_wonders() {
        let err = PlayerBoard::new(vec![Card::age(CardId::new(1), "Quarry", Color::Brown)])
            .unwrap_err();
        assert!(matches!(err, DraftError::NotAWonder { card } if card == CardId::new(1)));
    }

    #[test]
    fn test_tallies() {
        let mut board = board();
        board.build(Card::age(CardId::new(1), "Baths", Color::Blue).with_victory_points(3));
        board.build(Card::age(CardId::new(2), "Tavern", Color::Yellow).with_victory_points(1));
        board.build(
            Card::age(CardId::new(3), "Scriptorium", Color::Green)
                .with_science(ScienceSymbol::Tablet),
        );
        board.build(Card::age(CardId::new(4), "Quarry", Color::Brown).with_production(Resource::Stone, 2));

        assert_eq!(board.color_count(Color::Blue), 1);
        assert_eq!(board.color_count(Color::Red), 0);
        assert_eq!(board.building_vp(), 4);
        assert_eq!(board.science_histogram()[ScienceSymbol::Tablet.index()], 1);
        assert_eq!(board.production()[Resource::Stone], 2);
    }

    #[test]
    fn test_sell_scales_with_yellow() {
        let mut board = board();
        assert_eq!(board.sell(), 2);
        board.build(Card::age(CardId::new(5), "Market", Color::Yellow));
        board.build(Card::age(CardId::new(6), "Depot", Color::Yellow));
        assert_eq!(board.sell(), 4);
        assert_eq!(board.coins, STARTING_COINS + 6);
    }

    #[test]
    fn test_construct_wonder() {
        let mut board = board();
        let spent = Card::age(CardId::new(7), "Lumber Yard", Color::Brown);

        let wonder = board.construct_wonder(0, spent).unwrap();
        assert!(wonder.is_constructed());
        assert_eq!(board.wonder_vp(), 4);
        assert_eq!(board.tucked.len(), 1);
        assert_eq!(board.unbuilt_wonders().collect::<Vec<_>>(), vec![1]);

        let again = Card::age(CardId::new(8), "Clay Pit", Color::Brown);
        assert!(matches!(
            board.construct_wonder(0, again),
            Err(DraftError::WonderAlreadyBuilt { wonder: 0 })
        ));
        assert!(matches!(
            board.construct_wonder(5, Card::age(CardId::new(9), "x", Color::Red)),
            Err(DraftError::WonderOutOfRange { wonder: 5, len: 2 })
        ));
    }
}
