//! Synthetic decks for demos, tests and benchmarks.
//!
//! The real card catalog is loaded from data files outside this crate.
//! These decks only need the right shape: 23 cards per era (the builder
//! uses the first 20 after shuffling), every color represented, all seven
//! scientific symbols present across the three eras, and three guilds in
//! the last era.

use super::attributes::{Color, Resource, ScienceSymbol};
use super::definition::{Card, CardId, Cost};
use super::pool::{CardPool, Era};
use crate::core::PlayerId;

/// Cards dealt into each era's pool.
pub const CARDS_PER_ERA: usize = 23;

/// Guilds mixed into the last era.
pub const GUILDS: usize = 3;

/// Wonders each player starts with.
pub const WONDERS_PER_PLAYER: usize = 4;

const COLOR_CYCLE: [Color; 7] = [
    Color::Brown,
    Color::Brown,
    Color::Grey,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Red,
];

/// Build a pool with `CARDS_PER_ERA` cards for every era.
#[must_use]
pub fn sample_pool() -> CardPool {
    let mut pool = CardPool::new();
    for (era_idx, era) in Era::ALL.into_iter().enumerate() {
        pool.extend(era, sample_era(era_idx));
    }
    pool
}

fn sample_era(era_idx: usize) -> Vec<Card> {
    let tier = era_idx as u8 + 1;
    let age_cards = if era_idx == 2 {
        CARDS_PER_ERA - GUILDS
    } else {
        CARDS_PER_ERA
    };

    let mut green_seen = 0usize;
    let mut cards = Vec::with_capacity(CARDS_PER_ERA);

    for i in 0..age_cards {
        let id = CardId::new((era_idx * 100 + i) as u32);
        let color = COLOR_CYCLE[i % COLOR_CYCLE.len()];
        let name = format!("{:?} {}-{}", color, tier, i);
        let card = Card::age(id, name, color);

        let card = match color {
            Color::Brown => card.with_production(Resource::ALL[i % 3], tier.min(2)),
            Color::Grey => card
                .with_production(Resource::ALL[3 + i % 2], 1)
                .with_cost(Cost {
                    coins: 1,
                    ..Cost::default()
                }),
            Color::Blue => card.with_victory_points(2 + tier),
            Color::Green => {
                let symbol = ScienceSymbol::ALL[(era_idx * 3 + green_seen) % ScienceSymbol::COUNT];
                green_seen += 1;
                card.with_science(symbol).with_victory_points(tier - 1)
            }
            Color::Yellow => card.with_victory_points(tier - 1),
            Color::Red => card.with_shields(tier),
            Color::Purple => card,
        };
        cards.push(card);
    }

    if era_idx == 2 {
        for g in 0..GUILDS {
            let id = CardId::new((era_idx * 100 + age_cards + g) as u32);
            cards.push(Card::guild(id, format!("Guild {}", g)).with_victory_points(3 + g as u8));
        }
    }

    cards
}

/// The starting wonders of a player.
#[must_use]
pub fn sample_wonders(player: PlayerId) -> Vec<Card> {
    (0..WONDERS_PER_PLAYER)
        .map(|k| {
            let id = CardId::new(900 + player.index() as u32 * 10 + k as u32);
            let wonder = Card::wonder(id, format!("Wonder {}-{}", player.index(), k))
                .with_victory_points(2 + k as u8);
            if k == WONDERS_PER_PLAYER - 1 {
                wonder.with_shields(1)
            } else {
                wonder
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes() {
        let pool = sample_pool();
        for era in Era::ALL {
            assert_eq!(pool.len(era), CARDS_PER_ERA);
            assert!(pool.len(era) >= era.slot_count());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let pool = sample_pool();
        let mut ids = HashSet::new();
        for era in Era::ALL {
            for card in pool.cards(era) {
                assert!(ids.insert(card.id), "duplicate {}", card.id);
            }
        }
        for p in PlayerId::BOTH {
            for wonder in sample_wonders(p) {
                assert!(ids.insert(wonder.id));
            }
        }
    }

    #[test]
    fn test_every_symbol_present() {
        let pool = sample_pool();
        let symbols: HashSet<_> = Era::ALL
            .iter()
            .flat_map(|&era| pool.cards(era).iter().filter_map(Card::science_symbol))
            .collect();
        assert_eq!(symbols.len(), ScienceSymbol::COUNT);
    }

    #[test]
    fn test_guilds_only_in_last_era() {
        let pool = sample_pool();
        let guilds = |era| {
            pool.cards(era)
                .iter()
                .filter(|c| c.color() == Some(Color::Purple))
                .count()
        };
        assert_eq!(guilds(Era::First), 0);
        assert_eq!(guilds(Era::Third), GUILDS);
    }

    #[test]
    fn test_wonders_start_unbuilt() {
        let wonders = sample_wonders(PlayerId::SECOND);
        assert_eq!(wonders.len(), WONDERS_PER_PLAYER);
        assert!(wonders.iter().all(|w| w.is_wonder() && !w.is_constructed()));
    }
}
