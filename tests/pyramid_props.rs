//! Property tests: availability and conservation under random draft orders.

use std::collections::HashSet;

use proptest::prelude::*;

use duel_draft::cards::{Card, CardId, Color, Era};
use duel_draft::core::GameRng;
use duel_draft::pyramid::{build, Pyramid, RowPattern};

fn cards(n: usize) -> Vec<Card> {
    (0..n as u32)
        .map(|i| Card::age(CardId::new(i), format!("card {}", i), Color::Blue))
        .collect()
}

fn availability_holds(pyramid: &Pyramid) -> bool {
    pyramid.iter().all(|(id, slot)| {
        let expected = slot.has_card() && slot.children().all(|c| !pyramid.get(c).has_card());
        pyramid.is_available(id) == expected
    })
}

fn era() -> impl Strategy<Value = Era> {
    prop_oneof![Just(Era::First), Just(Era::Second), Just(Era::Third)]
}

proptest! {
    #[test]
    fn prop_availability_after_every_draft(era in era(), seed in any::<u64>()) {
        let mut pyramid = build(cards(20), &RowPattern::for_era(era)).unwrap();
        let mut rng = GameRng::new(seed);
        prop_assert!(availability_holds(&pyramid));

        while !pyramid.is_exhausted() {
            let available = pyramid.available_slots();
            prop_assert!(!available.is_empty());
            let slot = *rng.choose(&available).unwrap();
            pyramid.draft(slot).unwrap();
            prop_assert!(availability_holds(&pyramid));
        }
    }

    #[test]
    fn prop_every_card_drafted_once(era in era(), seed in any::<u64>()) {
        let mut pyramid = build(cards(20), &RowPattern::for_era(era)).unwrap();
        let mut rng = GameRng::new(seed);
        let mut seen = HashSet::new();

        while let Some(&slot) = rng.choose(&pyramid.available_slots()) {
            let card = pyramid.draft(slot).unwrap();
            prop_assert!(seen.insert(card.id));
        }

        prop_assert_eq!(seen.len(), 20);
        prop_assert!(pyramid.is_exhausted());
    }

    #[test]
    fn prop_ascending_patterns_wire_every_child(top in 1usize..4, depth in 1usize..5) {
        let rows: Vec<usize> = (0..depth).map(|r| top + r).collect();
        let total: usize = rows.iter().sum();
        let pattern = RowPattern::new(rows).unwrap();
        let pyramid = build(cards(total), &pattern).unwrap();

        prop_assert_eq!(pyramid.len(), total);
        for (_, slot) in pyramid.iter() {
            if slot.row() + 1 < pattern.row_count() {
                prop_assert_eq!(slot.children().count(), 2);
            } else {
                prop_assert_eq!(slot.children().count(), 0);
            }
        }
    }
}
