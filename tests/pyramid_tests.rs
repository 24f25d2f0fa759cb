//! Pyramid integration tests: building, wiring and drafting.

use std::collections::HashSet;

use serde_json::json;

use duel_draft::cards::sample::sample_pool;
use duel_draft::cards::{Card, CardId, Color, Era};
use duel_draft::core::GameRng;
use duel_draft::error::DraftError;
use duel_draft::pyramid::{build, ChildIndex, Pyramid, PyramidShape, RowPattern, SlotId};

fn distinct_cards(n: u32) -> Vec<Card> {
    (0..n)
        .map(|i| Card::age(CardId::new(i), format!("card {}", i), Color::ALL[i as usize % 7]))
        .collect()
}

fn child_positions(pyramid: &Pyramid, row: usize, column: usize) -> Vec<(usize, usize)> {
    let id = pyramid.slot_at(row, column).unwrap();
    pyramid
        .get(id)
        .children()
        .map(|c| pyramid.position(c))
        .collect()
}

fn assert_availability_invariant(pyramid: &Pyramid) {
    for (id, slot) in pyramid.iter() {
        let expected = slot.has_card() && slot.children().all(|c| !pyramid.get(c).has_card());
        assert_eq!(pyramid.is_available(id), expected, "slot {id}");
    }
}

// =============================================================================
// Shape Tests
// =============================================================================

#[test]
fn test_ascending_two_three_shape() {
    let pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();

    assert_eq!(pyramid.shape(), PyramidShape::Ascending);
    assert_eq!(child_positions(&pyramid, 0, 0), vec![(1, 0), (1, 1)]);
    assert_eq!(child_positions(&pyramid, 0, 1), vec![(1, 1), (1, 2)]);
}

#[test]
fn test_descending_era_wiring() {
    let pyramid = build(distinct_cards(20), &RowPattern::for_era(Era::Second)).unwrap();

    assert_eq!(pyramid.shape(), PyramidShape::Descending);
    // Row 0 has 6 slots, row 1 has 5.
    assert_eq!(child_positions(&pyramid, 0, 0), vec![(1, 0)]);
    assert_eq!(child_positions(&pyramid, 0, 3), vec![(1, 2), (1, 3)]);
    assert_eq!(child_positions(&pyramid, 0, 5), vec![(1, 4)]);
}

#[test]
fn test_hourglass_era_wiring() {
    let pyramid = build(distinct_cards(20), &RowPattern::for_era(Era::Third)).unwrap();

    assert_eq!(pyramid.shape(), PyramidShape::Hourglass);
    // 4 -> 2 pinch
    assert_eq!(child_positions(&pyramid, 2, 0), vec![(3, 0)]);
    assert_eq!(child_positions(&pyramid, 2, 1), vec![(3, 0)]);
    assert_eq!(child_positions(&pyramid, 2, 3), vec![(3, 1)]);
    // 2 -> 4 spread
    assert_eq!(child_positions(&pyramid, 3, 1), vec![(4, 2), (4, 3)]);
    // 4 -> 3 contract
    assert_eq!(child_positions(&pyramid, 4, 0), vec![(5, 0)]);
    assert_eq!(child_positions(&pyramid, 4, 3), vec![(5, 2)]);
}

#[test]
fn test_parents_mirror_children() {
    let pyramid = build(distinct_cards(20), &RowPattern::for_era(Era::First)).unwrap();

    for (id, slot) in pyramid.iter() {
        for child in slot.children() {
            assert!(pyramid.get(child).parents().contains(&Some(id)));
        }
        let parents = slot.parents();
        if slot.row() > 0 {
            // Never half-populated.
            assert!(parents[0].is_some() && parents[1].is_some());
        } else {
            assert_eq!(parents, [None, None]);
        }
    }
}

#[test]
fn test_unsupported_patterns_rejected() {
    assert!(matches!(
        RowPattern::new(vec![2, 5, 6]),
        Err(DraftError::UnsupportedRowPattern { .. })
    ));
    assert!(matches!(
        RowPattern::new(Vec::<usize>::new()),
        Err(DraftError::EmptyRowPattern)
    ));
    assert!(matches!(
        RowPattern::new(vec![2, 0, 3]),
        Err(DraftError::EmptyRowPattern)
    ));
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_row_sum_conservation() {
    for era in Era::ALL {
        let rows = RowPattern::for_era(era);
        let input = distinct_cards(rows.total() as u32);
        let mut expected: Vec<CardId> = input.iter().map(|c| c.id).collect();

        let pyramid = build(input, &rows).unwrap();
        let mut held: Vec<CardId> = pyramid.iter().filter_map(|(_, s)| s.card()).map(|c| c.id).collect();

        expected.sort();
        held.sort();
        assert_eq!(pyramid.len(), rows.total());
        assert_eq!(held, expected);
    }
}

#[test]
fn test_bottom_row_seed() {
    let pool = sample_pool();
    let mut rng = GameRng::new(5);

    for era in Era::ALL {
        let rows = RowPattern::for_era(era);
        let pyramid = build(pool.deal(era, &mut rng), &rows).unwrap();
        let last = rows.last_row();

        for (id, slot) in pyramid.iter() {
            if slot.row() == last {
                assert!(pyramid.is_available(id));
                assert!(pyramid.is_visible(id));
            } else {
                assert!(!pyramid.is_available(id));
            }
        }
        assert_eq!(pyramid.available_slots().len(), rows.rows()[last]);
    }
}

#[test]
fn test_checkerboard_visibility() {
    let pyramid = build(distinct_cards(20), &RowPattern::for_era(Era::First)).unwrap();
    for (id, slot) in pyramid.iter() {
        if slot.row() < 4 {
            assert_eq!(pyramid.is_visible(id), (slot.row() + slot.column()) % 2 == 0);
        }
    }
}

#[test]
fn test_extra_cards_ignored_and_short_supply_fails() {
    let rows = RowPattern::for_era(Era::First);
    let pyramid = build(distinct_cards(25), &rows).unwrap();
    assert_eq!(pyramid.len(), 20);
    assert!(pyramid.iter().all(|(_, s)| s.card().unwrap().id.raw() < 20));

    let err = build(distinct_cards(12), &rows).unwrap_err();
    assert!(matches!(
        err,
        DraftError::ShortCardSupply {
            needed: 20,
            available: 12
        }
    ));
}

// =============================================================================
// Drafting Tests
// =============================================================================

#[test]
fn test_end_to_end_ascending_draft() {
    let mut pyramid = build(distinct_cards(20), &RowPattern::new(vec![2, 3, 4, 5, 6]).unwrap()).unwrap();
    let mut rng = GameRng::new(99);
    let mut seen = HashSet::new();

    while !pyramid.is_exhausted() {
        let available = pyramid.available_slots();
        assert!(!available.is_empty(), "a non-empty pyramid always has an available slot");
        let slot = *rng.choose(&available).unwrap();

        let card = pyramid.draft(slot).unwrap();
        assert!(seen.insert(card.id), "card {} returned twice", card.id);
        assert_availability_invariant(&pyramid);
    }

    assert_eq!(seen.len(), 20);
    assert!(pyramid.available_slots().is_empty());
    for id in pyramid.ids() {
        assert!(pyramid.take_card(id).is_none());
    }
}

#[test]
fn test_draft_rejects_covered_and_missing_slots() {
    let mut pyramid = build(distinct_cards(20), &RowPattern::for_era(Era::First)).unwrap();

    assert!(matches!(
        pyramid.draft(SlotId::new(0)),
        Err(DraftError::SlotUnavailable { slot: 0 })
    ));
    assert!(matches!(
        pyramid.draft(SlotId::new(40)),
        Err(DraftError::SlotOutOfRange { slot: 40, len: 20 })
    ));
}

#[test]
fn test_parent_state_never_gates_children() {
    let mut pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();
    let before: Vec<bool> = pyramid.ids().map(|id| pyramid.is_available(id)).collect();

    // Pull a covered top card out directly: its children are unaffected.
    assert!(pyramid.take_card(SlotId::new(0)).is_some());
    for id in pyramid.ids().skip(2) {
        assert_eq!(pyramid.is_available(id), before[id.index()]);
    }
}

#[test]
fn test_set_child_replaces_and_unlinks() {
    let mut pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();
    let parent = SlotId::new(0);
    let old = pyramid.get(parent).child(ChildIndex::Second).unwrap();
    let new = SlotId::new(4);

    pyramid.set_child(parent, ChildIndex::Second, new).unwrap();

    assert_eq!(pyramid.get(parent).child(ChildIndex::Second), Some(new));
    assert!(pyramid.get(new).parents().contains(&Some(parent)));
    assert!(!pyramid.get(old).parents().contains(&Some(parent)));
}

#[test]
fn test_set_child_rejects_bad_handles() {
    let mut pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();
    let before = pyramid.clone();

    assert!(matches!(
        pyramid.set_child(SlotId::new(0), ChildIndex::First, SlotId::new(99)),
        Err(DraftError::SlotOutOfRange { slot: 99, len: 5 })
    ));
    assert!(matches!(
        pyramid.set_child(SlotId::new(7), ChildIndex::First, SlotId::new(2)),
        Err(DraftError::SlotOutOfRange { slot: 7, len: 5 })
    ));
    assert!(matches!(
        pyramid.set_child(SlotId::new(3), ChildIndex::First, SlotId::new(3)),
        Err(DraftError::SelfLink { slot: 3 })
    ));
    assert_eq!(pyramid, before);
}

#[test]
fn test_snapshot_roundtrip() {
    let mut pyramid = build(distinct_cards(20), &RowPattern::for_era(Era::Third)).unwrap();
    let first = pyramid.available_slots()[0];
    pyramid.draft(first).unwrap();

    let bytes = pyramid.to_bytes().unwrap();
    let restored = Pyramid::from_bytes(&bytes).unwrap();

    assert_eq!(restored, pyramid);
    assert_eq!(restored.available_slots(), pyramid.available_slots());
}

#[test]
fn test_display_marks_available_slots() {
    let mut pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();
    pyramid.draft(SlotId::new(2)).unwrap();

    let text = pyramid.to_string();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("--"));
    assert!(text.contains("3*"));
}

/// Re-encode `pyramid` after editing its JSON form.
fn tampered(pyramid: &Pyramid, edit: impl FnOnce(&mut serde_json::Value)) -> Vec<u8> {
    let mut value = serde_json::to_value(pyramid).unwrap();
    edit(&mut value);
    let broken: Pyramid = serde_json::from_value(value).unwrap();
    broken.to_bytes().unwrap()
}

#[test]
fn test_snapshot_rejects_dangling_child() {
    let pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();
    let bytes = tampered(&pyramid, |v| v["slots"][0]["children"][0] = json!(99));

    let err = Pyramid::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, DraftError::CorruptSnapshot(_)));
}

#[test]
fn test_snapshot_rejects_dangling_parent() {
    let pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();
    let bytes = tampered(&pyramid, |v| v["slots"][4]["parents"][1] = json!(40));

    assert!(matches!(
        Pyramid::from_bytes(&bytes),
        Err(DraftError::CorruptSnapshot(_))
    ));
}

#[test]
fn test_snapshot_rejects_truncated_arena() {
    let pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();
    let bytes = tampered(&pyramid, |v| {
        v["slots"].as_array_mut().unwrap().truncate(3);
    });

    let err = Pyramid::from_bytes(&bytes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "corrupt pyramid snapshot: 3 slots for a 5-slot pattern"
    );
}

#[test]
fn test_snapshot_rejects_misplaced_slot() {
    let pyramid = build(distinct_cards(5), &RowPattern::new(vec![2, 3]).unwrap()).unwrap();
    let bytes = tampered(&pyramid, |v| v["slots"][1]["column"] = json!(0));

    assert!(matches!(
        Pyramid::from_bytes(&bytes),
        Err(DraftError::CorruptSnapshot(_))
    ));
}
