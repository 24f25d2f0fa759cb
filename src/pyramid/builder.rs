//! Pyramid construction.

use super::graph::Pyramid;
use super::shape::RowPattern;
use super::slot::{ChildIndex, Slot, SlotId};
use crate::cards::Card;
use crate::error::{DraftError, Result};

/// Build a wired pyramid from a dealt card sequence.
///
/// Slots are allocated row by row, left to right, consuming cards from the
/// front of `cards`; cards beyond `rows.total()` are ignored. Fails fast
/// with `ShortCardSupply` when fewer cards than slots are supplied.
///
/// After wiring:
/// - every slot with exactly one parent mirrors it into the empty parent
///   position,
/// - the deepest row is face up, other slots are face up on a
///   `(row + column)` checkerboard.
///
/// ## Example
///
/// ```
/// use duel_draft::cards::{Card, CardId, Color};
/// use duel_draft::pyramid::{build, RowPattern};
///
/// let rows = RowPattern::new(vec![2, 3]).unwrap();
/// let cards = (0..5).map(|i| Card::age(CardId::new(i), "c", Color::Blue));
/// let pyramid = build(cards, &rows).unwrap();
///
/// assert_eq!(pyramid.len(), 5);
/// assert_eq!(pyramid.available_slots().len(), 3);
/// ```
pub fn build(cards: impl IntoIterator<Item = Card>, rows: &RowPattern) -> Result<Pyramid> {
    let needed = rows.total();
    let mut dealt = cards.into_iter();
    let mut slots = Vec::with_capacity(needed);

    for (row, &len) in rows.rows().iter().enumerate() {
        for column in 0..len {
            match dealt.next() {
                Some(card) => slots.push(Slot::new(card, row, column)),
                None => {
                    return Err(DraftError::ShortCardSupply {
                        needed,
                        available: slots.len(),
                    })
                }
            }
        }
    }

    let mut pyramid = Pyramid::from_slots(slots, rows.clone());
    wire(&mut pyramid, rows)?;
    finish(&mut pyramid, rows);

    log::debug!(
        "built {:?} pyramid: {} rows, {} slots, {} available",
        rows.shape(),
        rows.row_count(),
        pyramid.len(),
        pyramid.available_slots().len()
    );

    Ok(pyramid)
}

fn wire(pyramid: &mut Pyramid, rows: &RowPattern) -> Result<()> {
    let mut parent_start = 0;
    for (r, transition) in rows.transitions().iter().enumerate() {
        let parent_len = rows.rows()[r];
        let child_len = rows.rows()[r + 1];
        let child_start = parent_start + parent_len;

        for p in 0..parent_len {
            let parent = SlotId::from(parent_start + p);
            let children = transition.children_of(p, child_len);
            for (index, column) in ChildIndex::BOTH.into_iter().zip(children) {
                if let Some(c) = column {
                    pyramid.set_child(parent, index, SlotId::from(child_start + c))?;
                }
            }
        }

        parent_start = child_start;
    }
    Ok(())
}

fn finish(pyramid: &mut Pyramid, rows: &RowPattern) {
    let last = rows.last_row();
    for slot in pyramid.slots_mut() {
        slot.fill_single_parent();
        let visible = slot.row() == last || (slot.row() + slot.column()) % 2 == 0;
        slot.set_visible(visible);
    }
}
