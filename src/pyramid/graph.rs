//! Arena-backed card pyramid.
//!
//! All slots live in one `Vec<Slot>` and refer to each other by `SlotId`.
//! The arena owns every slot, so child handles express the physical
//! "rests on top of" relation without shared ownership, and parent handles
//! can never form an ownership cycle.

use serde::{Deserialize, Serialize};

use super::shape::{PyramidShape, RowPattern};
use super::slot::{ChildIndex, Slot, SlotId};
use crate::cards::Card;
use crate::error::{DraftError, Result};

/// The drafting pyramid of one era.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pyramid {
    slots: Vec<Slot>,
    pattern: RowPattern,
}

impl Pyramid {
    /// Wrap already-allocated slots. Wiring is the builder's job.
    pub(crate) fn from_slots(slots: Vec<Slot>, pattern: RowPattern) -> Self {
        Self { slots, pattern }
    }

    /// Number of slots (taken or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the pyramid has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The row pattern this pyramid was built from.
    #[must_use]
    pub fn pattern(&self) -> &RowPattern {
        &self.pattern
    }

    /// Topology of this pyramid.
    #[must_use]
    pub fn shape(&self) -> PyramidShape {
        self.pattern.shape()
    }

    /// Get a slot by ID.
    ///
    /// Panics if `id` is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, id: SlotId) -> &Slot {
        &self.slots[id.index()]
    }

    /// Get a slot by ID, or `None` if out of range.
    #[must_use]
    pub fn try_get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.index())
    }

    /// The card held by a slot.
    #[must_use]
    pub fn card(&self, id: SlotId) -> Option<&Card> {
        self.try_get(id).and_then(Slot::card)
    }

    /// Arena ID of the slot at `(row, column)`.
    #[must_use]
    pub fn slot_at(&self, row: usize, column: usize) -> Option<SlotId> {
        let rows = self.pattern.rows();
        if row >= rows.len() || column >= rows[row] {
            return None;
        }
        let start: usize = rows[..row].iter().sum();
        Some(SlotId::from(start + column))
    }

    /// `(row, column)` of a slot.
    #[must_use]
    pub fn position(&self, id: SlotId) -> (usize, usize) {
        let slot = self.get(id);
        (slot.row(), slot.column())
    }

    /// Whether a slot's card may be drafted now.
    ///
    /// True when the slot still holds its card and no child holds one.
    /// Parents play no part.
    #[must_use]
    pub fn is_available(&self, id: SlotId) -> bool {
        let Some(slot) = self.try_get(id) else {
            return false;
        };
        slot.has_card() && slot.children().all(|c| !self.get(c).has_card())
    }

    /// Whether a slot was dealt face up.
    #[must_use]
    pub fn is_visible(&self, id: SlotId) -> bool {
        self.try_get(id).is_some_and(Slot::is_visible)
    }

    /// All currently available slots, in arena order.
    #[must_use]
    pub fn available_slots(&self) -> Vec<SlotId> {
        self.ids().filter(|&id| self.is_available(id)).collect()
    }

    /// Remove and return a slot's card. `None` if out of range or taken.
    ///
    /// This does not check availability: the match layer decides whether
    /// a draft is legal.
    pub fn take_card(&mut self, id: SlotId) -> Option<Card> {
        self.slots.get_mut(id.index()).and_then(Slot::take_card)
    }

    /// Take the card of an available slot.
    pub fn draft(&mut self, id: SlotId) -> Result<Card> {
        if id.index() >= self.slots.len() {
            return Err(DraftError::SlotOutOfRange {
                slot: id.index(),
                len: self.slots.len(),
            });
        }
        if !self.is_available(id) {
            return Err(DraftError::SlotUnavailable { slot: id.index() });
        }
        self.take_card(id)
            .ok_or(DraftError::SlotUnavailable { slot: id.index() })
    }

    /// Assign `child` at `index` of `parent` and register `parent` on it.
    ///
    /// An already-assigned child is replaced and loses its back-reference
    /// to `parent`. Fails with `SlotOutOfRange` for a handle outside the
    /// arena and `SelfLink` when `parent == child`.
    pub fn set_child(&mut self, parent: SlotId, index: ChildIndex, child: SlotId) -> Result<()> {
        for id in [parent, child] {
            if id.index() >= self.slots.len() {
                return Err(DraftError::SlotOutOfRange {
                    slot: id.index(),
                    len: self.slots.len(),
                });
            }
        }
        if parent == child {
            return Err(DraftError::SelfLink { slot: parent.index() });
        }

        let previous = self.slots[parent.index()].replace_child(index, child);
        if let Some(old) = previous.filter(|&old| old != child) {
            self.slots[old.index()].remove_parent(parent);
        }
        self.slots[child.index()].add_parent(parent);
        Ok(())
    }

    /// Number of slots still holding a card.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|s| s.has_card()).count()
    }

    /// Check if every card has been drafted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(|s| !s.has_card())
    }

    /// Iterate over all slot IDs.
    pub fn ids(&self) -> impl Iterator<Item = SlotId> {
        (0..self.slots.len()).map(SlotId::from)
    }

    /// Iterate over `(SlotId, &Slot)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Slot)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (SlotId::from(i), s))
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    /// Encode the pyramid (cards, wiring, visibility) with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a pyramid written by `to_bytes`.
    ///
    /// The decoded arena is checked against its row pattern before it is
    /// returned; inconsistent data is `CorruptSnapshot`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pyramid: Self = bincode::deserialize(bytes)?;
        pyramid.validate()?;
        Ok(pyramid)
    }

    fn validate(&self) -> Result<()> {
        let len = self.slots.len();
        if len != self.pattern.total() {
            return Err(DraftError::CorruptSnapshot(format!(
                "{len} slots for a {}-slot pattern",
                self.pattern.total()
            )));
        }

        for (id, slot) in self.iter() {
            if self.slot_at(slot.row(), slot.column()) != Some(id) {
                return Err(DraftError::CorruptSnapshot(format!(
                    "slot {} claims position ({}, {})",
                    id.index(),
                    slot.row(),
                    slot.column()
                )));
            }
            let links = slot.children().chain(slot.parents().into_iter().flatten());
            for link in links {
                if link.index() >= len || link == id {
                    return Err(DraftError::CorruptSnapshot(format!(
                        "slot {} links to slot {}",
                        id.index(),
                        link.index()
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Pyramid {
    /// One line per row; `*` marks available slots, `?` face-down cards,
    /// `--` taken slots.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widest = self.pattern.rows().iter().copied().max().unwrap_or(0);
        for (row, &len) in self.pattern.rows().iter().enumerate() {
            write!(f, "{:width$}", "", width = (widest - len) * 3)?;
            for column in 0..len {
                let Some(id) = self.slot_at(row, column) else {
                    continue;
                };
                let slot = self.get(id);
                let mark = if !slot.has_card() {
                    "--".to_string()
                } else if self.is_available(id) {
                    format!("{:>2}*", id.0)
                } else if slot.is_visible() {
                    format!("{:>2}", id.0)
                } else {
                    " ?".to_string()
                };
                write!(f, "[{:<3}]", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
