//! Pyramid slot (graph node) and its arena handle.
//!
//! A slot holds at most one card, up to two child handles and up to two
//! parent handles. Children are the cards resting on top of this one in the
//! physical pyramid: the slot can be drafted only once every child is
//! empty. Parents are bookkeeping only (traversal, display, snapshots) and
//! never take part in availability.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Index into the `Pyramid` slot arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for SlotId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Which of the two child positions to assign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChildIndex {
    First,
    Second,
}

impl ChildIndex {
    /// Both positions in order.
    pub const BOTH: [ChildIndex; 2] = [ChildIndex::First, ChildIndex::Second];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ChildIndex::First => 0,
            ChildIndex::Second => 1,
        }
    }
}

/// One position in the card pyramid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    card: Option<Card>,
    children: [Option<SlotId>; 2],
    parents: [Option<SlotId>; 2],
    row: u16,
    column: u16,
    visible: bool,
}

impl Slot {
    /// Create a face-down slot holding `card` at the given position.
    #[must_use]
    pub fn new(card: Card, row: usize, column: usize) -> Self {
        Self {
            card: Some(card),
            children: [None; 2],
            parents: [None; 2],
            row: row as u16,
            column: column as u16,
            visible: false,
        }
    }

    /// The held card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// Check if the slot still holds its card.
    #[inline]
    #[must_use]
    pub fn has_card(&self) -> bool {
        self.card.is_some()
    }

    /// Remove and return the held card.
    ///
    /// Returns `None` once the card has been taken.
    pub fn take_card(&mut self) -> Option<Card> {
        self.card.take()
    }

    /// Child handle at `index`.
    #[must_use]
    pub fn child(&self, index: ChildIndex) -> Option<SlotId> {
        self.children[index.index()]
    }

    /// Existing child handles.
    pub fn children(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.children.iter().flatten().copied()
    }

    /// Raw parent handles (both entries equal when the slot has one parent).
    #[must_use]
    pub fn parents(&self) -> [Option<SlotId>; 2] {
        self.parents
    }

    /// Pyramid row (0 = top).
    #[must_use]
    pub fn row(&self) -> usize {
        usize::from(self.row)
    }

    /// Column within the row (0 = left).
    #[must_use]
    pub fn column(&self) -> usize {
        usize::from(self.column)
    }

    /// Whether the card was dealt face up.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn replace_child(&mut self, index: ChildIndex, child: SlotId) -> Option<SlotId> {
        self.children[index.index()].replace(child)
    }

    pub(crate) fn add_parent(&mut self, parent: SlotId) {
        if self.parents.contains(&Some(parent)) {
            return;
        }
        match self.parents.iter_mut().find(|p| p.is_none()) {
            Some(free) => *free = Some(parent),
            None => self.parents[1] = Some(parent),
        }
    }

    pub(crate) fn remove_parent(&mut self, parent: SlotId) {
        for p in self.parents.iter_mut() {
            if *p == Some(parent) {
                *p = None;
            }
        }
    }

    /// Mirror a lone parent into the empty position.
    pub(crate) fn fill_single_parent(&mut self) {
        match self.parents {
            [Some(p), None] => self.parents[1] = Some(p),
            [None, Some(p)] => self.parents[0] = Some(p),
            _ => {}
        }
    }
}
