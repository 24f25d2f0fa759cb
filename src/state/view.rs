//! Compact, `Copy` projections of cards and pyramid slots.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, ResourceCounts, ScienceSymbol};
use crate::pyramid::Slot;

/// The part of a card the search engine reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub color: Option<Color>,
    pub victory_points: u8,
    pub shields: u8,
    pub science: Option<ScienceSymbol>,
    pub production: ResourceCounts,
}

impl CardView {
    /// A card of `color` with no effects.
    #[must_use]
    pub fn plain(color: Color) -> Self {
        Self {
            color: Some(color),
            victory_points: 0,
            shields: 0,
            science: None,
            production: ResourceCounts::EMPTY,
        }
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            color: card.color(),
            victory_points: card.victory_points(),
            shields: card.shields(),
            science: card.science_symbol(),
            production: card.production(),
        }
    }
}

/// One pyramid slot as seen by the search: its card and child indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotView {
    pub card: Option<CardView>,
    pub children: [Option<u16>; 2],
}

impl From<&Slot> for SlotView {
    fn from(slot: &Slot) -> Self {
        let mut children = [None; 2];
        for (entry, child) in children.iter_mut().zip(slot.children()) {
            *entry = Some(child.0 as u16);
        }
        Self {
            card: slot.card().map(CardView::from),
            children,
        }
    }
}
