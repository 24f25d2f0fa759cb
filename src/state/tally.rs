//! Per-player tallies carried by the search state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Color, ResourceCounts, ScienceSymbol};
use crate::game::PlayerBoard;

/// A wonder as seen by the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WonderSummary {
    pub victory_points: u8,
    pub shields: u8,
    pub constructed: bool,
}

/// Everything the search tracks about one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub coins: u32,
    pub cards_by_color: [u8; Color::COUNT],
    /// Owned wonders, in the player's wonder order.
    /// SmallVec keeps the usual four wonders inline.
    pub wonders: SmallVec<[WonderSummary; 4]>,
    pub science: [u8; ScienceSymbol::COUNT],
    /// Permanent production from built cards.
    pub production: ResourceCounts,
    pub trading: ResourceCounts,
    pub military_vp: u32,
    pub building_vp: u32,
    pub wonder_vp: u32,
    pub progress_vp: u32,
}

impl PlayerTally {
    /// Project a live board. Military VP depend on the shared track and are
    /// filled in by the caller.
    #[must_use]
    pub fn from_board(board: &PlayerBoard) -> Self {
        Self {
            coins: board.coins,
            cards_by_color: board.color_counts(),
            wonders: board
                .wonders
                .iter()
                .map(|w| WonderSummary {
                    victory_points: w.victory_points(),
                    shields: w.shields(),
                    constructed: w.is_constructed(),
                })
                .collect(),
            science: board.science_histogram(),
            production: board.production(),
            trading: board.trading,
            military_vp: 0,
            building_vp: board.building_vp(),
            wonder_vp: board.wonder_vp(),
            progress_vp: board.progress_vp,
        }
    }

    /// Number of built cards of a color.
    #[inline]
    #[must_use]
    pub fn color_count(&self, color: Color) -> u8 {
        self.cards_by_color[color.index()]
    }

    /// Total built cards.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.cards_by_color.iter().map(|&c| u32::from(c)).sum()
    }

    /// Number of distinct scientific symbol types owned.
    #[must_use]
    pub fn distinct_science(&self) -> usize {
        self.science.iter().filter(|&&c| c > 0).count()
    }

    /// Indices of wonders not yet constructed.
    pub fn unbuilt_wonders(&self) -> impl Iterator<Item = usize> + '_ {
        self.wonders
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.constructed)
            .map(|(i, _)| i)
    }

    /// Number of constructed wonders.
    #[must_use]
    pub fn constructed_wonders(&self) -> usize {
        self.wonders.iter().filter(|w| w.constructed).count()
    }

    /// Sum of all victory-point subtotals.
    #[must_use]
    pub fn total_vp(&self) -> u32 {
        self.military_vp + self.building_vp + self.wonder_vp + self.progress_vp
    }
}
