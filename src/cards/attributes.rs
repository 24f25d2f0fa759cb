//! Card attribute vocabulary: colors, scientific symbols, resources.
//!
//! All three are closed sets, so they are plain enums with a dense `index()`
//! for use as histogram positions. Histograms are fixed-size arrays to keep
//! the search state `Copy`-friendly.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Color category of a drafted card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Raw materials.
    Brown,
    /// Manufactured goods.
    Grey,
    /// Civilian buildings.
    Blue,
    /// Scientific buildings.
    Green,
    /// Commercial buildings.
    Yellow,
    /// Military buildings.
    Red,
    /// Guilds.
    Purple,
}

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 7;

    /// All colors in index order.
    pub const ALL: [Color; Self::COUNT] = [
        Color::Brown,
        Color::Grey,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Red,
        Color::Purple,
    ];

    /// Dense index in `0..COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether victory points printed on cards of this color count toward
    /// the building subtotal.
    #[must_use]
    pub const fn bears_victory_points(self) -> bool {
        matches!(
            self,
            Color::Blue | Color::Green | Color::Yellow | Color::Purple
        )
    }
}

/// Scientific symbol printed on green cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScienceSymbol {
    Globe,
    Wheel,
    Sundial,
    Mortar,
    Compass,
    Tablet,
    Law,
}

impl ScienceSymbol {
    /// Number of distinct symbols.
    pub const COUNT: usize = 7;

    /// All symbols in index order.
    pub const ALL: [ScienceSymbol; Self::COUNT] = [
        ScienceSymbol::Globe,
        ScienceSymbol::Wheel,
        ScienceSymbol::Sundial,
        ScienceSymbol::Mortar,
        ScienceSymbol::Compass,
        ScienceSymbol::Tablet,
        ScienceSymbol::Law,
    ];

    /// Dense index in `0..COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A tradeable resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Wood,
    Clay,
    Stone,
    Glass,
    Papyrus,
}

impl Resource {
    /// Number of resource types.
    pub const COUNT: usize = 5;

    /// All resources in index order.
    pub const ALL: [Resource; Self::COUNT] = [
        Resource::Wood,
        Resource::Clay,
        Resource::Stone,
        Resource::Glass,
        Resource::Papyrus,
    ];

    /// Dense index in `0..COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Resource histogram (production, cost, or trading discounts).
///
/// ```
/// use duel_draft::cards::{Resource, ResourceCounts};
///
/// let mut stock = ResourceCounts::single(Resource::Wood, 2);
/// stock.add(&ResourceCounts::single(Resource::Glass, 1));
///
/// assert_eq!(stock[Resource::Wood], 2);
/// assert_eq!(stock[Resource::Glass], 1);
/// assert_eq!(stock.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceCounts(pub [u8; Resource::COUNT]);

impl ResourceCounts {
    /// No resources.
    pub const EMPTY: ResourceCounts = ResourceCounts([0; Resource::COUNT]);

    /// `amount` units of a single resource.
    #[must_use]
    pub fn single(resource: Resource, amount: u8) -> Self {
        let mut counts = Self::EMPTY;
        counts[resource] = amount;
        counts
    }

    /// Add another histogram into this one (saturating).
    pub fn add(&mut self, other: &ResourceCounts) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            *mine = mine.saturating_add(*theirs);
        }
    }

    /// Total units across all resource types.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| u32::from(c)).sum()
    }

    /// Check if this histogram holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

impl Index<Resource> for ResourceCounts {
    type Output = u8;

    fn index(&self, resource: Resource) -> &Self::Output {
        &self.0[resource.index()]
    }
}

impl IndexMut<Resource> for ResourceCounts {
    fn index_mut(&mut self, resource: Resource) -> &mut Self::Output {
        &mut self.0[resource.index()]
    }
}
