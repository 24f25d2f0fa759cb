//! Card definitions.
//!
//! A `Card` is immutable gameplay data plus a closed `CardKind` tag. The
//! kind carries only the fields that kind needs: age cards have a color,
//! production, shields and an optional scientific symbol; guilds only score;
//! wonders score, may carry shields, and remember whether they have been
//! constructed.
//!
//! The pyramid and the search engine never look past the small read
//! projection (`color`, `victory_points`, `shields`, `science_symbol`,
//! `is_wonder`, `is_constructed`).

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Resource, ResourceCounts, ScienceSymbol};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Price printed on a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Coins paid to the bank.
    pub coins: u8,
    /// Resources required.
    pub resources: ResourceCounts,
}

/// Kind-specific card data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// A regular age card.
    Age {
        color: Color,
        production: ResourceCounts,
        victory_points: u8,
        shields: u8,
        science: Option<ScienceSymbol>,
    },
    /// A guild (purple) card, drafted in the last era.
    Guild { victory_points: u8 },
    /// A wonder owned by a player, built by spending a drafted card.
    Wonder {
        victory_points: u8,
        shields: u8,
        constructed: bool,
    },
}

/// A game card.
///
/// ## Example
///
/// ```
/// use duel_draft::cards::{Card, CardId, Color, ScienceSymbol};
///
/// let lab = Card::age(CardId::new(12), "Laboratory", Color::Green)
///     .with_victory_points(1)
///     .with_science(ScienceSymbol::Wheel);
///
/// assert_eq!(lab.color(), Some(Color::Green));
/// assert_eq!(lab.science_symbol(), Some(ScienceSymbol::Wheel));
/// assert!(!lab.is_wonder());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Construction cost.
    pub cost: Cost,

    /// Kind tag with kind-specific data.
    pub kind: CardKind,
}

impl Card {
    /// Create an age card of the given color with no effects.
    #[must_use]
    pub fn age(id: CardId, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            cost: Cost::default(),
            kind: CardKind::Age {
                color,
                production: ResourceCounts::EMPTY,
                victory_points: 0,
                shields: 0,
                science: None,
            },
        }
    }

    /// Create a guild card.
    #[must_use]
    pub fn guild(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cost: Cost::default(),
            kind: CardKind::Guild { victory_points: 0 },
        }
    }

    /// Create an unconstructed wonder.
    #[must_use]
    pub fn wonder(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cost: Cost::default(),
            kind: CardKind::Wonder {
                victory_points: 0,
                shields: 0,
                constructed: false,
            },
        }
    }

    /// Set the victory points (builder pattern).
    #[must_use]
    pub fn with_victory_points(mut self, points: u8) -> Self {
        match &mut self.kind {
            CardKind::Age { victory_points, .. }
            | CardKind::Guild { victory_points }
            | CardKind::Wonder { victory_points, .. } => *victory_points = points,
        }
        self
    }

    /// Set the shields. Guilds carry none, so this is a no-op for them.
    #[must_use]
    pub fn with_shields(mut self, amount: u8) -> Self {
        match &mut self.kind {
            CardKind::Age { shields, .. } | CardKind::Wonder { shields, .. } => *shields = amount,
            CardKind::Guild { .. } => {}
        }
        self
    }

    /// Set the scientific symbol. Only age cards carry one.
    #[must_use]
    pub fn with_science(mut self, symbol: ScienceSymbol) -> Self {
        if let CardKind::Age { science, .. } = &mut self.kind {
            *science = Some(symbol);
        }
        self
    }

    /// Add produced resources. Only age cards produce.
    #[must_use]
    pub fn with_production(mut self, resource: Resource, amount: u8) -> Self {
        if let CardKind::Age { production, .. } = &mut self.kind {
            production[resource] = production[resource].saturating_add(amount);
        }
        self
    }

    /// Set the construction cost.
    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    /// Color category. Wonders have none; guilds are purple.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self.kind {
            CardKind::Age { color, .. } => Some(color),
            CardKind::Guild { .. } => Some(Color::Purple),
            CardKind::Wonder { .. } => None,
        }
    }

    /// Printed victory points.
    #[must_use]
    pub fn victory_points(&self) -> u8 {
        match self.kind {
            CardKind::Age { victory_points, .. }
            | CardKind::Guild { victory_points }
            | CardKind::Wonder { victory_points, .. } => victory_points,
        }
    }

    /// Military shields.
    #[must_use]
    pub fn shields(&self) -> u8 {
        match self.kind {
            CardKind::Age { shields, .. } | CardKind::Wonder { shields, .. } => shields,
            CardKind::Guild { .. } => 0,
        }
    }

    /// Scientific symbol, if any.
    #[must_use]
    pub fn science_symbol(&self) -> Option<ScienceSymbol> {
        match self.kind {
            CardKind::Age { science, .. } => science,
            _ => None,
        }
    }

    /// Produced resources.
    #[must_use]
    pub fn production(&self) -> ResourceCounts {
        match self.kind {
            CardKind::Age { production, .. } => production,
            _ => ResourceCounts::EMPTY,
        }
    }

    /// Check if this card is a wonder.
    #[must_use]
    pub fn is_wonder(&self) -> bool {
        matches!(self.kind, CardKind::Wonder { .. })
    }

    /// Check if this card is a constructed wonder.
    #[must_use]
    pub fn is_constructed(&self) -> bool {
        matches!(self.kind, CardKind::Wonder { constructed: true, .. })
    }

    /// Mark a wonder as constructed.
    ///
    /// Returns `false` (and changes nothing) if this card is not a wonder or
    /// is already constructed.
    pub fn mark_constructed(&mut self) -> bool {
        match &mut self.kind {
            CardKind::Wonder { constructed, .. } if !*constructed => {
                *constructed = true;
                true
            }
            _ => false,
        }
    }
}
