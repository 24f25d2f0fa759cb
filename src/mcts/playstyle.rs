//! Named heuristic-weight profiles for rollout scoring.
//!
//! A playstyle only matters when a rollout stops before the match is
//! decided: the two players' tallies are then compared through a linear
//! score weighted by the profile.

use serde::{Deserialize, Serialize};

use crate::cards::Color;
use crate::error::{DraftError, Result};

/// Heuristic weights used by rollout scoring.
///
/// ## Example
///
/// ```
/// use duel_draft::mcts::Playstyle;
///
/// let military = Playstyle::named("military").unwrap();
/// assert!(military.military > Playstyle::balanced().military);
/// assert!(Playstyle::named("pacifist").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playstyle {
    /// Profile name.
    pub name: String,

    /// Value of one coin.
    pub coin: f64,

    /// Value of one victory point (all subtotals).
    pub victory_point: f64,

    /// Bonus per built card, indexed by `Color::index()`.
    pub colors: [f64; Color::COUNT],

    /// Value per conflict-track step toward the player's end.
    pub military: f64,

    /// Value per distinct scientific symbol type.
    pub science: f64,
}

impl Playstyle {
    /// Names accepted by `Playstyle::named`.
    pub const NAMES: [&'static str; 5] = ["balanced", "military", "science", "economy", "civilian"];

    /// Look up a profile by name.
    pub fn named(name: &str) -> Result<Self> {
        match name {
            "balanced" => Ok(Self::balanced()),
            "military" => Ok(Self::military()),
            "science" => Ok(Self::science()),
            "economy" => Ok(Self::economy()),
            "civilian" => Ok(Self::civilian()),
            other => Err(DraftError::UnknownPlaystyle(other.to_string())),
        }
    }

    /// Even weights across all victory paths.
    #[must_use]
    pub fn balanced() -> Self {
        Self {
            name: "balanced".to_string(),
            coin: 0.33,
            victory_point: 1.0,
            colors: [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
            military: 0.75,
            science: 1.0,
        }
    }

    /// Push the conflict track.
    #[must_use]
    pub fn military() -> Self {
        Self {
            name: "military".to_string(),
            colors: [0.5, 0.5, 0.25, 0.25, 0.25, 1.5, 0.5],
            military: 2.0,
            science: 0.5,
            ..Self::balanced()
        }
    }

    /// Collect distinct scientific symbols.
    #[must_use]
    pub fn science() -> Self {
        Self {
            name: "science".to_string(),
            colors: [0.25, 0.25, 0.25, 1.5, 0.25, 0.25, 0.5],
            military: 0.5,
            science: 2.5,
            ..Self::balanced()
        }
    }

    /// Hoard coins and commercial buildings.
    #[must_use]
    pub fn economy() -> Self {
        Self {
            name: "economy".to_string(),
            coin: 0.75,
            colors: [1.0, 1.0, 0.25, 0.25, 1.5, 0.25, 0.5],
            ..Self::balanced()
        }
    }

    /// Maximize victory points from civilian buildings and wonders.
    #[must_use]
    pub fn civilian() -> Self {
        Self {
            name: "civilian".to_string(),
            victory_point: 1.5,
            colors: [0.25, 0.25, 1.5, 0.25, 0.25, 0.25, 1.0],
            military: 0.5,
            science: 0.5,
            ..Self::balanced()
        }
    }

    /// Bonus for one built card of `color`.
    #[inline]
    #[must_use]
    pub fn color_weight(&self, color: Color) -> f64 {
        self.colors[color.index()]
    }
}

impl Default for Playstyle {
    fn default() -> Self {
        Self::balanced()
    }
}

impl std::str::FromStr for Playstyle {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::named(s)
    }
}
