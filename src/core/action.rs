//! Drafting actions.
//!
//! Every turn the player to move picks one available pyramid slot and
//! decides what to do with its card:
//! - `Build`: add the card to their city
//! - `Sell`: discard it for coins
//! - `UseAsWonder`: tuck it under one of their unbuilt wonders
//!
//! Slots are addressed by their index in the pyramid arena, wonders by
//! their index in the acting player's wonder list.

use serde::{Deserialize, Serialize};

/// What a player does with the drafted card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Construct the card in the player's city.
    Build,
    /// Discard the card for coins.
    Sell,
    /// Spend the card to construct a wonder.
    UseAsWonder,
}

/// A complete drafting action.
///
/// ## Example
///
/// ```
/// use duel_draft::core::{Action, ActionKind};
///
/// let sell = Action::sell(4);
/// assert_eq!(sell.kind, ActionKind::Sell);
/// assert_eq!(sell.wonder, None);
///
/// let wonder = Action::use_as_wonder(4, 1);
/// assert_eq!(wonder.wonder, Some(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The action kind.
    pub kind: ActionKind,

    /// Index of the pyramid slot whose card is taken.
    pub slot: usize,

    /// Index into the acting player's wonders (only for `UseAsWonder`).
    pub wonder: Option<usize>,
}

impl Action {
    /// Build the card held in `slot`.
    #[must_use]
    pub const fn build(slot: usize) -> Self {
        Self {
            kind: ActionKind::Build,
            slot,
            wonder: None,
        }
    }

    /// Sell the card held in `slot`.
    #[must_use]
    pub const fn sell(slot: usize) -> Self {
        Self {
            kind: ActionKind::Sell,
            slot,
            wonder: None,
        }
    }

    /// Use the card held in `slot` to construct wonder `wonder`.
    #[must_use]
    pub const fn use_as_wonder(slot: usize, wonder: usize) -> Self {
        Self {
            kind: ActionKind::UseAsWonder,
            slot,
            wonder: Some(wonder),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.wonder) {
            (ActionKind::Build, _) => write!(f, "build slot {}", self.slot),
            (ActionKind::Sell, _) => write!(f, "sell slot {}", self.slot),
            (ActionKind::UseAsWonder, Some(w)) => {
                write!(f, "wonder {} with slot {}", w, self.slot)
            }
            (ActionKind::UseAsWonder, None) => write!(f, "wonder ? with slot {}", self.slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Action::build(3).kind, ActionKind::Build);
        assert_eq!(Action::build(3).slot, 3);
        assert_eq!(Action::sell(0).kind, ActionKind::Sell);
        assert_eq!(Action::use_as_wonder(2, 1).wonder, Some(1));
    }

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::build(1), Action::build(1));
        assert_ne!(Action::build(1), Action::sell(1));
        assert_ne!(Action::use_as_wonder(1, 0), Action::use_as_wonder(1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::build(5).to_string(), "build slot 5");
        assert_eq!(Action::use_as_wonder(5, 2).to_string(), "wonder 2 with slot 5");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::use_as_wonder(7, 3);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
