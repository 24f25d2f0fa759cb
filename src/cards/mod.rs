//! Cards: definitions, attribute vocabulary and per-era pools.
//!
//! Cards are a tagged variant (`CardKind`) rather than a type hierarchy:
//! callers ask a card for its kind-level projection (`color`,
//! `victory_points`, `shields`, `science_symbol`, `is_wonder`) instead of
//! testing its concrete type.

pub mod attributes;
pub mod definition;
pub mod pool;
pub mod sample;

pub use attributes::{Color, Resource, ResourceCounts, ScienceSymbol};
pub use definition::{Card, CardId, CardKind, Cost};
pub use pool::{CardPool, Era};
