//! The card pyramid: a dependency graph with availability gating.
//!
//! ## Overview
//!
//! Each era deals its cards into a pyramid of rows. A card may be drafted
//! only once the cards resting on it (its children, in the row below) have
//! been taken:
//!
//! ```text
//! available(slot) = slot has a card && no child has a card
//! ```
//!
//! The deepest row starts out available; drafting from the bottom
//! gradually exposes the rows above.
//!
//! ## Usage
//!
//! ```rust
//! use duel_draft::cards::{sample::sample_pool, Era};
//! use duel_draft::core::GameRng;
//! use duel_draft::pyramid::{build, RowPattern};
//!
//! let pool = sample_pool();
//! let mut rng = GameRng::new(7);
//! let mut pyramid = build(pool.deal(Era::First, &mut rng), &RowPattern::for_era(Era::First)).unwrap();
//!
//! while let Some(&slot) = pyramid.available_slots().first() {
//!     let card = pyramid.draft(slot).unwrap();
//!     println!("drafted {}", card.name);
//! }
//! assert!(pyramid.is_exhausted());
//! ```

pub mod builder;
pub mod graph;
pub mod shape;
pub mod slot;

pub use builder::build;
pub use graph::Pyramid;
pub use shape::{PyramidShape, RowPattern, Transition};
pub use slot::{ChildIndex, Slot, SlotId};
