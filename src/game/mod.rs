//! Live match plumbing.
//!
//! The match layer owns the real pyramid and player boards and is the only
//! code that mutates them. The search engine sees a match only through
//! `DraftMatch::snapshot` (or `SearchState::project`).

pub mod board;
pub mod draft;
pub mod meta;

pub use board::{PlayerBoard, SELL_BASE, STARTING_COINS};
pub use draft::{DraftMatch, COINS_PER_VP};
pub use meta::MatchMeta;
