//! # duel-draft
//!
//! Card-pyramid drafting for a two-player duel, with a Monte Carlo Tree
//! Search opponent.
//!
//! ## Design Principles
//!
//! 1. **Availability is structural**: a card may be drafted once every card
//!    resting on it has been taken. Nothing else gates a draft.
//!
//! 2. **The live match and the search never share state**: the search reads
//!    a `SearchState` projected from the live pyramid and boards once per
//!    turn and clones it freely.
//!
//! 3. **Explicit ownership**: the pyramid is an arena of slots addressed by
//!    index. Parent links are plain handles and carry no ownership.
//!
//! ## Architecture
//!
//! - **Persistent board in the search state**: O(1) cloning via `im-rs`.
//! - **Arena MCTS**: UCB1 selection, random rollouts, robust-child choice.
//! - **Deterministic**: every random draw goes through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: players, actions, the conflict track, RNG
//! - `cards`: card definitions, attributes, era pools, sample decks
//! - `pyramid`: slots, row patterns, the graph builder, the live pyramid
//! - `state`: the search state and its transition function
//! - `game`: player boards and the live three-era match
//! - `mcts`: Monte Carlo Tree Search
//! - `error`: crate error type
//! - `logging`: logger setup for binaries

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod logging;
pub mod mcts;
pub mod pyramid;
pub mod state;

// Re-export commonly used types
pub use crate::core::{Action, ActionKind, ConflictTrack, GameRng, PlayerId, PlayerPair};

pub use crate::cards::{Card, CardId, CardKind, CardPool, Color, Era, ScienceSymbol};

pub use crate::pyramid::{build, Pyramid, PyramidShape, RowPattern, Slot, SlotId};

pub use crate::state::{PlayerTally, SearchState, Winner};

pub use crate::game::{DraftMatch, MatchMeta, PlayerBoard};

pub use crate::mcts::{MCTSConfig, MCTSSearch, Playstyle, SearchStats};

pub use crate::error::{DraftError, Result};
