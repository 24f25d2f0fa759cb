//! Core engine types: players, actions, the conflict track, RNG.
//!
//! These are shared by the live pyramid, the search state and the MCTS
//! engine.

pub mod action;
pub mod conflict;
pub mod player;
pub mod rng;

pub use action::{Action, ActionKind};
pub use conflict::ConflictTrack;
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
