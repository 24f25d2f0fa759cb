//! Monte Carlo Tree Search over `SearchState`s.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes live in one `Vec` and refer to each other by
//!   `NodeId`; each node owns a clone of its search state
//! - **UCB1 selection**, expansion in legal-action order, uniform random
//!   rollouts, alternating backpropagation
//! - **Robust child**: the final move is the most-visited root child
//! - **Playstyles**: rollouts cut short are scored by a weighted heuristic
//! - **Deterministic**: the same seed, state and config give the same move
//!
//! ## Usage
//!
//! ```rust
//! use duel_draft::cards::sample::{sample_pool, sample_wonders};
//! use duel_draft::core::PlayerPair;
//! use duel_draft::game::DraftMatch;
//! use duel_draft::mcts::{MCTSConfig, MCTSSearch, Playstyle};
//!
//! let game = DraftMatch::new(sample_pool(), PlayerPair::new(sample_wonders), 3).unwrap();
//!
//! let config = MCTSConfig::default()
//!     .with_iterations(200)
//!     .with_playstyle(Playstyle::science());
//! let mut search = MCTSSearch::new(config);
//!
//! let action = search.search(&game.snapshot()).unwrap();
//! assert!(game.legal_actions().contains(&action));
//!
//! for (action, visits) in search.action_visits() {
//!     println!("{action}: {visits}");
//! }
//! ```

pub mod config;
pub mod node;
pub mod playstyle;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use playstyle::Playstyle;
pub use policy::{
    heuristic_reward, heuristic_score, ucb1_score, RandomRollout, Rollout, SelectionPolicy,
    SimulationPolicy, UCB1,
};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
