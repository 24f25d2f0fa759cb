//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

use super::playstyle::Playstyle;

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Iterations per search.
    pub iterations: u32,

    /// Maximum random moves per rollout (0 = unlimited).
    /// A rollout cut short is scored with the playstyle heuristic.
    pub max_rollout_depth: u32,

    /// Maximum nodes to allocate in the tree.
    /// The search stops early once the arena is full.
    pub max_nodes: usize,

    /// Random seed for rollout RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Heuristic weights for rollouts that end undecided.
    pub playstyle: Playstyle,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            iterations: 1000,
            max_rollout_depth: 0,
            max_nodes: 100_000,
            seed: 42,
            playstyle: Playstyle::balanced(),
        }
    }
}

impl MCTSConfig {
    /// Set the exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the iteration budget.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the rollout depth cap.
    #[must_use]
    pub fn with_max_rollout_depth(mut self, depth: u32) -> Self {
        self.max_rollout_depth = depth;
        self
    }

    /// Set the node cap.
    #[must_use]
    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Set the rollout heuristic profile.
    #[must_use]
    pub fn with_playstyle(mut self, playstyle: Playstyle) -> Self {
        self.playstyle = playstyle;
        self
    }
}
