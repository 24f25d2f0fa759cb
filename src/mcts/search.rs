//! Core MCTS search algorithm.
//!
//! Each iteration runs the four classic phases over a private tree:
//! 1. Selection: descend by UCB1 while the node is non-terminal, fully
//!    expanded and has children.
//! 2. Expansion: attach a child for the next untried action, in the
//!    state's enumeration order.
//! 3. Simulation: random rollout from the new node's state.
//! 4. Backpropagation: alternate the reward up to the root.
//!
//! The final move is the root child with the most visits.

use std::time::Instant;

use crate::core::{Action, GameRng, PlayerId};
use crate::state::SearchState;

use super::config::MCTSConfig;
use super::node::NodeId;
use super::policy::{RandomRollout, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the configuration, the RNG and the tree of the latest search.
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// Tree of the latest search.
    tree: Option<MCTSTree>,

    /// RNG for simulations.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy>,

    /// Search statistics.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            tree: None,
            rng,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomRollout),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run `config.iterations` iterations from `state` and return the most
    /// visited root action for the player to move.
    ///
    /// Falls back to the first legal action when the root has no children,
    /// and returns `None` when there are no legal actions at all.
    pub fn search(&mut self, state: &SearchState) -> Option<Action> {
        let start = Instant::now();
        self.stats.reset();

        let searching = state.to_move();
        let capacity = self.config.max_nodes.min(self.config.iterations as usize + 1);
        let mut tree = MCTSTree::with_capacity(state.clone(), capacity);

        for _ in 0..self.config.iterations {
            if tree.len() >= self.config.max_nodes {
                log::debug!("node cap {} reached", self.config.max_nodes);
                break;
            }
            self.iteration(&mut tree, searching);
            self.stats.iterations += 1;
        }

        let chosen = tree
            .most_visited_child(tree.root())
            .and_then(|child| tree.get(child).action)
            .or_else(|| state.legal_actions().first().copied());

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "search for {searching}: {} iterations, {} nodes, {} us, chose {}",
            self.stats.iterations,
            tree.len(),
            self.stats.time_us,
            chosen.map_or_else(|| "nothing".to_string(), |a| a.to_string()),
        );

        self.tree = Some(tree);
        chosen
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, tree: &mut MCTSTree, searching: PlayerId) {
        let leaf = self.select(tree);
        let leaf = self.expand(tree, leaf);

        // === SIMULATION ===
        let mut rng = self.rng.fork();
        let node = tree.get(leaf);
        let rollout = self
            .simulation
            .simulate(&node.state, searching, &mut rng, &self.config);
        self.stats.simulations += 1;
        if rollout.heuristic {
            self.stats.heuristic_cutoffs += 1;
        }

        // === BACKPROPAGATION ===
        // Turns alternate every action, so the player who moved into the
        // leaf is the opponent of the player to move there.
        let mover = node.to_move().opponent();
        let reward = if mover == searching {
            rollout.reward
        } else {
            1.0 - rollout.reward
        };
        tree.backpropagate(leaf, reward);
    }

    fn select(&self, tree: &MCTSTree) -> NodeId {
        let mut current = tree.root();
        loop {
            let node = tree.get(current);
            if node.is_terminal() || !node.is_fully_expanded() || node.children.is_empty() {
                return current;
            }
            match self.selection.select(tree, current, &self.config) {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    fn expand(&mut self, tree: &mut MCTSTree, node: NodeId) -> NodeId {
        if tree.get(node).is_terminal() {
            return node;
        }
        match tree.expand(node) {
            Some(child) => {
                self.stats.nodes_expanded += 1;
                self.stats.max_depth = self.stats.max_depth.max(tree.get(child).depth);
                child
            }
            None => node,
        }
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Tree of the latest search, if any.
    #[must_use]
    pub fn tree(&self) -> Option<&MCTSTree> {
        self.tree.as_ref()
    }

    /// Root actions of the latest search with their visit counts.
    #[must_use]
    pub fn action_visits(&self) -> Vec<(Action, u32)> {
        self.tree
            .as_ref()
            .map(MCTSTree::root_action_visits)
            .unwrap_or_default()
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
