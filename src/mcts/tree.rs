//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references for efficiency,
//! cache-friendliness, and serializability. Children are owned through the
//! arena; the parent link is a plain index used only to walk back up.

use serde::{Deserialize, Serialize};

use super::node::{MCTSNode, NodeId};
use crate::core::Action;
use crate::state::SearchState;

/// Arena-based MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSTree {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl MCTSTree {
    /// Create a new tree rooted at `state`.
    pub fn new(state: SearchState) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: SearchState, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub(crate) fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Expand the next untried action of `parent`.
    ///
    /// Clones the parent's state, applies the action and attaches the new
    /// child. Returns `None` when every action already has a child.
    pub fn expand(&mut self, parent: NodeId) -> Option<NodeId> {
        let node = self.get(parent);
        let action = node.untried_action()?;
        let state = node.state.after(&action);
        let depth = node.depth + 1;

        let child = self.alloc(MCTSNode::new(state, parent, Some(action), depth));
        let node = self.get_mut(parent);
        node.children.push(child);
        node.next_untried += 1;
        Some(child)
    }

    /// Back up `reward` from `leaf` to the root.
    ///
    /// `reward` is from the point of view of the player who moved into
    /// `leaf`. Every node on the path gains one visit and the current
    /// reward, which then flips to `1 - reward` for the level above.
    /// Returns the number of nodes updated.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: f64) -> usize {
        let mut current = leaf;
        let mut reward = reward;
        let mut updated = 0;

        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.value += reward;
            reward = 1.0 - reward;
            updated += 1;
            current = node.parent;
        }
        updated
    }

    /// Most-visited child of `id`; the first one wins ties.
    #[must_use]
    pub fn most_visited_child(&self, id: NodeId) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for &child in &self.get(id).children {
            let visits = self.get(child).visits;
            if best.map_or(true, |(_, v)| visits > v) {
                best = Some((child, visits));
            }
        }
        best.map(|(child, _)| child)
    }

    /// Actions and visit counts of the root's children.
    #[must_use]
    pub fn root_action_visits(&self) -> Vec<(Action, u32)> {
        self.root_node()
            .children
            .iter()
            .filter_map(|&c| {
                let child = self.get(c);
                child.action.map(|a| (a, child.visits))
            })
            .collect()
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();
        let internal_nodes = self.nodes.iter().filter(|n| !n.children.is_empty()).count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            total_children,
            internal_nodes,
        }
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Total parent-child links.
    pub total_children: usize,

    /// Nodes with at least one child.
    pub internal_nodes: usize,
}

impl TreeStats {
    /// Average children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.internal_nodes == 0 {
            0.0
        } else {
            self.total_children as f64 / self.internal_nodes as f64
        }
    }
}
