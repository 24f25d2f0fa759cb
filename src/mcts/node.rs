//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (NodeId) for efficiency
//! and serializability. Each node owns the search state it stands for.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, PlayerId};
use crate::state::SearchState;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
///
/// `value` is accumulated from the point of view of the player who made
/// `action`, i.e. the player to move at the parent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Search state at this node.
    pub state: SearchState,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// The action that produced this node (None for root).
    pub action: Option<Action>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    /// Sum of rewards backed up through this node.
    pub value: f64,

    /// Expanded children, in expansion order.
    /// SmallVec keeps small branching factors inline.
    pub children: SmallVec<[NodeId; 8]>,

    /// How many of the state's legal actions have been expanded.
    pub next_untried: usize,
}

impl MCTSNode {
    /// Create a new node.
    pub fn new(state: SearchState, parent: NodeId, action: Option<Action>, depth: u16) -> Self {
        Self {
            state,
            parent,
            action,
            depth,
            visits: 0,
            value: 0.0,
            children: SmallVec::new(),
            next_untried: 0,
        }
    }

    /// Create a root node.
    pub fn root(state: SearchState) -> Self {
        Self::new(state, NodeId::NONE, None, 0)
    }

    /// Player to move at this node.
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.state.to_move()
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Mean reward, 0 when unvisited.
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / f64::from(self.visits)
        }
    }

    /// Next legal action not yet expanded, in enumeration order.
    #[must_use]
    pub fn untried_action(&self) -> Option<Action> {
        self.state.legal_actions().get(self.next_untried).copied()
    }

    /// Check if any legal action is still unexpanded.
    #[must_use]
    pub fn has_untried(&self) -> bool {
        self.next_untried < self.state.legal_actions().len()
    }

    /// Check if every legal action has a child.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        !self.has_untried()
    }
}
