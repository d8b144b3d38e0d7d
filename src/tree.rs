//! Tree data structures for Monte Carlo Tree Search
//!
//! This module defines the tree representation used in MCTS: nodes that own
//! their children, and paths through the tree.
//!
//! Nodes hold no pointer to their parent. The search records the root-to-leaf
//! [`NodePath`] while descending and walks it again to backpropagate, which
//! gives every update the parent link it needs without shared ownership.

use std::fmt;

use log::trace;
use rand::{seq::SliceRandom, RngCore};

use crate::game_state::{GameState, Player, Scores};
use crate::utils;

/// Represents a node in the MCTS tree
///
/// Each node contains the game state, the action that led to it,
/// statistics about visits and rewards, and the child nodes expanded so far.
/// The tree is built incrementally during the search process.
pub struct MCTSNode<S: GameState> {
    /// The game state at this node
    pub state: S,

    /// The action that led to this state (None for root)
    pub action: Option<S::Action>,

    /// Number of completed simulations whose path passed through this node
    pub visits: f64,

    /// Cumulative reward of each player over those simulations
    pub scores: Scores,

    /// Children nodes, one per consumed action, in expansion order
    pub children: Vec<MCTSNode<S>>,

    /// Actions that have not yet been expanded into child nodes
    ///
    /// Shuffled once when the node is created and consumed from the end.
    pub unexpanded_actions: Vec<S::Action>,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,
}

impl<S: GameState> MCTSNode<S> {
    /// Creates a new node with the given state and action
    ///
    /// The legal actions of `state` are captured here and put in a random
    /// expansion order drawn from `rng`.
    pub fn new(state: S, action: Option<S::Action>, depth: usize, rng: &mut dyn RngCore) -> Self {
        let mut unexpanded_actions = state.get_legal_actions();
        unexpanded_actions.shuffle(rng);

        MCTSNode {
            state,
            action,
            visits: 0.0,
            scores: [0.0; 2],
            children: Vec::new(),
            unexpanded_actions,
            depth,
        }
    }

    /// Returns the number of visits to this node
    pub fn visits(&self) -> f64 {
        self.visits
    }

    /// Player to move from this node's state
    pub fn player_to_move(&self) -> Player {
        self.state.current_player()
    }

    /// Average score seen by the player who moved into this node
    ///
    /// That is the opponent of the player to move here, since the node is
    /// judged by whoever chose it. Returns 0.0 for an unvisited node.
    pub fn average_score(&self) -> f64 {
        let mover = self.player_to_move().opponent();
        utils::average_score(self.scores[mover.index()], self.visits)
    }

    /// UCB1 value of this node given its parent's visit count
    ///
    /// Infinite for an unvisited node.
    pub fn ucb1(&self, exploration_factor: f64, parent_visits: f64) -> f64 {
        utils::ucb1_value(
            self.average_score(),
            self.visits,
            parent_visits,
            exploration_factor,
        )
    }

    /// Counts one more simulation through this node
    pub fn record(&mut self, scores: Scores) {
        self.visits += 1.0;
        self.scores[0] += scores[0];
        self.scores[1] += scores[1];
    }

    /// Returns true if this node is fully expanded
    pub fn is_fully_expanded(&self) -> bool {
        self.unexpanded_actions.is_empty()
    }

    /// Returns true if this node is a leaf (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of legal actions captured when the node was created
    pub fn legal_action_count(&self) -> usize {
        self.children.len() + self.unexpanded_actions.len()
    }

    /// Number of nodes in the subtree rooted here, this node included
    pub fn tree_size(&self) -> usize {
        1 + self.children.iter().map(MCTSNode::tree_size).sum::<usize>()
    }

    /// Expands the node by creating a child for the next unexpanded action
    ///
    /// Pops the last action of the shuffled list, applies it to this node's
    /// state and appends the resulting child.
    ///
    /// # Returns
    ///
    /// * `Some(index)` - Index of the new child in `children`
    /// * `None` - If every action has already been expanded
    pub fn expand(&mut self, rng: &mut dyn RngCore) -> Option<usize> {
        let action = self.unexpanded_actions.pop()?;
        let next_state = self.state.apply_action(&action);
        trace!("expanding action {} at depth {}", action, self.depth);

        let child = MCTSNode::new(next_state, Some(action), self.depth + 1, rng);
        self.children.push(child);
        Some(self.children.len() - 1)
    }

    /// Follows `path` down from this node
    ///
    /// Returns `None` if the path leaves the tree.
    pub fn descendant(&self, path: &NodePath) -> Option<&MCTSNode<S>> {
        let mut node = self;
        for &index in &path.indices {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    /// The child reached through `action`, if it has been expanded
    pub fn child_for(&self, action: &S::Action) -> Option<&MCTSNode<S>> {
        self.children
            .iter()
            .find(|child| child.action.as_ref() == Some(action))
    }
}

impl<S: GameState> fmt::Debug for MCTSNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MCTSNode")
            .field("action", &self.action)
            .field("visits", &self.visits)
            .field("scores", &self.scores)
            .field("children", &self.children.len())
            .field("unexpanded", &self.unexpanded_actions.len())
            .field("depth", &self.depth)
            .finish()
    }
}

/// Represents a path through the MCTS tree
///
/// A path is a sequence of indices that can be used to navigate from
/// the root node to a specific node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    /// Indices of children to follow from the root
    pub indices: Vec<usize>,
}

impl NodePath {
    /// Creates a new empty path (pointing to the root)
    pub fn new() -> Self {
        NodePath {
            indices: Vec::new(),
        }
    }

    /// Creates a path with the given indices
    pub fn from_indices(indices: Vec<usize>) -> Self {
        NodePath { indices }
    }

    /// Extends the path with a new index
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Returns the length of the path
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the path is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Default for NodePath {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[")?;
        for (i, idx) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "]")
    }
}
