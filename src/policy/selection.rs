//! Selection policies for the MCTS algorithm
//!
//! Selection policies determine which child to descend into during the
//! selection phase of MCTS, balancing exploration and exploitation.

use rand::RngCore;

use crate::{config::DEFAULT_EXPLORATION_FACTOR, game_state::GameState, tree::MCTSNode, utils};

/// Trait for policies that select nodes to explore
pub trait SelectionPolicy<S: GameState> {
    /// Selects a child index of a fully expanded node
    ///
    /// Returns `None` only when `node` has no children. Any tie-breaking
    /// randomness comes from `rng`.
    fn select_child(&self, node: &MCTSNode<S>, rng: &mut dyn RngCore) -> Option<usize>;
}

/// Upper Confidence Bound 1 (UCB1) selection policy
///
/// This is the classic tree policy, scoring every child with:
///
/// ```text
/// UCB1 = average_score + exploration_factor * sqrt(2 * ln(parent_visits) / child_visits)
/// ```
///
/// Where:
/// - `average_score` is the child's average from the point of view of the player
///   who moves into it
/// - `exploration_factor` controls the balance between exploration and exploitation
/// - `parent_visits` is the number of visits to the parent node
/// - `child_visits` is the number of visits to the child node
///
/// Unvisited children score infinity, so every child is tried once before
/// averages are compared. Exactly equal scores are broken uniformly at random.
#[derive(Debug, Clone)]
pub struct UCB1Policy {
    /// Exploration factor that controls the balance between exploration and exploitation.
    /// Higher values favor exploration of less-visited nodes.
    pub exploration_factor: f64,
}

impl UCB1Policy {
    /// Creates a new UCB1 policy with the given exploration factor
    pub fn new(exploration_factor: f64) -> Self {
        UCB1Policy { exploration_factor }
    }
}

impl Default for UCB1Policy {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORATION_FACTOR)
    }
}

impl<S: GameState> SelectionPolicy<S> for UCB1Policy {
    fn select_child(&self, node: &MCTSNode<S>, rng: &mut dyn RngCore) -> Option<usize> {
        let parent_visits = node.visits();
        utils::argmax_random_tie(
            node.children
                .iter()
                .map(|child| child.ucb1(self.exploration_factor, parent_visits)),
            rng,
        )
    }
}

// Implement SelectionPolicy for Box<dyn SelectionPolicy>
impl<S: GameState> SelectionPolicy<S> for Box<dyn SelectionPolicy<S>> {
    fn select_child(&self, node: &MCTSNode<S>, rng: &mut dyn RngCore) -> Option<usize> {
        (**self).select_child(node, rng)
    }
}
