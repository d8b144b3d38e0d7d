//! Backpropagation policies for the MCTS algorithm
//!
//! Backpropagation policies determine how to update node statistics
//! after a simulation.

use crate::{
    game_state::{GameState, Scores},
    tree::MCTSNode,
};

/// Trait for policies that backpropagate simulation results
pub trait BackpropagationPolicy<S: GameState> {
    /// Updates statistics for a node based on a simulation result
    fn update_stats(&self, node: &mut MCTSNode<S>, scores: Scores);
}

/// Standard backpropagation policy
///
/// Increments the visit count and adds both players' rewards to the node's
/// cumulative scores, whoever is to move there. Perspective is only applied
/// when the statistics are read.
#[derive(Debug, Clone)]
pub struct StandardPolicy;

impl StandardPolicy {
    /// Creates a new standard policy
    pub fn new() -> Self {
        StandardPolicy
    }
}

impl Default for StandardPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> BackpropagationPolicy<S> for StandardPolicy {
    fn update_stats(&self, node: &mut MCTSNode<S>, scores: Scores) {
        node.record(scores);
    }
}

// Implement BackpropagationPolicy for Box<dyn BackpropagationPolicy>
impl<S: GameState> BackpropagationPolicy<S> for Box<dyn BackpropagationPolicy<S>> {
    fn update_stats(&self, node: &mut MCTSNode<S>, scores: Scores) {
        (**self).update_stats(node, scores)
    }
}
