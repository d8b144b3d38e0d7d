//! # duel-mcts
//!
//! A Monte Carlo Tree Search (MCTS) engine for two-player, perfect-information,
//! turn-based games whose outcomes are scored per player.
//!
//! Any game that can list its legal actions, apply an action to produce a new
//! state, and score its terminal positions can be searched without changes to the
//! engine.
//!
//! ## Features
//!
//! - Generic over the game through the [`GameState`] trait
//! - UCB1 tree policy with random tie-breaking
//! - Uniform random rollouts, or a game-supplied rollout
//! - Cumulative searches on one tree
//! - Bit-for-bit reproducible runs from a single seeded random source
//!
//! ## Basic Usage
//!
//! ```
//! use duel_mcts::{GameState, Player, Scores, SearchConfig, MCTS, winner_scores};
//!
//! // Players take one or two tokens; whoever takes the last one wins.
//! #[derive(Clone)]
//! struct LastToken {
//!     tokens: u8,
//!     to_move: Player,
//! }
//!
//! impl GameState for LastToken {
//!     type Action = u8;
//!
//!     fn get_legal_actions(&self) -> Vec<u8> {
//!         (1..=self.tokens.min(2)).collect()
//!     }
//!
//!     fn apply_action(&self, take: &u8) -> Self {
//!         LastToken {
//!             tokens: self.tokens - take,
//!             to_move: self.to_move.opponent(),
//!         }
//!     }
//!
//!     fn is_terminal(&self) -> bool {
//!         self.tokens == 0
//!     }
//!
//!     fn scores(&self) -> Scores {
//!         // The player who just moved took the last token.
//!         winner_scores(self.to_move.opponent())
//!     }
//!
//!     fn current_player(&self) -> Player {
//!         self.to_move
//!     }
//! }
//!
//! fn main() -> Result<(), duel_mcts::MCTSError> {
//!     let game = LastToken { tokens: 4, to_move: Player::First };
//!     let mut mcts = MCTS::new(game, SearchConfig::default().with_seed(7))?;
//!
//!     // Taking one leaves three, a lost position for the opponent.
//!     let best = mcts.best_action(2_000)?;
//!     assert_eq!(best, Some(1));
//!
//!     println!("{}", mcts.stats());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Every iteration goes through four phases:
//!
//! 1. **Selection**: Starting from the root, descend with UCB1 while the current
//!    node is fully expanded and not terminal.
//!
//! 2. **Expansion**: The first node with an unexpanded action gets one new child.
//!    Actions are expanded in an order shuffled once when the node is created.
//!
//! 3. **Simulation**: From the new node, play the game to the end, with random
//!    moves or the game's own rollout.
//!
//! 4. **Backpropagation**: Add the terminal scores of both players to every node
//!    on the path, root included, and count the visit.
//!
//! A node's average is read from the point of view of the player who moved into
//! it, which is what makes both players maximise their own outcome.
//!
//! ## Reproducibility
//!
//! Node shuffling, tie-breaking and rollouts all draw from the one random source
//! owned by the [`MCTS`] driver. Two drivers built from the same seed and given
//! the same calls grow identical trees and return identical actions.

pub mod config;
pub mod game_state;
pub mod games;
pub mod mcts;
pub mod policy;
pub mod stats;
pub mod tree;
pub mod utils;

pub use config::{SearchConfig, DEFAULT_EXPLORATION_FACTOR};
pub use game_state::{winner_scores, Action, GameState, Player, Scores};
pub use mcts::MCTS;
pub use policy::{BackpropagationPolicy, SelectionPolicy, SimulationPolicy};
pub use stats::SearchStatistics;
pub use tree::{MCTSNode, NodePath};

/// Error types for the MCTS algorithm
#[derive(thiserror::Error, Debug)]
pub enum MCTSError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The game broke its side of the [`GameState`] contract
    #[error("Game contract violated: {0}")]
    ContractViolation(String),
}

/// Result type for MCTS operations
pub type Result<T> = std::result::Result<T, MCTSError>;
