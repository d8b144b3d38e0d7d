//! Traits defining game state representation for MCTS.
//!
//! The GameState trait is the primary interface that must be implemented for any
//! two-player game that will be searched by [`MCTS`](crate::MCTS). The engine never
//! looks inside a state or an action; it only goes through the operations below.

use std::fmt::{self, Debug, Display};

use rand::RngCore;

/// Trait for actions that can be taken in a game
///
/// Actions are opaque tokens. The engine compares them for equality and prints
/// them in diagnostics, nothing more.
pub trait Action: Clone + Debug + Display + PartialEq {}

impl<T: Clone + Debug + Display + PartialEq> Action for T {}

/// One of the two seats in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 0, the one moving first from a fresh game
    First,
    /// Player 1
    Second,
}

impl Player {
    /// Index of this player into a [`Scores`] vector (0 or 1)
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Returns the player for an index, or `None` for anything but 0 or 1
    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }

    /// The other seat
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Terminal reward vector indexed by [`Player::index`]
///
/// Each component lies in `[0, 1]`: 1 is a win, 0 a loss, anything between
/// is partial credit (a draw, for instance).
pub type Scores = [f64; 2];

/// Scores for a decisive result won by `winner`
pub fn winner_scores(winner: Player) -> Scores {
    let mut scores = [0.0; 2];
    scores[winner.index()] = 1.0;
    scores
}

/// Trait defining the game state interface required for MCTS
///
/// States are values: [`apply_action`](GameState::apply_action) must return a
/// new state and leave the receiver untouched, since the tree keeps many
/// children derived from the same ancestor.
pub trait GameState: Clone {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// Returns the list of legal actions from this state
    ///
    /// Repeated calls on the same state must return the same actions in the
    /// same order. The list is empty exactly when the state is terminal.
    ///
    /// # Example
    ///
    /// ```
    /// # use duel_mcts::{GameState, Player, Scores};
    /// # #[derive(Clone)]
    /// # struct MyGame;
    /// # impl GameState for MyGame {
    /// # type Action = String;
    /// fn get_legal_actions(&self) -> Vec<String> {
    ///     vec!["1".to_string(), "2".to_string(), "3".to_string()]
    /// }
    /// # fn apply_action(&self, _: &String) -> Self { self.clone() }
    /// # fn is_terminal(&self) -> bool { false }
    /// # fn scores(&self) -> Scores { [0.5, 0.5] }
    /// # fn current_player(&self) -> Player { Player::First }
    /// # }
    /// ```
    fn get_legal_actions(&self) -> Vec<Self::Action>;

    /// Applies an action to the current state, returning the new state
    ///
    /// The action must be one of [`get_legal_actions`](GameState::get_legal_actions).
    /// Implementations should panic on an illegal action rather than return a
    /// corrupted state.
    fn apply_action(&self, action: &Self::Action) -> Self;

    /// Returns true if this state is terminal (game over)
    fn is_terminal(&self) -> bool;

    /// Returns the terminal rewards of both players
    ///
    /// Only meaningful on a terminal state; implementations should panic when
    /// called on a position that is still in play.
    fn scores(&self) -> Scores;

    /// Returns the player whose turn it is in this state
    fn current_player(&self) -> Player;

    /// Optional custom simulation from this state to the end of the game
    ///
    /// Return `Some(scores)` to replace the uniform random playout with a
    /// domain-specific one. Any randomness must be drawn from `rng` so that a
    /// seeded search stays reproducible. The default opts out.
    fn rollout(&self, _rng: &mut dyn RngCore) -> Option<Scores> {
        None
    }
}
