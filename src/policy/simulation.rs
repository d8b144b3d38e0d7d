//! Simulation policies for the MCTS algorithm
//!
//! Simulation policies determine how to play out a game from a given state
//! to estimate the value of that state.

use rand::{seq::SliceRandom, RngCore};

use crate::{
    game_state::{GameState, Scores},
    MCTSError, Result,
};

/// Trait for policies that simulate games
pub trait SimulationPolicy<S: GameState> {
    /// Simulates a game from the given state and returns the terminal scores
    fn simulate(&self, state: &S, rng: &mut dyn RngCore) -> Result<Scores>;
}

/// Random simulation policy
///
/// A terminal state is scored directly. Otherwise the state's own
/// [`rollout`](GameState::rollout) is used when the game provides one, and
/// uniformly random legal moves are played until the game ends when it does not.
#[derive(Debug, Clone)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new random policy
    pub fn new() -> Self {
        RandomPolicy
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> SimulationPolicy<S> for RandomPolicy {
    fn simulate(&self, state: &S, rng: &mut dyn RngCore) -> Result<Scores> {
        if state.is_terminal() {
            return Ok(state.scores());
        }
        if let Some(scores) = state.rollout(rng) {
            return Ok(scores);
        }

        let mut current_state = state.clone();
        while !current_state.is_terminal() {
            let legal_actions = current_state.get_legal_actions();
            let action = legal_actions.choose(rng).ok_or_else(|| {
                MCTSError::ContractViolation(
                    "non-terminal state has no legal actions during rollout".to_string(),
                )
            })?;
            current_state = current_state.apply_action(action);
        }

        Ok(current_state.scores())
    }
}

// Implement SimulationPolicy for Box<dyn SimulationPolicy>
impl<S: GameState> SimulationPolicy<S> for Box<dyn SimulationPolicy<S>> {
    fn simulate(&self, state: &S, rng: &mut dyn RngCore) -> Result<Scores> {
        (**self).simulate(state, rng)
    }
}
