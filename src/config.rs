//! Configuration options for the MCTS algorithm
//!
//! This module defines the configuration parameters that control the
//! behavior of the MCTS algorithm.

use crate::{MCTSError, Result};

/// Default UCB1 exploration factor
pub const DEFAULT_EXPLORATION_FACTOR: f64 = 1.0;

/// Criteria for selecting the best child after search is complete
///
/// This determines how the final action is selected after the search budget is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestChildCriteria {
    /// Select the child with the highest average score, as seen by the
    /// player to move at the root
    ///
    /// Exactly equal averages are broken uniformly at random.
    HighestAverage,

    /// Select the child with the most visits
    ///
    /// More conservative, as it relies on how much the tree policy trusted a
    /// move rather than on a possibly noisy average.
    MostVisits,
}

/// Configuration for the MCTS algorithm
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use duel_mcts::{SearchConfig, config::BestChildCriteria};
///
/// let config = SearchConfig::default()
///     .with_exploration_factor(1.5)
///     .with_seed(42)
///     .with_best_child_criteria(BestChildCriteria::MostVisits);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Exploration factor for UCB1
    ///
    /// Controls the balance between exploration and exploitation.
    /// Higher values favor exploration of less-visited nodes.
    pub exploration_factor: f64,

    /// Seed of the random source used when none is supplied explicitly
    pub seed: u64,

    /// Criteria for selecting the best child after search
    pub best_child_criteria: BestChildCriteria,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            exploration_factor: DEFAULT_EXPLORATION_FACTOR,
            seed: 0,
            best_child_criteria: BestChildCriteria::HighestAverage,
        }
    }
}

impl SearchConfig {
    /// Sets the exploration factor
    pub fn with_exploration_factor(mut self, factor: f64) -> Self {
        self.exploration_factor = factor;
        self
    }

    /// Sets the seed of the default random source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the criteria for selecting the best child
    pub fn with_best_child_criteria(mut self, criteria: BestChildCriteria) -> Self {
        self.best_child_criteria = criteria;
        self
    }

    /// Checks that the configuration can drive a search
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_factor.is_finite() || self.exploration_factor < 0.0 {
            return Err(MCTSError::InvalidConfiguration(format!(
                "exploration factor must be a finite non-negative number, got {}",
                self.exploration_factor
            )));
        }
        Ok(())
    }
}
