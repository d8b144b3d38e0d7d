//! Utility functions for the MCTS algorithm
//!
//! Numeric helpers shared by the tree nodes and the policies.

use rand::{Rng, RngCore};

/// Average reward per visit
///
/// Returns 0.0 if no visits have occurred.
pub fn average_score(total_score: f64, visits: f64) -> f64 {
    if visits == 0.0 {
        return 0.0;
    }
    total_score / visits
}

/// Calculates the exploration term for UCB1
///
/// `exploration_factor * sqrt(2 * ln(parent_visits) / visits)`, or infinity
/// for a node that has never been visited.
pub fn exploration_term(parent_visits: f64, visits: f64, exploration_factor: f64) -> f64 {
    if visits == 0.0 {
        return f64::INFINITY;
    }

    exploration_factor * (2.0 * parent_visits.ln() / visits).sqrt()
}

/// Calculates the UCB1 value from an already computed average
pub fn ucb1_value(average: f64, visits: f64, parent_visits: f64, exploration_factor: f64) -> f64 {
    if visits == 0.0 {
        return f64::INFINITY;
    }

    average + exploration_term(parent_visits, visits, exploration_factor)
}

/// Index of the largest value, ties broken uniformly at random
///
/// Ties are exact floating point equality. One draw is taken from `rng`
/// whenever the input is non-empty, even without a tie, so the number of
/// draws does not depend on the values. Returns `None` for an empty input.
pub fn argmax_random_tie<I>(values: I, rng: &mut dyn RngCore) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best = f64::NEG_INFINITY;
    let mut candidates: Vec<usize> = Vec::new();

    for (i, value) in values.into_iter().enumerate() {
        if value > best {
            best = value;
            candidates.clear();
            candidates.push(i);
        } else if value == best {
            candidates.push(i);
        }
    }

    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}
