//! Main implementation of the Monte Carlo Tree Search algorithm
//!
//! This module contains the search driver, orchestrating the four phases of
//! selection, expansion, simulation, and backpropagation over one tree.

use std::fmt::Write;
use std::time::Instant;

use log::debug;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    config::{BestChildCriteria, SearchConfig},
    game_state::{GameState, Scores},
    policy::{
        backpropagation::{BackpropagationPolicy, StandardPolicy},
        selection::{SelectionPolicy, UCB1Policy},
        simulation::{RandomPolicy, SimulationPolicy},
    },
    stats::SearchStatistics,
    tree::{MCTSNode, NodePath},
    utils, MCTSError, Result,
};

/// The main Monte Carlo Tree Search implementation
///
/// This struct owns the search tree, the random source every random choice is
/// drawn from, and the policies used in each phase. Searches are cumulative:
/// each call to [`search`](MCTS::search) keeps growing the same tree.
///
/// # Example
///
/// ```
/// use duel_mcts::{games::AddTillTarget, SearchConfig, MCTS};
///
/// let game = AddTillTarget::count_to_ten().starting_at(7);
/// let mut mcts = MCTS::new(game, SearchConfig::default().with_seed(42))?;
///
/// let best = mcts.best_action(5_000)?;
/// assert_eq!(best.as_deref(), Some("3"));
/// # Ok::<(), duel_mcts::MCTSError>(())
/// ```
pub struct MCTS<S: GameState, R: RngCore = ChaCha8Rng> {
    /// Root node of the search tree
    root: MCTSNode<S>,

    /// Configuration for the search
    config: SearchConfig,

    /// Random source shared by shuffling, tie-breaking and rollouts
    rng: R,

    /// Statistics gathered during search
    statistics: SearchStatistics,

    /// Policy for selecting nodes during the selection phase
    selection_policy: Box<dyn SelectionPolicy<S>>,

    /// Policy for simulating games during the simulation phase
    simulation_policy: Box<dyn SimulationPolicy<S>>,

    /// Policy for backpropagating results
    backpropagation_policy: Box<dyn BackpropagationPolicy<S>>,
}

impl<S: GameState + 'static> MCTS<S, ChaCha8Rng> {
    /// Creates a new MCTS instance with a random source seeded from `config.seed`
    pub fn new(initial_state: S, config: SearchConfig) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(initial_state, config, rng)
    }
}

impl<S: GameState + 'static, R: RngCore> MCTS<S, R> {
    /// Creates a new MCTS instance drawing all randomness from `rng`
    pub fn with_rng(initial_state: S, config: SearchConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        // The root's expansion order is the first draw from the source.
        let root = MCTSNode::new(initial_state, None, 0, &mut rng);

        let selection_policy: Box<dyn SelectionPolicy<S>> =
            Box::new(UCB1Policy::new(config.exploration_factor));

        let simulation_policy: Box<dyn SimulationPolicy<S>> = Box::new(RandomPolicy::new());

        let backpropagation_policy: Box<dyn BackpropagationPolicy<S>> =
            Box::new(StandardPolicy::new());

        Ok(MCTS {
            root,
            config,
            rng,
            statistics: SearchStatistics::new(),
            selection_policy,
            simulation_policy,
            backpropagation_policy,
        })
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the simulation policy to use
    pub fn with_simulation_policy<P: SimulationPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.simulation_policy = Box::new(policy);
        self
    }

    /// Sets the backpropagation policy to use
    pub fn with_backpropagation_policy<P: BackpropagationPolicy<S> + 'static>(
        mut self,
        policy: P,
    ) -> Self {
        self.backpropagation_policy = Box::new(policy);
        self
    }

    /// Runs exactly `iterations` iterations on the tree
    ///
    /// Multiple calls are cumulative; nothing is reset between them.
    pub fn search(&mut self, iterations: usize) -> Result<()> {
        let start_time = Instant::now();

        for _ in 0..iterations {
            self.execute_iteration()?;
            self.statistics.iterations += 1;
        }

        self.statistics.total_time += start_time.elapsed();
        debug!(
            "searched {} iterations in {:?} ({} total, tree size {})",
            iterations,
            start_time.elapsed(),
            self.statistics.iterations,
            self.statistics.tree_size
        );

        Ok(())
    }

    /// Runs `iterations` more iterations and returns the best root action
    ///
    /// Returns `Ok(None)` when the root has no expanded children, which is
    /// the case for a terminal root or a tree that has never been searched.
    pub fn best_action(&mut self, iterations: usize) -> Result<Option<S::Action>> {
        self.search(iterations)?;
        Ok(self.select_best_action())
    }

    /// Execute a single iteration of the MCTS algorithm
    fn execute_iteration(&mut self) -> Result<()> {
        // 1. Selection and 2. expansion
        let path = self.select_and_expand()?;

        // 3. Simulation
        let scores = self.simulation(&path)?;

        // 4. Backpropagation
        self.backpropagation(&path, scores);

        Ok(())
    }

    /// Descends from the root with the selection policy and expands one node
    ///
    /// Expansion takes priority over descent: the first non-terminal node
    /// with an unexpanded action gets a new child, and the path to that child
    /// is returned. A descent that ends on a terminal node returns the path
    /// to it without creating anything.
    fn select_and_expand(&mut self) -> Result<NodePath> {
        let mut path = NodePath::new();
        let mut node = &mut self.root;

        while !node.state.is_terminal() {
            if let Some(child_index) = node.expand(&mut self.rng) {
                path.push(child_index);
                self.statistics.tree_size += 1;
                self.statistics.max_depth = self.statistics.max_depth.max(path.len());
                return Ok(path);
            }

            let child_index = self
                .selection_policy
                .select_child(node, &mut self.rng)
                .ok_or_else(|| {
                    MCTSError::ContractViolation(
                        "non-terminal state has no legal actions".to_string(),
                    )
                })?;
            path.push(child_index);
            node = &mut node.children[child_index];
        }

        self.statistics.terminal_hits += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(path.len());
        Ok(path)
    }

    /// Simulation phase: Play out the game from the node at the end of `path`
    fn simulation(&mut self, path: &NodePath) -> Result<Scores> {
        let leaf = self.root.descendant(path).ok_or_else(|| {
            MCTSError::ContractViolation(format!("selection produced a dangling {}", path))
        })?;
        self.simulation_policy.simulate(&leaf.state, &mut self.rng)
    }

    /// Backpropagation phase: Update statistics in all nodes along the path
    fn backpropagation(&mut self, path: &NodePath, scores: Scores) {
        // First, update the root node
        self.backpropagation_policy
            .update_stats(&mut self.root, scores);

        // Then update all nodes along the path
        let mut node = &mut self.root;

        for &index in &path.indices {
            node = &mut node.children[index];
            self.backpropagation_policy.update_stats(node, scores);
        }
    }

    /// Selects the best action based on configured criteria
    fn select_best_action(&mut self) -> Option<S::Action> {
        let children = &self.root.children;
        let best_index = match self.config.best_child_criteria {
            BestChildCriteria::HighestAverage => utils::argmax_random_tie(
                children.iter().map(MCTSNode::average_score),
                &mut self.rng,
            ),
            BestChildCriteria::MostVisits => {
                utils::argmax_random_tie(children.iter().map(MCTSNode::visits), &mut self.rng)
            }
        }?;

        children[best_index].action.clone()
    }

    /// Returns the root node of the search tree
    pub fn root(&self) -> &MCTSNode<S> {
        &self.root
    }

    /// Returns the UCB1 exploration factor this driver was configured with
    pub fn exploration_factor(&self) -> f64 {
        self.config.exploration_factor
    }

    /// Returns the search statistics
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns a human-readable summary of the root and its children
    ///
    /// Read-only: does not touch the tree or the random source.
    pub fn stats(&self) -> String {
        let root = &self.root;
        let mut output = String::new();

        let _ = writeln!(output, "Iterations: {:.0}", root.visits());
        let _ = writeln!(
            output,
            "Children explored: {}/{}",
            root.children.len(),
            root.legal_action_count()
        );
        let _ = writeln!(output, "Tree size: {} nodes", root.tree_size());

        for (i, child) in root.children.iter().enumerate() {
            let action = child
                .action
                .as_ref()
                .map(|action| action.to_string())
                .unwrap_or_default();
            let _ = writeln!(
                output,
                "  {}) Action {}: {:.0} visits, avg {:.4}, {} descendants",
                i,
                action,
                child.visits(),
                child.average_score(),
                child.tree_size()
            );
        }

        output
    }

    /// Returns a visualization of the search tree
    pub fn visualize_tree(&self) -> String {
        let mut result = String::new();
        Self::visualize_node(&self.root, 0, &mut result);
        result
    }

    /// Helper method to visualize a node and its children
    fn visualize_node(node: &MCTSNode<S>, depth: usize, output: &mut String) {
        let indent = "  ".repeat(depth);
        let action_str = match &node.action {
            Some(action) => action.to_string(),
            None => "Root".to_string(),
        };

        let _ = writeln!(
            output,
            "{}{} (visits: {:.0}, avg: {:.3}, to move: {})",
            indent,
            action_str,
            node.visits(),
            node.average_score(),
            node.player_to_move()
        );

        for child in &node.children {
            Self::visualize_node(child, depth + 1, output);
        }
    }
}
