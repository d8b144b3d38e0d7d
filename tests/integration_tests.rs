use duel_mcts::{
    config::BestChildCriteria,
    games::AddTillTarget,
    policy::{selection::UCB1Policy, simulation::RandomPolicy},
    GameState, MCTSError, Player, SearchConfig, MCTS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn best_action(game: AddTillTarget, seed: u64, iterations: usize) -> Option<String> {
    init_logging();
    let config = SearchConfig::default().with_seed(seed);
    let mut mcts = MCTS::new(game, config).expect("default config is valid");
    mcts.best_action(iterations).expect("reference games keep the contract")
}

#[test]
fn test_mcts_basic_functionality() {
    init_logging();
    let mut mcts = MCTS::new(AddTillTarget::count_to_ten(), SearchConfig::default()).unwrap();

    let action = mcts.best_action(100).unwrap();
    assert!(matches!(action.as_deref(), Some("1") | Some("2") | Some("3")));

    let stats = mcts.get_statistics();
    assert_eq!(stats.iterations, 100, "Should have performed expected iterations");
    assert!(stats.tree_size > 1, "Tree should have grown");
    assert_eq!(stats.tree_size, mcts.root().tree_size());
    assert_eq!(mcts.root().visits(), 100.0);
}

#[test]
fn test_finds_opening_move_of_race_to_ten() {
    // 2 puts the first player on the 2-6-10 track.
    assert_eq!(
        best_action(AddTillTarget::count_to_ten(), 42, 20_000).as_deref(),
        Some("2")
    );
}

#[test]
fn test_takes_immediate_win_from_seven() {
    let game = AddTillTarget::count_to_ten().starting_at(7);
    assert_eq!(best_action(game.clone(), 1, 5_000).as_deref(), Some("3"));

    let mut mcts = MCTS::new(game, SearchConfig::default().with_seed(1)).unwrap();
    mcts.search(500).unwrap();
    let winning = mcts.root().child_for(&"3".to_string()).unwrap();
    assert!(winning.state.is_terminal());
    assert!(winning.is_leaf());
    assert_eq!(winning.average_score(), 1.0);
}

#[test]
fn test_avoids_immediate_loss_from_eight() {
    // 9 or 10 would be reached by the opponent otherwise; 2 wins outright.
    let game = AddTillTarget::count_to_ten().starting_at(8);
    assert_eq!(best_action(game, 2, 5_000).as_deref(), Some("2"));
}

#[test]
fn test_forced_move_from_nine() {
    let game = AddTillTarget::count_to_ten().starting_at(9);
    assert_eq!(best_action(game, 3, 1_000).as_deref(), Some("1"));
}

#[test]
fn test_generalized_game_winning_move() {
    let game = AddTillTarget::new(31, 1, 4).starting_at(27);
    assert_eq!(best_action(game, 4, 10_000).as_deref(), Some("4"));
}

#[test]
fn test_generalized_game_forcing_move() {
    // 26 leaves the opponent 5 short of 31, a losing residue under modulus 5.
    let game = AddTillTarget::new(31, 1, 4).starting_at(22);
    assert_eq!(best_action(game, 5, 50_000).as_deref(), Some("4"));
}

#[test]
fn test_second_player_to_move_finds_the_same_move() {
    let game = AddTillTarget::count_to_ten()
        .starting_at(7)
        .with_player(Player::Second);
    assert_eq!(best_action(game, 6, 5_000).as_deref(), Some("3"));
}

#[test]
fn test_searches_accumulate() {
    let mut mcts = MCTS::new(AddTillTarget::count_to_ten(), SearchConfig::default()).unwrap();

    mcts.search(100).unwrap();
    assert_eq!(mcts.root().visits(), 100.0);

    mcts.search(100).unwrap();
    assert_eq!(mcts.root().visits(), 200.0);
    assert_eq!(mcts.get_statistics().iterations, 200);
}

#[test]
fn test_terminal_root_has_no_best_action() {
    let game = AddTillTarget::count_to_ten().starting_at(10);
    assert!(game.is_terminal());

    for iterations in [0, 1, 50] {
        let mut mcts = MCTS::new(game.clone(), SearchConfig::default()).unwrap();
        assert_eq!(mcts.best_action(iterations).unwrap(), None);
        assert_eq!(mcts.root().visits(), iterations as f64);
        assert_eq!(mcts.root().tree_size(), 1);
        assert!(mcts.root().is_leaf());
        assert!(mcts.root().is_fully_expanded());
    }
}

#[test]
fn test_zero_budget_has_no_best_action() {
    let mut mcts = MCTS::new(AddTillTarget::count_to_ten(), SearchConfig::default()).unwrap();
    assert_eq!(mcts.best_action(0).unwrap(), None);
    assert_eq!(mcts.root().visits(), 0.0);
}

#[test]
fn test_terminal_descent_is_scored_without_rollout() {
    // From 9 the only move ends the game, so every iteration after the first
    // descends straight onto the terminal child.
    let game = AddTillTarget::count_to_ten().starting_at(9);
    let mut mcts = MCTS::new(game, SearchConfig::default()).unwrap();
    mcts.search(10).unwrap();

    let child = &mcts.root().children[0];
    assert_eq!(child.visits(), 10.0);
    assert_eq!(child.scores, [10.0, 0.0]);
    assert_eq!(child.average_score(), 1.0);
    assert_eq!(mcts.get_statistics().terminal_hits, 9);
    assert_eq!(mcts.root().tree_size(), 2);
}

#[test]
fn test_dead_end_position_is_a_contract_violation() {
    // Two short of the target with moves of 2 or 3: 9 is live but has no moves.
    let game = AddTillTarget::new(10, 2, 3).starting_at(9);
    assert!(!game.is_terminal());
    assert!(game.get_legal_actions().is_empty());

    let mut mcts = MCTS::new(game, SearchConfig::default()).unwrap();
    match mcts.search(1) {
        Err(MCTSError::ContractViolation(message)) => {
            assert!(message.contains("no legal actions"))
        }
        other => panic!("expected a contract violation, got {:?}", other),
    }
}

#[test]
fn test_rollout_into_dead_end_is_a_contract_violation() {
    // 5 + 2 + 2 = 9: some rollouts from 5 get stuck one short of 10.
    let game = AddTillTarget::new(10, 2, 3).starting_at(5);
    let mut mcts = MCTS::new(game, SearchConfig::default()).unwrap();
    let result = mcts.search(200);
    assert!(matches!(result, Err(MCTSError::ContractViolation(_))));
}

#[test]
fn test_invalid_exploration_factor_is_rejected() {
    for factor in [-1.0, f64::NAN, f64::INFINITY] {
        let config = SearchConfig::default().with_exploration_factor(factor);
        let result = MCTS::new(AddTillTarget::count_to_ten(), config);
        assert!(matches!(result, Err(MCTSError::InvalidConfiguration(_))));
    }
}

#[test]
fn test_explicit_random_source() {
    let game = AddTillTarget::count_to_ten().starting_at(7);
    let rng = ChaCha8Rng::seed_from_u64(99);
    let mut mcts = MCTS::with_rng(game, SearchConfig::default(), rng).unwrap();
    assert_eq!(mcts.best_action(5_000).unwrap().as_deref(), Some("3"));
}

#[test]
fn test_most_visits_criteria() {
    let config = SearchConfig::default()
        .with_seed(11)
        .with_best_child_criteria(BestChildCriteria::MostVisits);
    let mut mcts = MCTS::new(AddTillTarget::count_to_ten().starting_at(7), config).unwrap();
    assert_eq!(mcts.best_action(5_000).unwrap().as_deref(), Some("3"));
}

#[test]
fn test_mcts_policy_customization() {
    let mut mcts = MCTS::new(AddTillTarget::count_to_ten(), SearchConfig::default())
        .unwrap()
        .with_selection_policy(UCB1Policy::new(0.1)) // Very exploitative
        .with_simulation_policy(RandomPolicy::new());

    assert!(mcts.best_action(500).unwrap().is_some());
    assert_eq!(mcts.exploration_factor(), 1.0);
}

#[test]
fn test_engine_self_play_is_won_by_first_player() {
    init_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut state = AddTillTarget::count_to_ten();
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let mut mcts =
            MCTS::with_rng(state.clone(), SearchConfig::default(), &mut rng).unwrap();
        let action = mcts
            .best_action(20_000)
            .unwrap()
            .expect("live position has a move");
        moves.push((state.current_player(), action.clone()));
        state = state.apply_action(&action);
    }

    assert_eq!(moves[0], (Player::First, "2".to_string()));
    assert_eq!(state.scores(), [1.0, 0.0], "moves played: {:?}", moves);
}
