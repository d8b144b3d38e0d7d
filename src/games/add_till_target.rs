//! Race-to-a-target counting game
//!
//! Players take turns adding between `min_add` and `max_add` to a shared total.
//! The player who brings the total to the target wins.
//!
//! With `min_add + max_add = m`, a total that leaves the mover a distance to the
//! target divisible by `m` is lost for the mover. The classic race to 10 with
//! moves of 1 to 3 is therefore won by the first player through 2, 6 and 10.

use std::fmt;

use crate::game_state::{winner_scores, GameState, Player, Scores};

/// State of an add-till-target game
///
/// Actions are the decimal amounts that may be added, e.g. `"1"`, `"2"`, `"3"`.
///
/// A game with `min_add > 1` can reach a total from which no amount fits but
/// the target is not reached. Such a position has no legal actions without
/// being terminal, which the engine reports as a contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTillTarget {
    total: u32,
    target: u32,
    min_add: u32,
    max_add: u32,
    player: Player,
}

impl AddTillTarget {
    /// A fresh game with the first player to move from a total of zero
    ///
    /// # Panics
    ///
    /// Panics if `min_add` is zero or greater than `max_add`.
    pub fn new(target: u32, min_add: u32, max_add: u32) -> Self {
        assert!(
            min_add >= 1 && min_add <= max_add,
            "invalid move range {}..={}",
            min_add,
            max_add
        );
        AddTillTarget {
            total: 0,
            target,
            min_add,
            max_add,
            player: Player::First,
        }
    }

    /// The race to 10 with moves of 1, 2 or 3
    pub fn count_to_ten() -> Self {
        Self::new(10, 1, 3)
    }

    /// The same game with the total already at `total`
    pub fn starting_at(mut self, total: u32) -> Self {
        self.total = total;
        self
    }

    /// The same game with `player` to move
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    /// Current total
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Total that wins the game
    pub fn target(&self) -> u32 {
        self.target
    }

    fn parse_amount(&self, action: &str) -> u32 {
        match action.parse::<u32>() {
            Ok(amount)
                if !self.is_terminal()
                    && amount >= self.min_add
                    && amount <= self.max_add.min(self.target - self.total) =>
            {
                amount
            }
            _ => panic!("illegal action {:?} in position: {}", action, self),
        }
    }
}

impl GameState for AddTillTarget {
    type Action = String;

    fn get_legal_actions(&self) -> Vec<String> {
        if self.is_terminal() {
            return Vec::new();
        }
        let max_move = self.max_add.min(self.target - self.total);
        (self.min_add..=max_move).map(|n| n.to_string()).collect()
    }

    fn apply_action(&self, action: &String) -> Self {
        let amount = self.parse_amount(action);
        AddTillTarget {
            total: self.total + amount,
            player: self.player.opponent(),
            ..self.clone()
        }
    }

    fn is_terminal(&self) -> bool {
        self.total >= self.target
    }

    fn scores(&self) -> Scores {
        assert!(
            self.is_terminal(),
            "scores requested for a game still in play: {}",
            self
        );
        // The player to move did not reach the target; the other one did.
        winner_scores(self.player.opponent())
    }

    fn current_player(&self) -> Player {
        self.player
    }
}

impl fmt::Display for AddTillTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {} to move, total: {} (target: {})",
            self.player, self.total, self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(game: &AddTillTarget) -> Vec<String> {
        game.get_legal_actions()
    }

    #[test]
    fn count_to_ten_offers_one_to_three() {
        let game = AddTillTarget::count_to_ten();
        assert_eq!(actions(&game), vec!["1", "2", "3"]);
        assert_eq!(game.current_player(), Player::First);
        assert!(!game.is_terminal());
    }

    #[test]
    fn moves_are_capped_by_the_distance_to_target() {
        let game = AddTillTarget::count_to_ten().starting_at(8);
        assert_eq!(actions(&game), vec!["1", "2"]);

        let game = AddTillTarget::new(31, 1, 4).starting_at(29);
        assert_eq!(actions(&game), vec!["1", "2"]);
    }

    #[test]
    fn min_add_restricts_moves() {
        let game = AddTillTarget::new(10, 2, 3).starting_at(8);
        assert_eq!(actions(&game), vec!["2"]);
    }

    #[test]
    fn apply_action_switches_player_and_leaves_receiver_untouched() {
        let game = AddTillTarget::count_to_ten();
        let next = game.apply_action(&"2".to_string());

        assert_eq!(next.total(), 2);
        assert_eq!(next.current_player(), Player::Second);
        assert_eq!(game.total(), 0);
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(actions(&game), vec!["1", "2", "3"]);
    }

    #[test]
    fn reaching_the_target_wins_for_the_mover() {
        let game = AddTillTarget::count_to_ten().starting_at(7);
        let end = game.apply_action(&"3".to_string());

        assert!(end.is_terminal());
        assert!(actions(&end).is_empty());
        assert_eq!(end.scores(), [1.0, 0.0]);

        let end = game
            .with_player(Player::Second)
            .apply_action(&"3".to_string());
        assert_eq!(end.scores(), [0.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "illegal action")]
    fn illegal_action_panics() {
        AddTillTarget::count_to_ten().apply_action(&"4".to_string());
    }

    #[test]
    #[should_panic(expected = "illegal action")]
    fn garbage_action_panics() {
        AddTillTarget::count_to_ten().apply_action(&"two".to_string());
    }

    #[test]
    #[should_panic(expected = "still in play")]
    fn scores_of_live_game_panic() {
        AddTillTarget::count_to_ten().scores();
    }

    #[test]
    fn display_shows_position() {
        let game = AddTillTarget::new(31, 1, 4).starting_at(22);
        assert_eq!(game.to_string(), "Player 0 to move, total: 22 (target: 31)");
    }
}
