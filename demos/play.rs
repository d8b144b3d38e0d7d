//! Race to 10 against the engine
//!
//! Take turns adding 1, 2 or 3 to a shared total; whoever reaches 10 wins.
//! You move first.
//!
//! ```bash
//! cargo run --example play
//! ```

use std::error::Error;
use std::io::{self, BufRead, Write};

use duel_mcts::{games::AddTillTarget, GameState, Player, SearchConfig, MCTS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const AI_ITERATIONS: usize = 50_000;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    println!("=== Race to 10 ===");
    println!("Take turns adding 1, 2, or 3 to reach 10. First to 10 wins!");
    println!();

    let mut rng = ChaCha8Rng::from_entropy();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = AddTillTarget::count_to_ten();

    while !game.is_terminal() {
        print!("Total: {} | ", game.total());

        if game.current_player() == Player::First {
            let actions = game.get_legal_actions();
            print!("Your turn. Choose {}: ", actions.join("/"));
            io::stdout().flush()?;

            let input = match lines.next() {
                Some(line) => line?,
                None => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            };
            let choice = input.trim().to_string();

            if !actions.contains(&choice) {
                println!("Invalid move, try again.");
                continue;
            }
            game = game.apply_action(&choice);
        } else {
            let mut mcts = MCTS::with_rng(game.clone(), SearchConfig::default(), &mut rng)?;
            match mcts.best_action(AI_ITERATIONS)? {
                Some(action) => {
                    println!("AI plays: {}", action);
                    log::debug!("{}", mcts.stats());
                    game = game.apply_action(&action);
                }
                None => break,
            }
        }
    }

    print!("Total: {} | ", game.total());
    let scores = game.scores();
    if scores[Player::First.index()] > scores[Player::Second.index()] {
        println!("You win!");
    } else {
        println!("AI wins!");
    }

    Ok(())
}
