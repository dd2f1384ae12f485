//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::Error;
use crate::commands::Game;
use crate::output::formatters::attempt_line;
use crate::output::print_state;
use crate::session::SessionStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// session cannot be loaded or saved.
pub fn run_simple<S: SessionStore>(game: &mut Game<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Pricedle - Guess the Price                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the price of today's product in four tries.");
    println!("After each guess you'll see how close you were:\n");
    println!("  🟩 within 5%   🟨 6-10%   🟧 11-25%   🟥 further off");
    println!("  ⬆ go higher   ⬇ go lower\n");
    println!("Commands: 'quit' to exit, 'new' for a new product\n");

    let mut round = game.current_round()?;
    print_state(&round.state, &round.product, game.play_number());

    loop {
        if round.state.is_finished() {
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    round = game.new_round()?;
                    println!("\n🔄 New product!");
                    print_state(&round.state, &round.product, game.play_number());
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let input = get_user_input(&format!(
            "Your guess ({} left)",
            round.state.attempts_left()
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                round = game.new_round()?;
                println!("\n🔄 New product!");
                print_state(&round.state, &round.product, game.play_number());
            }
            _ => match game.submit(&mut round, &input) {
                Ok(attempt) => {
                    println!("  {}", attempt_line(&attempt));
                    if round.state.is_finished() {
                        print_state(&round.state, &round.product, game.play_number());
                    }
                }
                Err(Error::Guess(e)) => println!("{}", format!("❌ {e}").red()),
                Err(e) => return Err(e.into()),
            },
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quitting
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
