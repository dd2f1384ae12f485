//! Display functions for command results

use super::formatters::{attempt_pips, format_price, share_emoji};
use crate::commands::Classification;
use crate::core::{FeedbackTier, GuessOutcome};
use crate::game::GameState;
use crate::price::Product;
use colored::{ColoredString, Colorize};

fn paint_tier(text: &str, tier: FeedbackTier) -> ColoredString {
    match tier {
        FeedbackTier::Green => text.green(),
        FeedbackTier::Yellow => text.yellow(),
        FeedbackTier::Orange => text.truecolor(255, 140, 0),
        FeedbackTier::Red => text.red(),
    }
}

fn outcome_hint(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::Higher => "go higher",
        GuessOutcome::Lower => "go lower",
        GuessOutcome::Correct => "correct!",
    }
}

/// Print the board for a game in progress or finished
pub fn print_state(state: &GameState, product: &Product, counter: Option<u64>) {
    println!("\n{}", "─".repeat(60).cyan());
    match counter {
        Some(n) => println!(
            "Play #{}: {}",
            n.to_string().bright_cyan().bold(),
            product.title.bright_yellow().bold()
        ),
        None => println!("Product: {}", product.title.bright_yellow().bold()),
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, slot) in state.attempts().iter().enumerate() {
        match slot {
            Some(attempt) => println!(
                "  {}. {} {} {}",
                i + 1,
                paint_tier(&format!("{:>10}", attempt.formatted_guess()), attempt.tier()).bold(),
                attempt.outcome().arrow(),
                outcome_hint(attempt.outcome()).bright_black()
            ),
            None => println!("  {}. {}", i + 1, format!("{:>10}", "·····").bright_black()),
        }
    }

    println!("\n  Attempts: {}", attempt_pips(state));

    if state.is_solved() {
        println!(
            "\n{}",
            format!(
                "✅ Solved in {} {}! The price was {}.",
                state.attempts_used(),
                if state.attempts_used() == 1 { "guess" } else { "guesses" },
                format_price(state.target())
            )
            .green()
            .bold()
        );
    } else if state.is_finished() {
        println!(
            "\n{}",
            format!("❌ Out of guesses. The price was {}.", format_price(state.target()))
                .red()
                .bold()
        );
    } else {
        println!("  {} guesses left", state.attempts_left());
    }

    if state.is_finished() {
        println!("\n  {}", share_emoji(state));
    }
}

/// Print the result of classifying a single guess
pub fn print_classification(result: &Classification) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} vs {} ",
        "CLASSIFY:".bright_cyan().bold(),
        format_price(result.guess).bright_yellow().bold(),
        format_price(result.target).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Relative error: {}",
        format!("{:.2}%", result.relative_error * 100.0).bright_yellow()
    );
    println!(
        "   Tier:           {} ({})",
        paint_tier(&result.tier.to_string(), result.tier).bold(),
        result.tier.label()
    );
    println!(
        "   Outcome:        {} {}",
        result.outcome.arrow(),
        result.outcome
    );

    if !result.tier.contains(result.relative_error) {
        println!(
            "   {}",
            "Note: error falls between bands, using the fallback tier".bright_black()
        );
    }
}
