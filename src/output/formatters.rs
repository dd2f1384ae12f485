//! Formatting utilities for terminal output

use crate::game::{Attempt, GameState};

/// Format one attempt as `🟨⬆ 8.00€`
#[must_use]
pub fn attempt_line(attempt: &Attempt) -> String {
    format!(
        "{}{} {}",
        attempt.tier().to_emoji(),
        attempt.outcome().arrow(),
        attempt.formatted_guess()
    )
}

/// Emoji grid of a game: one square and arrow per filled slot
#[must_use]
pub fn share_emoji(state: &GameState) -> String {
    state
        .filled()
        .map(|a| format!("{}{}", a.tier().to_emoji(), a.outcome().arrow()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slot pips, e.g. `●●○○` after two guesses
#[must_use]
pub fn attempt_pips(state: &GameState) -> String {
    state
        .attempts()
        .iter()
        .map(|slot| if slot.is_some() { '●' } else { '○' })
        .collect()
}

/// Format a price in currency units
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price:.2}€")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_emoji_for_fresh_game_is_empty() {
        assert_eq!(share_emoji(&GameState::new(10.0)), "");
    }

    #[test]
    fn share_emoji_marks_tier_and_direction() {
        let mut state = GameState::new(10.0);
        state.apply_guess("5").unwrap();
        state.apply_guess("10.8").unwrap();
        state.apply_guess("10").unwrap();

        assert_eq!(share_emoji(&state), "🟥⬆ 🟨⬇ 🟩✓");
    }

    #[test]
    fn pips_track_used_slots() {
        let mut state = GameState::new(10.0);
        assert_eq!(attempt_pips(&state), "○○○○");
        state.apply_guess("1").unwrap();
        state.apply_guess("2").unwrap();
        assert_eq!(attempt_pips(&state), "●●○○");
    }

    #[test]
    fn attempt_line_layout() {
        let mut state = GameState::new(10.0);
        let attempt = state.apply_guess("12").unwrap().clone();
        assert_eq!(attempt_line(&attempt), "🟧⬇ 12.00€");
    }

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(format_price(2.5), "2.50€");
    }
}
