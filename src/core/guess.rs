//! Raw guess parsing and formatting
//!
//! Guesses arrive as untyped text from a single input field.

use crate::error::GuessError;

/// Parse a raw guess into a price
///
/// Surrounding whitespace is trimmed and a decimal comma is accepted in
/// place of a decimal point, so `"4,99"` and `" 4.99 "` both parse to 4.99.
///
/// # Errors
/// Returns [`GuessError::InvalidGuessFormat`] if the text is not a finite
/// number.
///
/// # Examples
/// ```
/// use pricedle::core::parse_guess;
///
/// assert_eq!(parse_guess("4,99").unwrap(), 4.99);
/// assert!(parse_guess("cheap").is_err());
/// ```
pub fn parse_guess(raw: &str) -> Result<f64, GuessError> {
    let normalized = raw.trim().replace(',', ".");

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GuessError::InvalidGuessFormat(raw.to_string())),
    }
}

/// Format a guess for display, e.g. `20.00€`
#[must_use]
pub fn format_guess(guess: f64) -> String {
    format!("{guess:.2}€")
}
