//! Guess classification command
//!
//! Scores a single guess against a price without touching any session.

use crate::core::{FeedbackTier, GuessOutcome, parse_guess, relative_error};

/// Result of classifying one guess
pub struct Classification {
    pub guess: f64,
    pub target: f64,
    pub relative_error: f64,
    pub tier: FeedbackTier,
    pub outcome: GuessOutcome,
}

/// Classify a raw guess against a target price
///
/// # Errors
///
/// Returns an error if:
/// - The guess or target is not a number
/// - The target is not positive
pub fn classify_guess(guess: &str, target: &str) -> Result<Classification, String> {
    let guess = parse_guess(guess).map_err(|e| e.to_string())?;
    let target = parse_guess(target).map_err(|_| format!("Invalid target price '{target}'"))?;

    if target <= 0.0 {
        return Err(format!("Target price must be positive, got {target}"));
    }

    let tier = FeedbackTier::classify(guess, target);

    Ok(Classification {
        guess,
        target,
        relative_error: relative_error(guess, target),
        tier,
        outcome: GuessOutcome::resolve(guess, target, tier),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_close_guess() {
        let result = classify_guess("20.00", "19.99").unwrap();

        assert_eq!(result.tier, FeedbackTier::Green);
        assert_eq!(result.outcome, GuessOutcome::Correct);
        assert!(result.relative_error < 0.001);
    }

    #[test]
    fn classify_gap_uses_fallback() {
        let result = classify_guess("10,55", "10").unwrap();

        assert_eq!(result.tier, FeedbackTier::Red);
        assert_eq!(result.outcome, GuessOutcome::Lower);
        assert!(!result.tier.contains(result.relative_error));
    }

    #[test]
    fn classify_rejects_bad_input() {
        assert!(classify_guess("abc", "10").is_err());
        assert!(classify_guess("5", "ten").is_err());
        assert!(classify_guess("5", "0").is_err());
        assert!(classify_guess("5", "-3").is_err());
    }
}
