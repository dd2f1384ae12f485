//! Directional outcome of a guess

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FeedbackTier;

/// Which way the next guess should move
///
/// `Higher` means the guess was below the price and the player should go up;
/// `Lower` means the guess was at or above the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    Lower,
    Higher,
    Correct,
}

impl GuessOutcome {
    /// Derive the outcome from a guess and the tier it landed in
    ///
    /// The tightest tier always wins over direction.
    #[must_use]
    pub fn resolve(guess: f64, target: f64, tier: FeedbackTier) -> Self {
        if tier.is_correct() {
            Self::Correct
        } else if guess < target {
            Self::Higher
        } else {
            Self::Lower
        }
    }

    /// Name used in share summaries
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "Lower",
            Self::Higher => "Higher",
            Self::Correct => "Correct",
        }
    }

    /// Arrow hint for terminal output
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Lower => '⬇',
            Self::Higher => '⬆',
            Self::Correct => '✓',
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
