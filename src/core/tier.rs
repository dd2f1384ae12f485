//! Proximity feedback tiers
//!
//! A guess is scored by its relative error against the true price:
//!
//! ```text
//! relative_error = |guess - target| / target
//! ```
//!
//! The error is banded into four tiers, scanned from tightest to widest:
//! - Green  `[0.00, 0.05]` (counts as a correct guess)
//! - Yellow `[0.06, 0.10]`
//! - Orange `[0.11, 0.25]`
//! - Red    `[0.25, 1.00]`
//!
//! The bands are inclusive on both ends and the first match wins. Errors that
//! fall between two bands, such as 0.055 or 0.105, or above 1.0, are not
//! covered by any band and fall back to Red.
//!
//! Bounds are single-precision constants widened to `f64`. A guess exactly 6%
//! off computes to an error a hair under `0.06_f64`, but above
//! `f64::from(0.06_f32)`, so round-number guesses land in the band they name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback band for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackTier {
    Green,
    Yellow,
    Orange,
    Red,
}

impl FeedbackTier {
    /// All tiers in scan order (tightest first)
    pub const ALL: [Self; 4] = [Self::Green, Self::Yellow, Self::Orange, Self::Red];

    /// Tier returned when no band covers the relative error
    pub const FALLBACK: Self = Self::Red;

    /// Display label (a colour token for the presentation layer)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "bg-green-600",
            Self::Yellow => "bg-yellow-500",
            Self::Orange => "bg-orange-600",
            Self::Red => "bg-red-500",
        }
    }

    /// Inclusive lower bound on relative error
    #[must_use]
    pub fn start(self) -> f64 {
        f64::from(match self {
            Self::Green => 0.0_f32,
            Self::Yellow => 0.06,
            Self::Orange => 0.11,
            Self::Red => 0.25,
        })
    }

    /// Inclusive upper bound on relative error
    #[must_use]
    pub fn end(self) -> f64 {
        f64::from(match self {
            Self::Green => 0.05_f32,
            Self::Yellow => 0.10,
            Self::Orange => 0.25,
            Self::Red => 1.0,
        })
    }

    /// Check whether this band covers the given relative error
    #[inline]
    #[must_use]
    pub fn contains(self, relative_error: f64) -> bool {
        relative_error >= self.start() && relative_error <= self.end()
    }

    /// The tightest band is the win condition
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Green)
    }

    /// Classify a guess against the true price
    ///
    /// `target` must be strictly positive. The result is always one of the
    /// four tiers: uncovered errors resolve to [`FeedbackTier::FALLBACK`].
    ///
    /// # Examples
    /// ```
    /// use pricedle::core::FeedbackTier;
    ///
    /// assert_eq!(FeedbackTier::classify(20.0, 19.99), FeedbackTier::Green);
    /// assert_eq!(FeedbackTier::classify(10.8, 10.0), FeedbackTier::Yellow);
    /// assert_eq!(FeedbackTier::classify(10.55, 10.0), FeedbackTier::Red);
    /// ```
    #[must_use]
    pub fn classify(guess: f64, target: f64) -> Self {
        let error = relative_error(guess, target);

        Self::ALL
            .into_iter()
            .find(|tier| tier.contains(error))
            .unwrap_or(Self::FALLBACK)
    }

    /// Square emoji used in share summaries
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Orange => '🟧',
            Self::Red => '🟥',
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        };
        write!(f, "{name}")
    }
}

/// Relative error of a guess: `|guess - target| / target`
#[inline]
#[must_use]
pub fn relative_error(guess: f64, target: f64) -> f64 {
    (guess - target).abs() / target
}
