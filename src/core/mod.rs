//! Core scoring types
//!
//! Pure functions and value types: banding a guess into a feedback tier,
//! deriving the direction hint, and parsing raw input.

mod guess;
mod outcome;
mod tier;

pub use guess::{format_guess, parse_guess};
pub use outcome::GuessOutcome;
pub use tier::{FeedbackTier, relative_error};
