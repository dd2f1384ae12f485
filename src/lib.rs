//! Pricedle
//!
//! A daily price guessing game: four tries to guess a product's price, with
//! banded proximity feedback and a direction hint after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use pricedle::core::{FeedbackTier, GuessOutcome};
//! use pricedle::game::{GameState, decode, encode};
//!
//! let mut state = GameState::new(10.0);
//! let attempt = state.apply_guess("8,00").unwrap();
//! assert_eq!(attempt.tier(), FeedbackTier::Orange);
//! assert_eq!(attempt.outcome(), GuessOutcome::Higher);
//!
//! // Persist and restore through an opaque blob
//! let blob = encode(&state);
//! assert_eq!(decode(Some(blob.as_str()), 10.0), state);
//! ```

// Scoring types
pub mod core;

// Game state machine and codec
pub mod game;

// Session storage
pub mod session;

// Target price sources
pub mod price;

// Play counter
pub mod counter;

// Runtime configuration
pub mod config;

mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{Error, GuessError, Result};
