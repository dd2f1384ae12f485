//! Per-player game state machine
//!
//! A play-through is a fixed arena of [`MAX_ATTEMPTS`] slots filled left to
//! right. Each accepted guess fills exactly one slot; the game finishes when a
//! guess lands in the tightest tier or the last slot is used.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{FeedbackTier, GuessOutcome, format_guess, parse_guess};
use crate::error::GuessError;

/// Number of guesses allowed per play-through
pub const MAX_ATTEMPTS: usize = 4;

/// One filled attempt slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    formatted_guess: String,
    outcome: GuessOutcome,
    tier: FeedbackTier,
}

impl Attempt {
    /// Guess as shown to the player, e.g. `20.00€`
    #[must_use]
    pub fn formatted_guess(&self) -> &str {
        &self.formatted_guess
    }

    #[must_use]
    pub const fn outcome(&self) -> GuessOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn tier(&self) -> FeedbackTier {
        self.tier
    }
}

/// State of a single play-through against one target price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    target: f64,
    attempts: [Option<Attempt>; MAX_ATTEMPTS],
    finished: bool,
    solved: bool,
}

impl GameState {
    /// Start a fresh play-through
    ///
    /// # Panics
    /// Panics in debug mode if `target` is not a positive finite price
    #[must_use]
    pub fn new(target: f64) -> Self {
        debug_assert!(
            target.is_finite() && target > 0.0,
            "Target price must be positive"
        );
        Self {
            target,
            attempts: Default::default(),
            finished: false,
            solved: false,
        }
    }

    /// Apply a raw guess from the player
    ///
    /// On success exactly one empty slot is filled and the new attempt is
    /// returned. On error the state is unchanged.
    ///
    /// # Errors
    /// - [`GuessError::GameAlreadyFinished`] if no further guesses are accepted
    /// - [`GuessError::InvalidGuessFormat`] if `raw` is not a number
    ///
    /// # Examples
    /// ```
    /// use pricedle::core::GuessOutcome;
    /// use pricedle::game::GameState;
    ///
    /// let mut state = GameState::new(19.99);
    /// let attempt = state.apply_guess("20,00").unwrap();
    /// assert_eq!(attempt.outcome(), GuessOutcome::Correct);
    /// assert!(state.is_solved());
    /// ```
    pub fn apply_guess(&mut self, raw: &str) -> Result<&Attempt, GuessError> {
        if self.finished {
            return Err(GuessError::GameAlreadyFinished);
        }

        let guess = parse_guess(raw)?;

        let index = self
            .attempts
            .iter()
            .position(Option::is_none)
            .ok_or(GuessError::GameAlreadyFinished)?;

        let tier = FeedbackTier::classify(guess, self.target);
        let outcome = GuessOutcome::resolve(guess, self.target, tier);

        if outcome == GuessOutcome::Correct {
            self.solved = true;
            self.finished = true;
        }

        if index == MAX_ATTEMPTS - 1 {
            self.finished = true;
        }

        debug!(slot = index, guess, %tier, %outcome, "guess applied");

        let attempt = self.attempts[index].insert(Attempt {
            formatted_guess: format_guess(guess),
            outcome,
            tier,
        });

        Ok(&*attempt)
    }

    /// The price being guessed
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// All slots, empty ones included
    #[must_use]
    pub const fn attempts(&self) -> &[Option<Attempt>; MAX_ATTEMPTS] {
        &self.attempts
    }

    /// Filled slots in order
    pub fn filled(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter().map_while(Option::as_ref)
    }

    /// Most recent attempt, if any
    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.filled().last()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.filled().count()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        if self.finished {
            0
        } else {
            MAX_ATTEMPTS - self.attempts_used()
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Check that this state could have been produced by `apply_guess`
    ///
    /// Used to reject persisted blobs that parse but describe an impossible
    /// game.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if !(self.target.is_finite() && self.target > 0.0) {
            return false;
        }

        let used = self.attempts_used();

        // No gaps: nothing filled after the first empty slot
        if self.attempts[used..].iter().any(Option::is_some) {
            return false;
        }

        // Correct only ever on the last filled slot, and only from the green tier
        for (i, attempt) in self.filled().enumerate() {
            let correct = attempt.outcome == GuessOutcome::Correct;
            if correct != attempt.tier.is_correct() || (correct && i + 1 != used) {
                return false;
            }
        }

        let any_correct = self
            .last_attempt()
            .is_some_and(|a| a.outcome == GuessOutcome::Correct);
        if self.solved != any_correct {
            return false;
        }

        self.finished == (self.solved || used == MAX_ATTEMPTS)
    }
}
