//! Game orchestration shared by every front end
//!
//! Ties together the session store, the price source and the play counter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::GameConfig;
use crate::counter::PlayCounter;
use crate::game::Attempt;
use crate::price::PriceSource;
use crate::session::{FileStore, Round, Session, SessionStore};

/// A player's game: their session plus where new rounds come from
pub struct Game<S: SessionStore = FileStore> {
    session: Session<S>,
    source: Box<dyn PriceSource>,
    counter_file: PathBuf,
}

impl Game<FileStore> {
    /// Open the game described by the configuration
    ///
    /// # Errors
    /// Returns an error if the price source cannot be set up.
    pub fn open(config: &GameConfig) -> Result<Self> {
        let source = config
            .price_source()
            .context("failed to set up price source")?;
        Ok(Self::new(
            config.store(),
            &config.session,
            source,
            &config.counter_file,
        ))
    }
}

impl<S: SessionStore> Game<S> {
    pub fn new(
        store: S,
        session: &str,
        source: Box<dyn PriceSource>,
        counter_file: impl AsRef<Path>,
    ) -> Self {
        Self {
            session: Session::new(store, session),
            source,
            counter_file: counter_file.as_ref().to_path_buf(),
        }
    }

    /// Start a new round and bump the play counter
    ///
    /// The counter only moves once the round is stored.
    ///
    /// # Errors
    /// Returns an error if the price source, store or counter fail.
    pub fn new_round(&mut self) -> Result<Round> {
        let round = self
            .session
            .start(&*self.source)
            .context("failed to start a new round")?;
        PlayCounter::increment(&self.counter_file).context("failed to update play counter")?;
        Ok(round)
    }

    /// The round in progress, starting one if the session has none
    ///
    /// # Errors
    /// Returns an error if a new round is needed and cannot be started.
    pub fn current_round(&mut self) -> Result<Round> {
        if self.session.has_round() {
            Ok(self.session.resume(&*self.source)?)
        } else {
            self.new_round()
        }
    }

    /// Apply a guess to `round` and persist it
    ///
    /// # Errors
    /// Returns [`crate::Error::Guess`] for a rejected guess, or a store error.
    pub fn submit(&mut self, round: &mut Round, raw: &str) -> crate::Result<Attempt> {
        self.session.submit(round, raw)
    }

    /// Current play number for display, if one can be read
    #[must_use]
    pub fn play_number(&self) -> Option<u64> {
        PlayCounter::read(&self.counter_file).unwrap_or_else(|e| {
            warn!("failed to read play counter: {e}");
            None
        })
    }

    #[must_use]
    pub fn session_key(&self) -> &str {
        self.session.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::core::GuessOutcome;
    use crate::error::GuessError;
    use crate::price::{Catalog, FixedPrice};
    use crate::session::MemoryStore;

    fn game(dir: &Path) -> Game<MemoryStore> {
        Game::new(
            MemoryStore::default(),
            "p1",
            Box::new(FixedPrice::new("Tea", 10.0).unwrap()),
            dir.join("counter"),
        )
    }

    #[test]
    fn first_round_bumps_counter() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game(dir.path());

        assert_eq!(game.play_number(), None);
        let round = game.current_round().unwrap();
        assert_eq!(round.state.attempts_used(), 0);
        assert_eq!(game.play_number(), Some(1));

        // Resuming does not count as a new play
        game.current_round().unwrap();
        assert_eq!(game.play_number(), Some(1));

        game.new_round().unwrap();
        assert_eq!(game.play_number(), Some(2));
    }

    #[test]
    fn guesses_persist_between_calls() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game(dir.path());

        let mut round = game.current_round().unwrap();
        let attempt = game.submit(&mut round, "5").unwrap();
        assert_eq!(attempt.outcome(), GuessOutcome::Higher);

        let resumed = game.current_round().unwrap();
        assert_eq!(resumed.state.attempts_used(), 1);
    }

    #[test]
    fn finished_round_rejects_guesses() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game(dir.path());

        let mut round = game.current_round().unwrap();
        game.submit(&mut round, "10").unwrap();

        assert!(matches!(
            game.submit(&mut round, "11"),
            Err(Error::Guess(GuessError::GameAlreadyFinished))
        ));
    }

    #[test]
    fn failed_round_does_not_bump_counter() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = Game::new(
            MemoryStore::default(),
            "p1",
            Box::new(Catalog::parse("")),
            dir.path().join("counter"),
        );

        assert!(game.current_round().is_err());
        assert!(game.new_round().is_err());
        assert_eq!(game.play_number(), None);
        assert!(!dir.path().join("counter").exists());
    }
}
