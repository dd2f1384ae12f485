//! A player's current round: the product on offer plus its game state
//!
//! The product record is stored next to the game blob under
//! `<key>.product`, so a resumed round keeps guessing the same price. Session
//! keys are normalized and never contain `.`, so no session name can reach
//! another session's product record.

use tracing::{info, warn};

use super::{SessionStore, load_state, normalize_key, save_state};
use crate::error::Result;
use crate::game::{Attempt, GameState};
use crate::price::{PriceSource, Product};

/// Product and game state for one play-through
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub product: Product,
    pub state: GameState,
}

/// Session-scoped access to rounds in a store
pub struct Session<S: SessionStore> {
    store: S,
    key: String,
}

impl<S: SessionStore> Session<S> {
    /// Bind a store to a session, normalizing the session name into a key
    pub fn new(store: S, key: &str) -> Self {
        Self {
            store,
            key: normalize_key(key),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the session already holds a round
    #[must_use]
    pub fn has_round(&self) -> bool {
        self.stored_product().is_some()
    }

    fn product_key(&self) -> String {
        format!("{}.product", self.key)
    }

    /// Start a new play-through, replacing whatever the session held
    ///
    /// # Errors
    /// Returns an error if the source has no product or the store cannot be
    /// written.
    pub fn start(&mut self, source: &dyn PriceSource) -> Result<Round> {
        let product = source.pick()?;
        let state = GameState::new(product.price());

        // State first: a failed product write then leaves the old product
        // paired with a state for another price, which `resume` discards
        save_state(&mut self.store, &self.key, &state)?;
        let product_key = self.product_key();
        self.store.put(&product_key, &serde_json::to_string(&product)?)?;

        info!("session '{}' started a new round: {}", self.key, product.title);
        Ok(Round { product, state })
    }

    /// Resume the stored round, starting one if the session has none
    ///
    /// A stored game whose blob is unusable, or that was played against a
    /// different price, restarts against the stored product.
    ///
    /// # Errors
    /// Returns an error if a new product is needed and cannot be picked or
    /// stored.
    pub fn resume(&mut self, source: &dyn PriceSource) -> Result<Round> {
        let Some(product) = self.stored_product() else {
            return self.start(source);
        };

        let mut state = load_state(&self.store, &self.key, product.price());
        if !product.is_priced_at(state.target()) {
            warn!(
                "session '{}' holds a game for another price, starting a new play-through",
                self.key
            );
            state = GameState::new(product.price());
        }
        Ok(Round { product, state })
    }

    fn stored_product(&self) -> Option<Product> {
        let blob = match self.store.get(&self.product_key()) {
            Ok(blob) => blob?,
            Err(e) => {
                warn!("failed to read product for session '{}': {e}", self.key);
                return None;
            }
        };

        serde_json::from_str::<Product>(&blob)
            .inspect_err(|e| {
                warn!("stored product for session '{}' is unreadable: {e}", self.key);
            })
            .ok()
            .filter(|p| p.price_cents > 0)
    }

    /// Apply a guess to the round and persist the result
    ///
    /// Rejected guesses leave both the round and the store untouched.
    ///
    /// # Errors
    /// Returns [`crate::Error::Guess`] for a rejected guess, or a store error
    /// if the new state cannot be saved.
    pub fn submit(&mut self, round: &mut Round, raw: &str) -> Result<Attempt> {
        let attempt = round.state.apply_guess(raw)?.clone();
        save_state(&mut self.store, &self.key, &round.state)?;
        Ok(attempt)
    }
}
