//! Session storage for game state blobs
//!
//! The store only moves opaque strings around; encoding and the fail-open
//! policy live in [`crate::game`]. Stores take `&mut self` for writes, so a
//! single owner serialises read-modify-write per key.

mod file;
mod memory;
mod round;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use round::{Round, Session};

use tracing::warn;

use crate::error::Result;
use crate::game::{self, GameState};

/// Key-value store for session blobs
pub trait SessionStore {
    /// Fetch the blob stored under `key`, `None` if absent
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reduce a session name to `[A-Za-z0-9_-]`
///
/// Session keys never contain `.`, which leaves it free as the separator for
/// records stored alongside a session.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let key: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if key.is_empty() { "_".to_string() } else { key }
}

/// Load the game for `key`, starting fresh against `target` if nothing usable is stored
pub fn load_state<S: SessionStore + ?Sized>(store: &S, key: &str, target: f64) -> GameState {
    let blob = store.get(key).unwrap_or_else(|e| {
        warn!("failed to read session '{key}': {e}");
        None
    });
    game::decode(blob.as_deref(), target)
}

/// Persist the game for `key`
///
/// # Errors
/// Returns an error if the store rejects the write.
pub fn save_state<S: SessionStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &GameState,
) -> Result<()> {
    store.put(key, &game::encode(state))
}
