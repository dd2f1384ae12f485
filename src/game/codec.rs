//! Session blob encoding for [`GameState`]
//!
//! The blob is plain JSON. Decoding is fail-open: anything that is missing,
//! unparsable, or describes an impossible game is replaced by a fresh
//! play-through against the caller's target.

use tracing::warn;

use super::GameState;

/// Encode a state into an opaque session blob
#[must_use]
pub fn encode(state: &GameState) -> String {
    // Serialising plain data with string keys cannot fail
    serde_json::to_string(state).unwrap_or_default()
}

/// Decode a session blob, falling back to a fresh state bound to `target`
///
/// # Examples
/// ```
/// use pricedle::game::{GameState, decode, encode};
///
/// let mut state = GameState::new(4.99);
/// state.apply_guess("3").unwrap();
///
/// assert_eq!(decode(Some(encode(&state).as_str()), 4.99), state);
/// assert_eq!(decode(Some("{garbage}"), 4.99), GameState::new(4.99));
/// assert_eq!(decode(None, 4.99), GameState::new(4.99));
/// ```
#[must_use]
pub fn decode(blob: Option<&str>, target: f64) -> GameState {
    let Some(blob) = blob.filter(|b| !b.trim().is_empty()) else {
        return GameState::new(target);
    };

    match serde_json::from_str::<GameState>(blob) {
        Ok(state) if state.is_consistent() => state,
        Ok(_) => {
            warn!("stored game state is inconsistent, starting a new play-through");
            GameState::new(target)
        }
        Err(e) => {
            warn!("stored game state is unreadable ({e}), starting a new play-through");
            GameState::new(target)
        }
    }
}
