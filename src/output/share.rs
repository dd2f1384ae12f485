//! Share summary of a finished game
//!
//! A compact JSON payload players can paste elsewhere: one entry per filled
//! slot with its colour token, direction and the play number.

use serde::Serialize;

use crate::game::GameState;

/// One filled slot in the share payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareItem {
    pub color: &'static str,
    pub result: &'static str,
    pub counter: u64,
}

/// Build share entries for every filled slot
#[must_use]
pub fn share_items(state: &GameState, counter: u64) -> Vec<ShareItem> {
    state
        .filled()
        .map(|attempt| ShareItem {
            color: attempt.tier().label(),
            result: attempt.outcome().as_str(),
            counter,
        })
        .collect()
}

/// Serialise the share payload
///
/// # Errors
/// Returns an error if serialisation fails.
pub fn share_json(state: &GameState, counter: u64) -> serde_json::Result<String> {
    serde_json::to_string(&share_items(state, counter))
}
