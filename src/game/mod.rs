//! Game state machine and its session codec

mod codec;
mod state;

pub use codec::{decode, encode};
pub use state::{Attempt, GameState, MAX_ATTEMPTS};
