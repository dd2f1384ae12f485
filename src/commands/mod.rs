//! Command implementations

pub mod classify;
pub mod game;
pub mod simple;

pub use classify::{Classification, classify_guess};
pub use game::Game;
pub use simple::run_simple;
