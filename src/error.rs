use thiserror::Error;

/// Rejected guess; the game state is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Invalid guess '{0}': expected a price like 4.99 or 4,99")]
    InvalidGuessFormat(String),

    #[error("Game already finished")]
    GameAlreadyFinished,
}

/// Errors from the collaborators around the game (stores, price source, counter)
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid price {0}: prices must be positive")]
    InvalidPrice(f64),

    #[error("Catalog contains no usable products")]
    EmptyCatalog,

    #[error("Invalid number in counter file: {0:?}")]
    InvalidCounter(String),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
