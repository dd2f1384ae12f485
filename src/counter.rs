//! Play counter persisted in a small text file
//!
//! Each new play-through bumps the number, which is shown to players as
//! "play #N". The game logic never looks at it.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

pub struct PlayCounter;

impl PlayCounter {
    /// Increment the counter stored at `path` and return the new value
    ///
    /// A missing file starts the count at 1.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCounter`] if the file does not hold a number,
    /// or an I/O error if it cannot be read or written.
    pub fn increment<P: AsRef<Path>>(path: P) -> Result<u64> {
        let path = path.as_ref();
        let next = Self::read(path)?.map_or(1, |current| current.saturating_add(1));

        fs::write(path, next.to_string())?;
        debug!("play counter at {} is now {next}", path.display());
        Ok(next)
    }

    /// Read the current counter value, `None` if the file does not exist yet
    ///
    /// # Errors
    /// Returns [`Error::InvalidCounter`] if the file does not hold a number,
    /// or an I/O error if it cannot be read.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Option<u64>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let trimmed = content.trim();
        trimmed
            .parse::<u64>()
            .map(Some)
            .map_err(|_| Error::InvalidCounter(trimmed.to_string()))
    }
}
