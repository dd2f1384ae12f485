//! Directory-backed session store
//!
//! One file per key. Keys are reduced to `[A-Za-z0-9._-]` before being used
//! as file names; with no path separators left a key can never escape the
//! directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::SessionStore;
use crate::error::Result;

/// Session store writing one file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let name = if name.is_empty() { "_".to_string() } else { name };

        self.dir.join(format!("{name}.json"))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        fs::write(&path, value)?;
        debug!("stored session '{key}' at {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("nobody").unwrap(), None);
    }

    #[test]
    fn put_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("sessions"));

        store.put("player-1", "{\"x\":1}").unwrap();

        assert_eq!(
            store.get("player-1").unwrap().as_deref(),
            Some("{\"x\":1}")
        );
        assert!(store.dir().join("player-1.json").exists());
    }

    #[test]
    fn keys_cannot_escape_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.put("../../etc/passwd", "nope").unwrap();

        assert!(dir.path().join(".._.._etc_passwd.json").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(
            store.get("../../etc/passwd").unwrap().as_deref(),
            Some("nope")
        );
    }

    #[test]
    fn dotted_keys_get_their_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.put("alice", "state").unwrap();
        store.put("alice.product", "product").unwrap();
        store.put("alice_product", "other").unwrap();

        assert_eq!(store.get("alice").unwrap().as_deref(), Some("state"));
        assert_eq!(store.get("alice.product").unwrap().as_deref(), Some("product"));
        assert!(dir.path().join("alice.product.json").exists());
    }

    #[test]
    fn put_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.put("k", "first").unwrap();
        store.put("k", "second").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }
}
