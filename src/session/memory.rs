use rustc_hash::FxHashMap;

use super::SessionStore;
use crate::error::Result;

/// In-process session store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let mut store = MemoryStore::default();
        assert!(store.is_empty());

        store.put("a", "1").unwrap();
        store.put("a", "2").unwrap();
        store.put("b", "3").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("c").unwrap(), None);
        assert_eq!(store.len(), 2);
    }
}
