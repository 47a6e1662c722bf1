//! In-memory storage backend

use std::collections::HashMap;

use super::traits::{PersistenceStore, StorageError};

/// `HashMap` backed store for tests and headless use
///
/// Reads and writes can be switched to fail to exercise degraded paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a single pre-seeded entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored value, bypassing failure simulation
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read(format!("simulated read failure for {key}")));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), Ok(None));
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
        store.set("k", "w").unwrap();
        assert_eq!(store.raw("k"), Some("w"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_simulated_failures() {
        let mut store = MemoryStore::with_entry("k", "v");
        store.set_fail_reads(true);
        assert!(matches!(store.get("k"), Err(StorageError::Read(_))));

        store.set_fail_writes(true);
        assert!(matches!(store.set("k", "x"), Err(StorageError::Write(_))));
        assert_eq!(store.raw("k"), Some("v"));
    }
}
