//! Nullable world state — thread-safe in-memory committed state.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use atcc_store::{in_range, KeyValue, StoreError, WorldState, WriteSet};

use crate::lock;

/// An in-memory [`WorldState`] for testing.
pub struct NullWorldState {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
    fail_apply: AtomicBool,
}

impl NullWorldState {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            fail_apply: AtomicBool::new(false),
        }
    }

    /// Make every following `apply` fail without writing anything.
    pub fn fail_apply(&self, fail: bool) {
        self.fail_apply.store(fail, Ordering::SeqCst);
    }
}

impl Default for NullWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for NullWorldState {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn range(&self, start: &str, end: &str) -> Result<Vec<KeyValue>, StoreError> {
        Ok(lock(&self.entries)?
            .iter()
            .filter(|(k, _)| in_range(k, start, end))
            .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
            .collect())
    }

    fn apply(&self, writes: &WriteSet) -> Result<(), StoreError> {
        if self.fail_apply.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected commit failure".into()));
        }
        let mut entries = lock(&self.entries)?;
        for (key, value) in writes.iter() {
            entries.insert(key.to_string(), value.to_vec());
        }
        Ok(())
    }

    fn len(&self) -> Result<u64, StoreError> {
        Ok(lock(&self.entries)?.len() as u64)
    }
}
