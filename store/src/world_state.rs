//! Committed world state, as seen by a host.

use std::collections::BTreeMap;

use crate::{KeyValue, StoreError};

/// Writes buffered by one simulated transaction, ordered by key.
///
/// A later write to the same key replaces the earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteSet {
    writes: BTreeMap<String, Vec<u8>>,
}

impl WriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.writes.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.writes.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.writes.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Durable key-value state that transactions are simulated against and
/// committed into.
pub trait WorldState {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Entries with keys in `[start, end)`, ascending. Empty bounds are open.
    fn range(&self, start: &str, end: &str) -> Result<Vec<KeyValue>, StoreError>;

    /// Apply every write in `writes` atomically.
    fn apply(&self, writes: &WriteSet) -> Result<(), StoreError>;

    fn len(&self) -> Result<u64, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
