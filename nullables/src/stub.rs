//! Nullable chaincode stub — in-memory world state with failure injection.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use atcc_store::{
    in_range, validate_range_bound, validate_simple_key, ChaincodeStub, KeyValue,
    SnapshotIterator, StateQueryIterator, StoreError,
};

use crate::lock;

/// A [`ChaincodeStub`] that writes straight into an in-memory map.
///
/// Unlike the peer's simulator, writes are visible to later reads in the
/// same stub. Failures can be switched on per operation.
pub struct NullStub {
    tx_id: String,
    state: Mutex<BTreeMap<String, Vec<u8>>>,
    puts_before_failure: Mutex<Option<usize>>,
    fail_gets: AtomicBool,
    fail_range: AtomicBool,
    fail_iteration_at: Mutex<Option<usize>>,
    iterators: Arc<IteratorCounts>,
}

#[derive(Default)]
struct IteratorCounts {
    opened: AtomicUsize,
    closed: AtomicUsize,
}

impl NullStub {
    pub fn new() -> Self {
        Self::with_tx_id("null-tx")
    }

    pub fn with_tx_id(tx_id: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            state: Mutex::new(BTreeMap::new()),
            puts_before_failure: Mutex::new(None),
            fail_gets: AtomicBool::new(false),
            fail_range: AtomicBool::new(false),
            fail_iteration_at: Mutex::new(None),
            iterators: Arc::new(IteratorCounts::default()),
        }
    }

    /// Store raw bytes under `key`, bypassing validation and failure injection.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        if let Ok(mut state) = lock(&self.state) {
            state.insert(key.into(), value.into());
        }
    }

    /// Raw bytes currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        lock(&self.state).ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.state).map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Let `n` more puts succeed, then fail every put after that.
    pub fn fail_puts_after(&self, n: usize) {
        if let Ok(mut slot) = lock(&self.puts_before_failure) {
            *slot = Some(n);
        }
    }

    pub fn fail_gets(&self, fail: bool) {
        self.fail_gets.store(fail, Ordering::SeqCst);
    }

    pub fn fail_range(&self, fail: bool) {
        self.fail_range.store(fail, Ordering::SeqCst);
    }

    /// Make the `index`-th `next()` (zero-based) of every opened iterator fail.
    pub fn fail_iteration_at(&self, index: usize) {
        if let Ok(mut slot) = lock(&self.fail_iteration_at) {
            *slot = Some(index);
        }
    }

    pub fn opened_iterators(&self) -> usize {
        self.iterators.opened.load(Ordering::SeqCst)
    }

    pub fn closed_iterators(&self) -> usize {
        self.iterators.closed.load(Ordering::SeqCst)
    }

    fn take_put_permit(&self) -> Result<(), StoreError> {
        let mut slot = lock(&self.puts_before_failure)?;
        match slot.as_mut() {
            Some(0) => Err(StoreError::Backend("injected put failure".into())),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Default for NullStub {
    fn default() -> Self {
        Self::new()
    }
}

impl ChaincodeStub for NullStub {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_simple_key(key)?;
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected get failure".into()));
        }
        Ok(lock(&self.state)?.get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        validate_simple_key(key)?;
        self.take_put_permit()?;
        lock(&self.state)?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateQueryIterator + '_>, StoreError> {
        validate_range_bound(start)?;
        validate_range_bound(end)?;
        if self.fail_range.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected range failure".into()));
        }
        let entries = lock(&self.state)?
            .iter()
            .filter(|(k, _)| in_range(k, start, end))
            .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
            .collect();
        self.iterators.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountingIterator {
            inner: SnapshotIterator::new(entries),
            counts: self.iterators.clone(),
            yielded: 0,
            fail_at: *lock(&self.fail_iteration_at)?,
        }))
    }
}

struct CountingIterator {
    inner: SnapshotIterator,
    counts: Arc<IteratorCounts>,
    yielded: usize,
    fail_at: Option<usize>,
}

impl StateQueryIterator for CountingIterator {
    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Result<KeyValue, StoreError> {
        let index = self.yielded;
        self.yielded += 1;
        if self.fail_at == Some(index) {
            return Err(StoreError::Backend("injected iteration failure".into()));
        }
        self.inner.next()
    }

    fn close(&mut self) -> Result<(), StoreError> {
        if !self.inner.is_closed() {
            self.counts.closed.fetch_add(1, Ordering::SeqCst);
        }
        self.inner.close()
    }
}
