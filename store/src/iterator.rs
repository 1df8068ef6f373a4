//! Range-query iteration over world state.

use std::collections::VecDeque;

use crate::StoreError;

/// One entry returned by a range query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Cursor handed out by [`ChaincodeStub::get_state_by_range`].
///
/// Entries are yielded in ascending key order. `close` releases whatever
/// the host holds for the query and must be called exactly once; wrap the
/// iterator in a [`QueryGuard`] to get that on every exit path.
///
/// [`ChaincodeStub::get_state_by_range`]: crate::ChaincodeStub::get_state_by_range
pub trait StateQueryIterator {
    fn has_next(&self) -> bool;

    fn next(&mut self) -> Result<KeyValue, StoreError>;

    fn close(&mut self) -> Result<(), StoreError>;
}

/// A query iterator over entries materialised when the query was opened.
pub struct SnapshotIterator {
    entries: VecDeque<KeyValue>,
    closed: bool,
}

impl SnapshotIterator {
    pub fn new(entries: Vec<KeyValue>) -> Self {
        Self {
            entries: entries.into(),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl StateQueryIterator for SnapshotIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next(&mut self) -> Result<KeyValue, StoreError> {
        if self.closed {
            return Err(StoreError::IteratorClosed);
        }
        self.entries.pop_front().ok_or(StoreError::IteratorExhausted)
    }

    fn close(&mut self) -> Result<(), StoreError> {
        self.closed = true;
        self.entries.clear();
        Ok(())
    }
}

/// Scope guard that closes a query iterator when dropped.
///
/// Also an [`Iterator`] over `Result<KeyValue, StoreError>`, so callers can
/// bail out with `?` mid-scan and still release the query.
pub struct QueryGuard<'a> {
    inner: Box<dyn StateQueryIterator + 'a>,
    closed: bool,
}

impl<'a> QueryGuard<'a> {
    pub fn new(inner: Box<dyn StateQueryIterator + 'a>) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    pub fn has_next(&self) -> bool {
        !self.closed && self.inner.has_next()
    }

    /// Close now and report the host's close error, if any.
    pub fn close(mut self) -> Result<(), StoreError> {
        self.closed = true;
        self.inner.close()
    }
}

impl Iterator for QueryGuard<'_> {
    type Item = Result<KeyValue, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        Some(self.inner.next())
    }
}

impl Drop for QueryGuard<'_> {
    fn drop(&mut self) {
        if !self.closed {
            // No caller left to hand a close error to.
            let _ = self.inner.close();
        }
    }
}
