//! Transaction simulation.
//!
//! Reads go to committed world state; writes are buffered in a write set
//! and only reach world state if the peer commits them. A transaction does
//! not read its own pending writes.

use std::cell::RefCell;

use atcc_store::{
    validate_range_bound, validate_simple_key, ChaincodeStub, SnapshotIterator,
    StateQueryIterator, StoreError, WorldState, WriteSet,
};

/// [`ChaincodeStub`] for one transaction, backed by a [`WorldState`].
pub struct TxSimulator<'a, S: WorldState + ?Sized> {
    tx_id: String,
    state: &'a S,
    writes: RefCell<WriteSet>,
}

impl<'a, S: WorldState + ?Sized> TxSimulator<'a, S> {
    pub fn new(tx_id: impl Into<String>, state: &'a S) -> Self {
        Self {
            tx_id: tx_id.into(),
            state,
            writes: RefCell::new(WriteSet::new()),
        }
    }

    pub fn into_write_set(self) -> WriteSet {
        self.writes.into_inner()
    }
}

impl<S: WorldState + ?Sized> ChaincodeStub for TxSimulator<'_, S> {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_simple_key(key)?;
        self.state.get(key)
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        validate_simple_key(key)?;
        self.writes.borrow_mut().put(key, value.to_vec());
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateQueryIterator + '_>, StoreError> {
        validate_range_bound(start)?;
        validate_range_bound(end)?;
        Ok(Box::new(SnapshotIterator::new(self.state.range(start, end)?)))
    }
}
