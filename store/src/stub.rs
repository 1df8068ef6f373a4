//! The transaction context handed to the chaincode by its host.

use crate::{StateQueryIterator, StoreError};

/// Per-transaction accessor to world state.
///
/// Reads see committed state; whether writes become visible, and when, is
/// decided by the host's transaction semantics.
pub trait ChaincodeStub {
    /// Identifier of the transaction this stub belongs to.
    fn tx_id(&self) -> &str;

    /// Read the value stored under `key`; `None` when absent.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Record a write of `value` under `key`.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Open a scan over `[start, end)`. Empty bounds are open-ended.
    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateQueryIterator + '_>, StoreError>;
}

/// What a contract handler receives for one invocation.
pub trait TransactionContext {
    fn stub(&self) -> &dyn ChaincodeStub;
}

impl<S: ChaincodeStub> TransactionContext for S {
    fn stub(&self) -> &dyn ChaincodeStub {
        self
    }
}
