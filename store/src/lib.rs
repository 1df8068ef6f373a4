//! World-state traits shared by the chaincode and its hosts.
//!
//! The contract only sees [`TransactionContext`] and [`ChaincodeStub`].
//! Hosts (the in-memory nullables, the LMDB-backed peer) implement them on
//! top of a committed [`WorldState`]. The rest of the codebase depends only
//! on the traits.

pub mod error;
pub mod iterator;
pub mod key;
pub mod stub;
pub mod world_state;

pub use error::StoreError;
pub use iterator::{KeyValue, QueryGuard, SnapshotIterator, StateQueryIterator};
pub use key::{in_range, validate_range_bound, validate_simple_key};
pub use stub::{ChaincodeStub, TransactionContext};
pub use world_state::{WorldState, WriteSet};
