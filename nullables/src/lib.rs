//! Nullable infrastructure for deterministic testing.
//!
//! The world state and the transaction stub are abstracted behind traits in
//! `atcc-store`. This crate provides test-friendly implementations that:
//! - Keep everything in memory
//! - Can be told to fail on demand
//! - Never touch the filesystem
//!
//! Usage: swap the LMDB world state or the peer's simulator for these in tests.

pub mod stub;
pub mod world_state;

pub use stub::NullStub;
pub use world_state::NullWorldState;

use std::sync::{Mutex, MutexGuard};

use atcc_store::StoreError;

pub(crate) fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    m.lock().map_err(|_| StoreError::Backend("nullable state mutex poisoned".into()))
}
