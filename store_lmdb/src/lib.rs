//! LMDB storage backend for the ATCC local peer.
//!
//! Implements [`atcc_store::WorldState`] using the `heed` LMDB bindings.
//! The whole world state lives in a single named database.

pub mod error;
pub mod world_state;

pub use error::LmdbError;
pub use world_state::LmdbWorldState;
