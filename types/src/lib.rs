//! Fundamental types for the ATCC voter-registry chaincode.
//!
//! This crate defines the record persisted in world state and its
//! deterministic byte encoding. It is shared by the contract and the host.

pub mod error;
pub mod record;

pub use error::TypesError;
pub use record::VoterRecord;
