//! Voter-registry chaincode.
//!
//! [`VoterRegistry`] holds the transaction handlers; [`Chaincode`] is the
//! name-based entry point a host drives, returning status/payload
//! [`Response`]s the way the ledger platform expects.

pub mod contract;
pub mod dispatch;
pub mod error;
pub mod metadata;
pub mod seed;

pub use contract::VoterRegistry;
pub use dispatch::{Chaincode, Response, Transaction};
pub use error::ContractError;
pub use metadata::{ChaincodeMetadata, TransactionMetadata};
pub use seed::seed_records;
