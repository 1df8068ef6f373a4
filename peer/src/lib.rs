//! Local peer for the ATCC chaincode.
//!
//! Plays the ledger platform's part for development and tests: each
//! transaction is simulated against committed world state, its writes are
//! buffered, and only a successful submitted transaction is committed.

pub mod config;
pub mod error;
pub mod logging;
pub mod peer;
pub mod simulator;
pub mod tx_id;

pub use config::PeerConfig;
pub use error::PeerError;
pub use logging::{init_logging, LogFormat};
pub use peer::{Peer, TxOutcome};
pub use simulator::TxSimulator;
