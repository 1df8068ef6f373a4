//! Transaction execution: simulate, then commit or discard.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use atcc_contract::{Chaincode, Response};
use atcc_store::{WorldState, WriteSet};
use atcc_store_lmdb::LmdbWorldState;

use crate::tx_id::transaction_id;
use crate::{PeerConfig, PeerError, TxSimulator};

/// Result of running one transaction on the peer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutcome {
    pub tx_id: String,
    pub response: Response,
    /// Number of keys the transaction wrote during simulation.
    pub writes: usize,
    /// Whether the writes reached world state.
    pub committed: bool,
}

impl TxOutcome {
    /// The payload of a successful transaction, or the rejection.
    pub fn into_payload(self) -> Result<Vec<u8>, PeerError> {
        if self.response.is_ok() {
            Ok(self.response.payload)
        } else {
            Err(PeerError::Rejected {
                tx_id: self.tx_id,
                message: self.response.message,
            })
        }
    }
}

/// Runs chaincode transactions against a world state.
///
/// Transactions are executed one at a time; the caller owns any
/// cross-thread sharing.
pub struct Peer<S: WorldState> {
    state: S,
    chaincode: Chaincode,
    nonce: u64,
    sequence: AtomicU64,
}

impl<S: WorldState> Peer<S> {
    pub fn new(state: S, chaincode: Chaincode) -> Self {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_nonce(state, chaincode, nonce)
    }

    /// Build a peer whose transaction ids are reproducible.
    pub fn with_nonce(state: S, chaincode: Chaincode, nonce: u64) -> Self {
        Self {
            state,
            chaincode,
            nonce,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn chaincode(&self) -> &Chaincode {
        &self.chaincode
    }

    /// Run `function` and commit its writes if it succeeds.
    ///
    /// A rejected transaction is reported through the outcome's response and
    /// leaves world state untouched. `Err` means the commit itself failed.
    pub fn submit(&self, function: &str, args: &[String]) -> Result<TxOutcome, PeerError> {
        let (tx_id, response, writes) = self.simulate(function, args);

        if !response.is_ok() {
            warn!(%tx_id, function, message = %response.message, "transaction rejected");
            return Ok(TxOutcome {
                tx_id,
                response,
                writes: writes.len(),
                committed: false,
            });
        }

        self.state.apply(&writes)?;
        info!(%tx_id, function, writes = writes.len(), "transaction committed");
        Ok(TxOutcome {
            tx_id,
            response,
            writes: writes.len(),
            committed: true,
        })
    }

    /// Run `function` read-only: any writes it makes are discarded.
    pub fn evaluate(&self, function: &str, args: &[String]) -> TxOutcome {
        let (tx_id, response, writes) = self.simulate(function, args);
        if !response.is_ok() {
            warn!(%tx_id, function, message = %response.message, "query failed");
        }
        TxOutcome {
            tx_id,
            response,
            writes: writes.len(),
            committed: false,
        }
    }

    fn simulate(&self, function: &str, args: &[String]) -> (String, Response, WriteSet) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let tx_id = transaction_id(self.nonce, sequence, function, args);
        let simulator = TxSimulator::new(tx_id.clone(), &self.state);
        let response = self.chaincode.invoke(&simulator, function, args);
        (tx_id, response, simulator.into_write_set())
    }
}

impl Peer<LmdbWorldState> {
    /// Open the LMDB world state described by `config`.
    pub fn open(config: &PeerConfig) -> Result<Self, PeerError> {
        let state = LmdbWorldState::open(&config.data_dir, config.map_size)?;
        info!(
            data_dir = %state.path().display(),
            chaincode = %config.chaincode_name,
            "peer opened"
        );
        Ok(Self::new(state, Chaincode::new(config.chaincode_name.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atcc_nullables::NullWorldState;

    fn peer() -> Peer<NullWorldState> {
        Peer::with_nonce(NullWorldState::new(), Chaincode::default(), 42)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn submitted_init_is_committed() {
        let peer = peer();
        let outcome = peer.submit("InitLedger", &[]).unwrap();
        assert!(outcome.committed);
        assert_eq!(outcome.writes, 6);
        assert_eq!(peer.state().len().unwrap(), 6);
    }

    #[test]
    fn evaluated_writes_are_discarded() {
        let peer = peer();
        let outcome = peer.evaluate("InitLedger", &[]);
        assert!(outcome.response.is_ok());
        assert!(!outcome.committed);
        assert_eq!(outcome.writes, 6);
        assert!(peer.state().is_empty().unwrap());
    }

    #[test]
    fn rejected_submit_commits_nothing() {
        let peer = peer();
        peer.submit("InitLedger", &[]).unwrap();
        let outcome = peer
            .submit("CreateRecord", &args(&["asset1", "a", "b", "c", "d"]))
            .unwrap();
        assert!(!outcome.committed);
        assert_eq!(outcome.response.message, "the record asset1 already exists");
        assert!(matches!(outcome.into_payload(), Err(PeerError::Rejected { .. })));
    }

    #[test]
    fn commit_failure_is_an_error() {
        let peer = peer();
        peer.state().fail_apply(true);
        assert!(matches!(peer.submit("InitLedger", &[]), Err(PeerError::Store(_))));
    }

    #[test]
    fn every_transaction_gets_a_fresh_id() {
        let peer = peer();
        let a = peer.evaluate("GetAllVotes", &[]);
        let b = peer.evaluate("GetAllVotes", &[]);
        assert_ne!(a.tx_id, b.tx_id);
    }
}
