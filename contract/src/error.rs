use thiserror::Error;

use atcc_store::StoreError;
use atcc_types::TypesError;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("the record {0} already exists")]
    AlreadyExists(String),

    #[error("the record {0} does not exist")]
    NotFound(String),

    #[error("failed to put to world state: {0}")]
    PutState(StoreError),

    #[error("failed to read from world state: {0}")]
    ReadState(StoreError),

    #[error("range query failed: {0}")]
    Query(StoreError),

    #[error(transparent)]
    Codec(#[from] TypesError),

    #[error("incorrect number of arguments for {function}: expected {expected}, got {got}")]
    Arguments {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("function {function} not found in contract {contract}")]
    UnknownFunction { function: String, contract: String },

    #[error("failed to encode response: {0}")]
    Response(String),
}

impl ContractError {
    /// Whether the failure is the application-level uniqueness check.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}
