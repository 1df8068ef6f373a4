//! Errors raised while encoding or decoding records.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
