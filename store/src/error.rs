use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("query iterator already closed")]
    IteratorClosed,

    #[error("no more results in query iterator")]
    IteratorExhausted,
}
