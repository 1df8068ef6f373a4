use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeerError {
    #[error("store error: {0}")]
    Store(#[from] atcc_store::StoreError),

    #[error("LMDB error: {0}")]
    Lmdb(#[from] atcc_store_lmdb::LmdbError),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("transaction {tx_id} rejected: {message}")]
    Rejected { tx_id: String, message: String },
}
