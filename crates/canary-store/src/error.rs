//! Store Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unknown publisher: {0}")]
    PublisherNotFound(String),

    #[error("could not read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}
