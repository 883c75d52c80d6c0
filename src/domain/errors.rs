use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Store error: {0}")]
    Store(String),
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}
