use thiserror::Error;

/// Inputs rejected by the index and document constructors. Rejection never
/// leaves partial state behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("document id must not be empty")]
    EmptyDocumentId,
    #[error("document score must be >= 0, got {0}")]
    NegativeScore(i64),
    #[error("score update must be > 0, got {0}")]
    NonPositiveScore(i64),
    #[error("word must not be empty")]
    EmptyWord,
    #[error("document id must be a non-negative 32-bit integer, got {0}")]
    InvalidDocId(i64),
    #[error("count must be a non-negative 32-bit integer, got {0}")]
    InvalidCount(i64),
}
