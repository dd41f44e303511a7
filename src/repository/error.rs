//! Storage error types

use thiserror::Error;

/// Errors surfaced by the store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no rows found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
