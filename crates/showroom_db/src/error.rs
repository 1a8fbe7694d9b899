//! Error types for the database client

use thiserror::Error;

/// Errors that can occur when working with the reservation store
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// Error with database transaction
    #[error("Database transaction error: {0}")]
    TransactionError(String),

    /// An overlapping reservation already exists, or a conditional
    /// transition found the record in the wrong status
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A stored row could not be decoded into a domain value
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}
