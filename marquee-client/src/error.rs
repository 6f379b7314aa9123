//! Reservation client errors

use thiserror::Error;

/// Error from the remote reservation procedure
#[derive(Debug, Error)]
pub enum ReserveError {
    /// HTTP transport failed (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Tickets are not currently on sale
    #[error("Tickets not on sale")]
    SalesClosed,

    /// The service answered but the body was not usable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service rejected the booking
    #[error("Reservation rejected: {0}")]
    Rejected(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for reservation calls
pub type ReserveResult<T> = Result<T, ReserveError>;
