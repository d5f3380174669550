//! Common error types for bizdir

use thiserror::Error;

/// Common result type for bizdir operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the data-access layer.
///
/// A single-row lookup that matches nothing is `Ok(None)`, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid connection parameters
    #[error("Configuration error: {0}")]
    Config(String),

    /// Handshake, auth, or network failure while opening a connection
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Statement execution or row decoding failure
    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),
}
