//! Data-access error types.

use thiserror::Error;

/// Errors from repository operations.
///
/// Absence of a row is NOT an error — lookups return `Ok(None)` or an empty
/// vec. The variants here split along the recovery boundary: transport and
/// HTTP failures are recoverable by user-initiated retry (re-navigation),
/// while integrity violations are fatal to the requesting view.
#[derive(Debug, Error)]
pub enum DataError {
    /// The store could not be reached or the request failed in flight.
    #[error("store unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store request failed: HTTP {status}")]
    Status { status: u16, body: String },

    /// The response decoded to something the entity types reject — an
    /// out-of-enumeration status, a missing column, a malformed timestamp.
    /// Indicates the remote schema and this portal have drifted.
    #[error("data integrity violation: {0}")]
    Integrity(String),
}

impl DataError {
    /// Whether re-issuing the same read may succeed (transport-class
    /// failures) as opposed to schema drift, which will not heal on retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}
