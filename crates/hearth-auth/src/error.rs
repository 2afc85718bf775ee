//! Auth error types.

use thiserror::Error;

/// Errors from auth plumbing.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token could not be written to or removed from storage.
    #[error("token store error: {0}")]
    TokenStore(String),

    /// A stored token was not a decodable JWT.
    #[error("malformed session token: {0}")]
    MalformedToken(String),
}
