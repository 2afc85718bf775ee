use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `hearth-auth` from the stored session token, consumed by the
/// CLI and the remote store adapter. Contains only data fields — no auth
/// logic, no credential exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserIdentity {
    /// Backend user ID (from the JWT `sub` claim).
    pub user_id: String,
    /// Email address, when the token carries one.
    pub email: Option<String>,
}
