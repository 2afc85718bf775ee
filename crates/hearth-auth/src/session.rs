//! Observable authentication state.
//!
//! [`AuthSession`] is the process-wide "who is signed in" value with an
//! explicit lifecycle: created in `Resolving`, resolved once at startup from
//! the stored token (gating the portal's first paint), updated on sign-in
//! and sign-out. Subscribers watch for changes and must discard any cached
//! customer/project data when the state leaves `SignedIn`, so a later
//! sign-in as a different user can never see stale data.

use chrono::Utc;
use tokio::sync::watch;

use hearth_core::identity::UserIdentity;

use crate::claims::SessionClaims;
use crate::error::AuthError;
use crate::token_store;

/// Current-user identity, or the lack of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Startup: the stored session has not been inspected yet.
    Resolving,
    /// A usable session token exists for this user.
    SignedIn(UserIdentity),
    /// No session — the portal runs in demo mode.
    SignedOut,
}

impl AuthState {
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}

/// Process-wide auth session handle.
pub struct AuthSession {
    tx: watch::Sender<AuthState>,
    token: Option<String>,
}

impl AuthSession {
    /// Create an unresolved session.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AuthState::Resolving);
        Self { tx, token: None }
    }

    /// Inspect the stored token and publish the resolved state.
    ///
    /// Missing, malformed, or expired tokens all resolve to `SignedOut`
    /// (the demo path), never to an error — an unusable stored session is
    /// indistinguishable from no session.
    pub fn resolve(&mut self) -> AuthState {
        let (state, token) = resolve_token(token_store::load());
        self.token = token;
        self.tx.send_replace(state.clone());
        state
    }

    /// Store a token handed over by the backend's sign-in flow and publish
    /// `SignedIn`. No credential validation happens here.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedToken`] if the token payload cannot be
    /// decoded, or [`AuthError::TokenStore`] if it cannot be persisted.
    pub fn sign_in_with_token(&mut self, token: &str) -> Result<UserIdentity, AuthError> {
        let claims = SessionClaims::decode_unverified(token)?;
        if claims.is_expired_at(Utc::now()) {
            return Err(AuthError::MalformedToken("token is already expired".into()));
        }
        token_store::store(token)?;
        let identity = claims.to_identity();
        self.token = Some(token.to_string());
        self.tx.send_replace(AuthState::SignedIn(identity.clone()));
        Ok(identity)
    }

    /// Delete stored credentials and publish `SignedOut`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] if the credentials file cannot be
    /// removed; the in-memory state is torn down regardless.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.token = None;
        self.tx.send_replace(AuthState::SignedOut);
        token_store::delete()
    }

    /// The raw bearer token for the remote store, when signed in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> AuthState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure resolution step: stored token → state (+ retained token).
fn resolve_token(stored: Option<String>) -> (AuthState, Option<String>) {
    let Some(token) = stored else {
        return (AuthState::SignedOut, None);
    };

    match SessionClaims::decode_unverified(&token) {
        Ok(claims) if claims.is_expired_at(Utc::now()) => {
            tracing::warn!("stored session token is expired — continuing signed out");
            (AuthState::SignedOut, None)
        }
        Ok(claims) => (AuthState::SignedIn(claims.to_identity()), Some(token)),
        Err(error) => {
            tracing::warn!(%error, "stored session token is unusable — continuing signed out");
            (AuthState::SignedOut, None)
        }
    }
}
