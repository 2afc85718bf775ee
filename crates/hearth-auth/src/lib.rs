//! # hearth-auth
//!
//! Authentication collaborator for the Hearth portal.
//!
//! This crate does NOT perform credential exchange — signing in happens
//! against the backend (or its hosted pages) and hands this crate a session
//! token. What lives here:
//!
//! - tiered token storage (OS keychain → env var → `~/.hearth/credentials`)
//! - unverified JWT payload decode for identity and expiry display
//! - [`AuthSession`]: the observable current-user state the portal
//!   subscribes to, resolved once at startup and updated on sign-in/out
//!
//! Token payloads are decoded without signature verification; authorization
//! is enforced server-side by the store's row-level security.

pub mod claims;
pub mod error;
pub mod session;
pub mod token_store;

pub use claims::SessionClaims;
pub use error::AuthError;
pub use session::{AuthSession, AuthState};
