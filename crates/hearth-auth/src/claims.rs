//! Unverified JWT payload decode.
//!
//! The portal only needs `sub`, `email`, and `exp` for display and for
//! deciding whether a stored session is still usable. Signature verification
//! is deliberately absent — the store rejects bad tokens on its own.

use base64::Engine as _;
use chrono::{DateTime, Utc};

use hearth_core::identity::UserIdentity;

use crate::error::AuthError;

/// Claims extracted from a stored session token.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    /// Backend user ID (`sub` claim).
    pub user_id: String,
    /// Email address (`email` claim), if present.
    pub email: Option<String>,
    /// Token expiration time (`exp` claim).
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Decode the payload segment of a JWT without verifying its signature.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedToken`] if the token is not three
    /// dot-separated segments, the payload is not base64url JSON, or the
    /// `sub`/`exp` claims are missing.
    pub fn decode_unverified(jwt: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = jwt.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::MalformedToken("not a three-segment JWT".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| AuthError::MalformedToken(format!("base64 decode failed: {e}")))?;
        let value: serde_json::Value = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::MalformedToken(format!("JSON parse failed: {e}")))?;

        let user_id = value["sub"]
            .as_str()
            .ok_or_else(|| AuthError::MalformedToken("missing sub claim".into()))?
            .to_string();
        let email = value["email"].as_str().map(String::from);
        let exp = value["exp"]
            .as_i64()
            .ok_or_else(|| AuthError::MalformedToken("missing exp claim".into()))?;
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::MalformedToken("invalid exp timestamp".into()))?;

        Ok(Self {
            user_id,
            email,
            expires_at,
        })
    }

    /// Convert to the lightweight identity record for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> UserIdentity {
        UserIdentity {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
        }
    }

    /// Whether the token was already expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decode_extracts_sub_email_and_exp() {
        let future_exp = Utc::now().timestamp() + 3_600;
        let jwt = test_jwt::make("user_123", Some("casa@example.com"), future_exp);

        let claims = SessionClaims::decode_unverified(&jwt).unwrap();
        assert_eq!(claims.user_id, "user_123");
        assert_eq!(claims.email.as_deref(), Some("casa@example.com"));
        assert_eq!(claims.expires_at.timestamp(), future_exp);
        assert!(!claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn decode_without_email_claim() {
        let jwt = test_jwt::make("user_123", None, Utc::now().timestamp() + 60);
        let claims = SessionClaims::decode_unverified(&jwt).unwrap();
        assert!(claims.email.is_none());
    }

    #[test]
    fn expired_token_is_detected() {
        let jwt = test_jwt::make("user_123", None, Utc::now().timestamp() - 3_600);
        let claims = SessionClaims::decode_unverified(&jwt).unwrap();
        assert!(claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn rejects_non_jwt_input() {
        let result = SessionClaims::decode_unverified("not-a-jwt");
        assert!(matches!(result, Err(AuthError::MalformedToken(_))));
    }

    #[test]
    fn rejects_missing_sub() {
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"HS256"}"#);
        let payload = engine.encode(r#"{"exp":99}"#);
        let jwt = format!("{header}.{payload}.{}", engine.encode("sig"));

        let result = SessionClaims::decode_unverified(&jwt);
        assert!(result.is_err());
    }

    #[test]
    fn to_identity_maps_fields() {
        let jwt = test_jwt::make("user_123", Some("casa@example.com"), Utc::now().timestamp() + 60);
        let identity = SessionClaims::decode_unverified(&jwt).unwrap().to_identity();
        assert_eq!(identity.user_id, "user_123");
        assert_eq!(identity.email.as_deref(), Some("casa@example.com"));
    }
}
