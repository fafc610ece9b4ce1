//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure for JWT payload
///
/// Timestamps are epoch seconds per JWT convention; `jti` keeps two tokens
/// issued within the same second byte-distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated user's email
    ///
    /// # Returns
    ///
    /// A new `Claims` instance expiring in [`ACCESS_TOKEN_EXPIRY_MINUTES`]
    pub fn new_access_token(subject: &str) -> Self {
        Self::with_validity(subject, Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES))
    }

    /// Creates new claims for a refresh token
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated user's email
    ///
    /// # Returns
    ///
    /// A new `Claims` instance expiring in [`REFRESH_TOKEN_EXPIRY_DAYS`]
    pub fn new_refresh_token(subject: &str) -> Self {
        Self::with_validity(subject, Duration::days(REFRESH_TOKEN_EXPIRY_DAYS))
    }

    fn with_validity(subject: &str, validity: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Gets the time remaining until expiration
    ///
    /// The duration is signed and never clamped: once the token has expired
    /// the result is negative, so callers can tell how overdue it is.
    pub fn remaining_lifetime(&self) -> Duration {
        Duration::seconds(self.exp - Utc::now().timestamp())
    }
}

/// Token pair returned to the client at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    ///
    /// # Arguments
    ///
    /// * `access_token` - The JWT access token
    /// * `refresh_token` - The JWT refresh token
    ///
    /// # Returns
    ///
    /// A new `TokenPair` instance with calculated expiry times
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_expires_in: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let claims = Claims::new_access_token("user@example.com");

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_MINUTES * 60);
        assert!(!claims.is_expired());
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_refresh_token_claims() {
        let claims = Claims::new_refresh_token("user@example.com");

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new_access_token("user@example.com");

        // Set expiration to past
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(claims.remaining_lifetime() < Duration::zero());
    }

    #[test]
    fn test_claims_remaining_lifetime() {
        let claims = Claims::new_access_token("user@example.com");
        let remaining = claims.remaining_lifetime();

        assert!(remaining > Duration::zero());
        assert!(remaining <= Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES));
    }

    #[test]
    fn test_claims_are_unique_per_issuance() {
        let first = Claims::new_access_token("user@example.com");
        let second = Claims::new_access_token("user@example.com");

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new("access.jwt".to_string(), "refresh.jwt".to_string());

        assert_eq!(pair.access_token, "access.jwt");
        assert_eq!(pair.refresh_token, "refresh.jwt");
        assert_eq!(pair.access_expires_in, ACCESS_TOKEN_EXPIRY_MINUTES * 60);
        assert_eq!(pair.refresh_expires_in, REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_access_token("user@example.com");

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
