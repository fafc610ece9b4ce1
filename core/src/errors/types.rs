//! Error types for token validation and service configuration
//!
//! Token failures keep the low-level `jsonwebtoken` cause attached as a
//! diagnostic source while the caller matches on the kind. The distinction
//! matters downstream: an expired access token triggers the refresh flow,
//! every other kind requires re-authentication.

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

/// Token validation errors
///
/// Exactly one kind is reported per failure, classified in this precedence:
/// expiry is only reported when the signature already verified, structural
/// failures before algorithm mismatches, and `Invalid` as the catch-all.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signature verified but the expiration is in the past.
    #[error("Token expired")]
    Expired {
        #[source]
        source: JwtError,
    },

    /// Structural parsing failure: segment count, encoding, or payload JSON.
    #[error("Malformed token")]
    Malformed {
        #[source]
        source: JwtError,
    },

    /// The token declares an algorithm this codec does not implement.
    #[error("Unsupported token")]
    Unsupported {
        #[source]
        source: JwtError,
    },

    /// Signature does not match the recomputed value.
    #[error("Token signature verification failed")]
    InvalidSignature {
        #[source]
        source: JwtError,
    },

    /// Any other parsing or crypto failure.
    #[error("Invalid token")]
    Invalid {
        #[source]
        source: JwtError,
    },
}

impl TokenError {
    /// Classify a low-level JWT failure into the taxonomy above.
    pub(crate) fn classify(error: JwtError) -> Self {
        let build: fn(JwtError) -> TokenError = match error.kind() {
            ErrorKind::ExpiredSignature => |source| TokenError::Expired { source },
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => |source| TokenError::Malformed { source },
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => |source| TokenError::Unsupported { source },
            ErrorKind::InvalidSignature => |source| TokenError::InvalidSignature { source },
            _ => |source| TokenError::Invalid { source },
        };

        build(error)
    }
}

/// Service configuration errors, fatal during startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JWT secret is missing or empty")]
    MissingSecret,

    #[error("JWT secret could not be turned into a signing key")]
    InvalidSecret {
        #[source]
        source: JwtError,
    },

    #[error("Token service is already initialized")]
    AlreadyInitialized,
}
