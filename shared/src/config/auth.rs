//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_DEV_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
///
/// Carries the raw signing secret. Token lifetimes are fixed policy constants
/// of the token service and are deliberately not configurable here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Raw JWT secret used to derive the signing key
    pub secret: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_DEV_SECRET),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Read the configuration from the `JWT_SECRET` environment variable
    ///
    /// Falls back to the development secret when the variable is unset, so
    /// local development works without a `.env` file. The token service
    /// rejects an empty secret at startup.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| String::from(DEFAULT_DEV_SECRET));
        Self { secret }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_DEV_SECRET
    }
}
