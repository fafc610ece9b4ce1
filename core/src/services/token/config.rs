//! Configuration for the token service

use gm_shared::config::JwtConfig;

/// Configuration for the token service
///
/// Only the secret is configurable; token lifetimes and the signing
/// algorithm are fixed policy constants of the service.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Raw JWT signing secret
    pub jwt_secret: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_jwt_config() {
        let jwt_config = JwtConfig::new("configured-secret");
        let config = TokenServiceConfig::from(&jwt_config);

        assert_eq!(config.jwt_secret, "configured-secret");
    }
}
