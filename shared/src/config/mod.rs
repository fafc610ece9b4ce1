//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT authentication configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use environment::Environment;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// JWT authentication configuration
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load the configuration for the detected environment
    ///
    /// Loads the per-environment `.env` file when present, then reads the
    /// individual sections from environment variables.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();

        Self {
            environment,
            jwt: JwtConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            jwt: JwtConfig::default(),
        }
    }
}
