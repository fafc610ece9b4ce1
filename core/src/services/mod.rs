//! Business services containing domain logic and use cases.

pub mod token;

// Re-export commonly used types
pub use token::{
    resolve_bearer_token, resolve_refresh_token_from_cookies,
    SigningKey, TokenService, TokenServiceConfig,
    BEARER_PREFIX, REFRESH_TOKEN_COOKIE,
};
