//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - JWT access and refresh token generation
//! - Signature and expiry validation with a typed error taxonomy
//! - Claims extraction and remaining-lifetime inspection
//! - Raw token resolution from the Authorization header and cookies

mod config;
mod resolver;
mod service;
mod signing_key;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use resolver::{
    resolve_bearer_token, resolve_refresh_token_from_cookies,
    BEARER_PREFIX, REFRESH_TOKEN_COOKIE,
};
pub use service::TokenService;
pub use signing_key::SigningKey;
