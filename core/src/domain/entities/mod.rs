//! Domain entities representing core business objects.

pub mod principal;
pub mod token;

// Re-export commonly used types
pub use principal::AuthenticatedUser;
pub use token::{
    Claims, TokenPair,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS,
};
