//! Authenticated principal handed to the caller's security context.

use serde::{Deserialize, Serialize};

/// Identity materialized from a validated token subject
///
/// The token core issues no authorization scopes, so the credential is empty
/// and the authority list stays empty; role assignment belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Subject email the token asserted ownership of
    pub email: String,

    /// Credential placeholder, always empty for token-authenticated users
    pub credential: String,

    /// Granted authorities, always empty in this core
    pub authorities: Vec<String>,
}

impl AuthenticatedUser {
    /// Wraps a validated subject into a principal
    pub fn from_subject(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            credential: String::new(),
            authorities: Vec::new(),
        }
    }
}
