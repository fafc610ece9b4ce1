//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use once_cell::sync::OnceCell;

use crate::domain::entities::principal::AuthenticatedUser;
use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{ConfigError, DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;
use super::signing_key::SigningKey;

/// Signing algorithm for all tokens issued by this service
const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Process-wide service instance, written once during startup.
static GLOBAL_SERVICE: OnceCell<TokenService> = OnceCell::new();

/// Stateless service for issuing and validating JWT credentials
///
/// Every operation is synchronous pure computation over in-memory inputs;
/// the key material is immutable after construction, so a single instance
/// can be shared freely across request-handling threads.
pub struct TokenService {
    signing_key: SigningKey,
    validation: Validation,
    lifetime_validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration carrying the raw secret
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or a configuration error when the
    /// secret is missing or unusable
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        let signing_key = SigningKey::derive(&config.jwt_secret)?;

        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        // Expiry is an exact boundary, no leeway.
        validation.leeway = 0;

        // Same checks minus expiry enforcement, for lifetime inspection of
        // tokens that may already be expired.
        let mut lifetime_validation = validation.clone();
        lifetime_validation.validate_exp = false;

        Ok(Self {
            signing_key,
            validation,
            lifetime_validation,
        })
    }

    /// Installs the process-wide service instance
    ///
    /// Must be called once during the startup phase, before any
    /// request-handling thread touches [`TokenService::global`]. A second
    /// invocation fails fast with [`ConfigError::AlreadyInitialized`].
    pub fn initialize_global(config: TokenServiceConfig) -> DomainResult<&'static TokenService> {
        let service = TokenService::new(config)?;

        GLOBAL_SERVICE
            .set(service)
            .map_err(|_| DomainError::Config(ConfigError::AlreadyInitialized))?;

        GLOBAL_SERVICE.get().ok_or_else(|| DomainError::Internal {
            message: "token service initialization did not complete".to_string(),
        })
    }

    /// Returns the process-wide service instance, if initialized
    pub fn global() -> Option<&'static TokenService> {
        GLOBAL_SERVICE.get()
    }

    /// Generates a short-lived access token for an authenticated subject
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated user's email; the caller is
    ///   responsible for having verified the identity
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed compact token
    /// * `Err(DomainError)` - Blank subject or encoding failure
    pub fn generate_access_token(&self, subject: &str) -> DomainResult<String> {
        Self::ensure_subject(subject)?;

        let claims = Claims::new_access_token(subject);
        let token = self.encode_jwt(&claims)?;

        tracing::debug!(token_type = "access", "issued token");
        Ok(token)
    }

    /// Generates a long-lived refresh token for an authenticated subject
    pub fn generate_refresh_token(&self, subject: &str) -> DomainResult<String> {
        Self::ensure_subject(subject)?;

        let claims = Claims::new_refresh_token(subject);
        let token = self.encode_jwt(&claims)?;

        tracing::debug!(token_type = "refresh", "issued token");
        Ok(token)
    }

    /// Generates the access + refresh token pair handed out at login
    pub fn generate_token_pair(&self, subject: &str) -> DomainResult<TokenPair> {
        let access_token = self.generate_access_token(subject)?;
        let refresh_token = self.generate_refresh_token(subject)?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Validates a token and returns its claims
    ///
    /// The signature is recomputed over header and payload and compared in
    /// constant time, then the expiration is checked with zero leeway.
    ///
    /// # Arguments
    ///
    /// * `token` - The compact token string to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError::Token)` - One of the five [`TokenError`] kinds
    pub fn validate_token(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, self.signing_key.decoding(), &self.validation)
            .map_err(|error| {
                let classified = TokenError::classify(error);
                tracing::warn!(error = %classified, "token validation failed");
                DomainError::Token(classified)
            })?;

        Ok(data.claims)
    }

    /// Extracts the subject from a validated token
    pub fn get_subject(&self, token: &str) -> DomainResult<String> {
        Ok(self.validate_token(token)?.sub)
    }

    /// Computes the remaining lifetime of a token
    ///
    /// The signature must verify, but expiry is not enforced: an expired
    /// token yields a negative duration so callers can tell how overdue it
    /// is.
    pub fn remaining_lifetime(&self, token: &str) -> DomainResult<Duration> {
        let data = decode::<Claims>(token, self.signing_key.decoding(), &self.lifetime_validation)
            .map_err(|error| DomainError::Token(TokenError::classify(error)))?;

        Ok(data.claims.remaining_lifetime())
    }

    /// Validates a token and materializes the authenticated principal
    ///
    /// The principal carries the subject with an empty credential and an
    /// empty authority list; role assignment is the caller's concern.
    pub fn authenticate(&self, token: &str) -> DomainResult<AuthenticatedUser> {
        let claims = self.validate_token(token)?;
        Ok(AuthenticatedUser::from_subject(claims.sub))
    }

    /// Encodes claims into a signed compact token
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(JWT_ALGORITHM), claims, self.signing_key.encoding()).map_err(|error| {
            DomainError::Internal {
                message: format!("token encoding failed: {error}"),
            }
        })
    }

    fn ensure_subject(subject: &str) -> DomainResult<()> {
        if subject.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "token subject must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
