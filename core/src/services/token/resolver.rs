//! Raw token resolution from inbound request values.
//!
//! Pure string extraction; no validation happens here. The request-handling
//! layer passes in the header value and cookie list it received.

/// Scheme prefix of a bearer `Authorization` header value
pub const BEARER_PREFIX: &str = "Bearer ";

/// Name of the cookie carrying the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Extracts the bearer token from an `Authorization` header value
///
/// Returns the substring after the exact, case-sensitive `"Bearer "` prefix,
/// or `None` when the header is absent or carries a different scheme.
pub fn resolve_bearer_token(authorization: Option<&str>) -> Option<&str> {
    authorization.and_then(|value| value.strip_prefix(BEARER_PREFIX))
}

/// Looks up the refresh token in a cookie list
///
/// Returns the value of the first cookie named exactly `refreshToken`, or
/// `None` when the list is absent, empty, or contains no match. The first
/// match wins when duplicates exist.
pub fn resolve_refresh_token_from_cookies(
    cookies: Option<&[(String, String)]>,
) -> Option<&str> {
    cookies?
        .iter()
        .find(|(name, _)| name.as_str() == REFRESH_TOKEN_COOKIE)
        .map(|(_, value)| value.as_str())
}
