//! Bearer-credential gate for protected routes.
//!
//! Run by the router only when a route is flagged auth-required; the result
//! is never cached or reused beyond the current request.

use actix_web::http::header::{self, HeaderMap};
use lazy_regex::regex_captures;

use crate::auth::token;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Fallback credential header for reverse proxies that rewrite or drop the
/// standard Authorization header.
pub const FALLBACK_AUTH_HEADER: &str = "x-authorization";

/// Extract and verify the bearer credential, resolving the caller identity.
///
/// Header precedence: `Authorization` first, then `X-Authorization`. A value
/// must contain `Bearer` followed by whitespace and a non-whitespace token.
pub fn authenticate(
    headers: &HeaderMap,
    now: i64,
    security: &SecurityConfig,
) -> Result<i64, AppError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .or_else(|| headers.get(FALLBACK_AUTH_HEADER))
        .and_then(|value| value.to_str().ok())
        .ok_or_else(AppError::no_token)?;

    let (_, credential) = regex_captures!(r"Bearer\s+(\S+)", raw).ok_or_else(AppError::no_token)?;

    match token::verify(credential, now, security) {
        Some(uid) => Ok(uid),
        None => Err(AppError::invalid_token()),
    }
}
