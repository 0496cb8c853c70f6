//! Stateless save-token codec.
//!
//! A token is `base64(claims_json) + "." + hex(hmac_sha256(secret, claims_json))`.
//! The payload is inspectable by design (integrity and expiry are the only
//! guarantees); validity is reconstructed from content + signature + current
//! time, never looked up server-side.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::claims::Claims;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

type HmacSha256 = Hmac<Sha256>;

/// Tokens are valid for 24 hours from issuance.
pub const TOKEN_TTL_SECS: i64 = 86_400;

/// Current unix time in seconds.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Mint a signed token for the given subject with a 24-hour TTL.
///
/// `now` is passed in (rather than read inside) so expiry behavior is
/// testable with a simulated clock.
pub fn issue(sub: i64, now: i64, security: &SecurityConfig) -> Result<String, AppError> {
    let claims = Claims { sub, iat: now, exp: now + TOKEN_TTL_SECS };
    let payload = serde_json::to_vec(&claims)
        .map_err(|e| AppError::internal(format!("Failed to encode claims: {e}")))?;

    let mut mac = HmacSha256::new_from_slice(&security.token_secret)
        .map_err(|e| AppError::internal(format!("Failed to key token mac: {e}")))?;
    mac.update(&payload);
    let sig = mac.finalize().into_bytes();

    Ok(format!("{}.{}", BASE64_STANDARD.encode(&payload), hex::encode(sig)))
}

/// Verify a token and return its subject.
///
/// Total over arbitrary input: every malformed shape (wrong delimiter count,
/// bad base64, bad hex, signature mismatch, unparseable claims, expired)
/// collapses into `None`. The shapes are deliberately not distinguished.
/// The signature check uses `Mac::verify_slice`, which compares in constant
/// time rather than short-circuiting byte-by-byte.
pub fn verify(token: &str, now: i64, security: &SecurityConfig) -> Option<i64> {
    let (payload_b64, sig_hex) = token.split_once('.')?;
    if sig_hex.contains('.') {
        return None;
    }
    // Signatures are emitted as lowercase hex; only the canonical form
    // verifies, so no two distinct token strings share a valid signature.
    if sig_hex.bytes().any(|b| b.is_ascii_uppercase()) {
        return None;
    }

    let payload = BASE64_STANDARD.decode(payload_b64).ok()?;
    let sig = hex::decode(sig_hex).ok()?;

    let mut mac = HmacSha256::new_from_slice(&security.token_secret).ok()?;
    mac.update(&payload);
    mac.verify_slice(&sig).ok()?;

    let claims: Claims = serde_json::from_slice(&payload).ok()?;
    if claims.exp < now {
        return None;
    }

    Some(claims.sub)
}
