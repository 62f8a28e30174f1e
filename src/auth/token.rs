//! Local decoding of session token claims.
//!
//! The reminder service issues JWTs; the client only decodes the claims
//! payload to drive navigation. The signature is not verified - the
//! server remains the sole authority on whether a token is accepted.
//!
//! Both functions fail soft: a structurally invalid token yields an
//! absent subject and reads as expired.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

/// Decode the claims payload of a JWT without verifying the signature.
/// Returns `None` unless the token has the three dot-separated segments
/// and a base64url JSON payload.
fn decode_claims(token: &str) -> Option<JsonValue> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    serde_json::from_slice(&payload).ok()
}

/// The identity the token was issued for: the `sub` claim, falling back
/// to `username`. `None` means the caller cannot establish identity.
pub fn extract_subject(token: &str) -> Option<String> {
    let claims = decode_claims(token)?;
    claims
        .get("sub")
        .and_then(JsonValue::as_str)
        .or_else(|| claims.get("username").and_then(JsonValue::as_str))
        .map(str::to_owned)
}

/// Whether the token's `exp` claim is strictly before the current
/// wall-clock time. A token with no `exp`, or one that cannot be
/// decoded at all, reads as expired.
pub fn is_expired(token: &str) -> bool {
    let Some(claims) = decode_claims(token) else {
        return true;
    };
    match claims.get("exp").and_then(JsonValue::as_i64) {
        Some(exp) => match DateTime::<Utc>::from_timestamp(exp, 0) {
            Some(expires_at) => expires_at < Utc::now(),
            None => true,
        },
        None => true,
    }
}
