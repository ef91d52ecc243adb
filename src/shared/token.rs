//! Client-side JWT payload decoding
//!
//! The signature is never checked here; the screen only needs the user id
//! claim to build the request path. The service authorizes the request.

use crate::domain::models::Identity;
use crate::shared::errors::TokenError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims this screen reads from the token payload
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(rename = "_id")]
    user_id: Option<String>,
    // Flattening makes serde accept only a JSON object; the rest is unused
    #[serde(flatten)]
    _rest: serde_json::Map<String, serde_json::Value>,
}

/// Decode the `_id` claim out of a `header.payload[.signature]` token
pub fn decode_identity(token: &str) -> Result<Identity, TokenError> {
    let payload = token
        .trim()
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;

    // Some issuers keep the `=` padding; the no-pad engine rejects it
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::InvalidEncoding(e.to_string()))?;

    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::InvalidClaims(e.to_string()))?;

    match claims.user_id {
        Some(user_id) if !user_id.is_empty() => Ok(Identity { user_id }),
        _ => Err(TokenError::MissingUserId),
    }
}
