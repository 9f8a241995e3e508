//! Bearer-token payload extraction.
//!
//! The issuing backend signs tokens; this layer only extracts fields for
//! routing and display decisions, so signature verification is disabled on
//! purpose. Expiry is evaluated separately by `validate_claims` so a decoded
//! but stale credential still routes to sign-in instead of failing decode.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use crate::Claims;

/// Decode failure: the credential is malformed or its payload does not
/// carry the expected claims. Always recoverable — callers substitute
/// [`Claims::no_access`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed credential: {0}")]
    Malformed(#[from] jsonwebtoken::errors::Error),
}

/// Extract claims from an opaque bearer token without verifying the
/// signature.
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    // Expiry is the route guard's concern; a decoded-but-expired credential
    // must still surface its claims for logging.
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

/// Decode with the no-access fallback.
///
/// A malformed credential never escalates past this boundary: the caller
/// receives claims with no roles and an already-passed expiry.
pub fn decode_or_no_access(token: &str, now: DateTime<Utc>) -> Claims {
    match decode_claims(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = %err, "credential decode failed; treating as unauthenticated");
            Claims::no_access(now)
        }
    }
}
