use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use eduhub_core::{BaseId, TenantId, UserId};

use crate::Role;

/// Decoded bearer-credential claims (transport-agnostic).
///
/// This is the field set the admin surface expects once a token has been
/// decoded by the token module. It is immutable once constructed and held
/// for the session's lifetime; re-authentication replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject / actor identifier.
    pub sub: UserId,

    /// Owning organization.
    pub tenant_id: TenantId,

    /// Campus scope; absent means the actor is tenant-level (headquarters).
    #[serde(default)]
    pub base_id: Option<BaseId>,

    /// Display metadata only; carries no authorization weight.
    #[serde(default)]
    pub base_name: Option<String>,

    /// Display metadata only; carries no authorization weight.
    #[serde(default)]
    pub base_logo: Option<String>,

    /// Role tags granted within the tenant. Uniqueness is not guaranteed
    /// and order is irrelevant.
    pub roles: Vec<Role>,

    /// Expiration timestamp; the credential is invalid at or after this
    /// instant. Wire form is the `exp` unix-seconds claim.
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// Safe fallback for credentials that failed to decode: no roles, no
    /// base, and already expired, so every guarded navigation resolves to
    /// sign-in.
    pub fn no_access(now: DateTime<Utc>) -> Self {
        Self {
            sub: UserId::nil(),
            tenant_id: TenantId::nil(),
            base_id: None,
            base_name: None,
            base_logo: None,
            roles: Vec::new(),
            expires_at: now,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("credential has expired")]
    Expired,
}

/// Deterministically validate decoded claims.
///
/// Note: this validates the *claims* only. Decoding is handled by the token
/// module; signature verification is intentionally outside this crate.
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
