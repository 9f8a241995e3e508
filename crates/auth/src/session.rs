//! Session state for the admin surface.
//!
//! One session per sign-in, held for the process lifetime, replaced
//! wholesale on re-authentication and discarded on sign-out. The store is
//! passed by reference (no ambient singleton) so tests can substitute
//! fixed sessions.

use std::sync::{Arc, RwLock};

use eduhub_core::{BaseId, TenantId, UserId};

use crate::{Claims, Role};

/// Read-only projection of a signed-in actor, exposed to views.
///
/// Wraps the decoded claims together with the raw bearer credential the
/// gateway client attaches to outbound calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    raw_token: String,
    claims: Claims,
}

impl Session {
    pub fn new(raw_token: impl Into<String>, claims: Claims) -> Self {
        Self {
            raw_token: raw_token.into(),
            claims,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.claims.sub
    }

    /// The opaque credential for `Authorization: Bearer` headers.
    pub fn raw_token(&self) -> &str {
        &self.raw_token
    }

    pub fn tenant_id(&self) -> TenantId {
        self.claims.tenant_id
    }

    pub fn base_id(&self) -> Option<BaseId> {
        self.claims.base_id
    }

    pub fn base_name(&self) -> Option<&str> {
        self.claims.base_name.as_deref()
    }

    pub fn base_logo(&self) -> Option<&str> {
        self.claims.base_logo.as_deref()
    }

    pub fn roles(&self) -> &[Role] {
        &self.claims.roles
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}

/// Process-wide session holder with explicit lifecycle.
///
/// Single-writer-on-refresh: mutation replaces the whole record atomically;
/// readers take an `Arc` snapshot and never observe a partially updated
/// session.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Arc<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the session produced by a sign-in, replacing any previous one.
    pub fn sign_in(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        *self.current.write().unwrap() = Some(Arc::clone(&session));
        session
    }

    /// Tear down on sign-out or expiry.
    pub fn sign_out(&self) {
        *self.current.write().unwrap() = None;
    }

    /// Snapshot of the current session, if any.
    pub fn current(&self) -> Option<Arc<Session>> {
        self.current.read().unwrap().clone()
    }
}
