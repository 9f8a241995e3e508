//! The admin shell: session lifecycle and navigation handling.

use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use thiserror::Error;

use eduhub_auth::{Session, SessionStore, decode_or_no_access};
use eduhub_gateway::{ApiClient, GatewayError};
use eduhub_routing::{AreaState, Decision, RouteGuard, route};

use crate::dashboard::{self, DashboardPage};

#[derive(Debug, Error)]
pub enum SignInError {
    /// The backend rejected the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Sign-in could not reach the backend.
    #[error(transparent)]
    Gateway(GatewayError),
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no active session")]
    NotSignedIn,

    /// The backend rejected the session's credential mid-page; the session
    /// was torn down and the actor must sign in again.
    #[error("credential rejected; sign-in required")]
    ReauthRequired,

    /// The actor navigated away while the fetches were in flight; the
    /// result is discarded rather than applied to an unmounted view.
    #[error("navigation superseded this load")]
    Superseded,
}

/// Composition root for one admin-surface process.
///
/// Holds the process-wide session store, the route guard, and the gateway
/// client. All methods take `&self`; session mutation is atomic
/// whole-record replacement inside the store.
pub struct AdminShell {
    api: ApiClient,
    guard: RouteGuard,
    sessions: SessionStore,
    area: RwLock<AreaState>,
    /// Bumped on every navigation and sign-out; in-flight dashboard loads
    /// compare epochs and discard stale completions.
    navigation_epoch: AtomicU64,
}

impl AdminShell {
    pub fn new(api: ApiClient, guard: RouteGuard) -> Self {
        Self {
            api,
            guard,
            sessions: SessionStore::new(),
            area: RwLock::new(AreaState::Unauthenticated),
            navigation_epoch: AtomicU64::new(0),
        }
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn area(&self) -> AreaState {
        *self.area.read().unwrap()
    }

    /// Exchange credentials for a session.
    ///
    /// A malformed token from the backend does not fail sign-in; it decodes
    /// to no-access claims, and the first guarded navigation resolves to
    /// sign-in again.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Arc<Session>, SignInError> {
        let token = self.api.login(email, password).await.map_err(|err| match err {
            GatewayError::Api { status, .. } => {
                tracing::info!(status, "sign-in rejected by backend");
                SignInError::InvalidCredentials
            }
            other => SignInError::Gateway(other),
        })?;

        let claims = decode_or_no_access(&token, Utc::now());
        let session = self.sessions.sign_in(Session::new(token, claims));
        self.navigation_epoch.fetch_add(1, Ordering::SeqCst);
        tracing::info!(user = %session.user_id(), tenant = %session.tenant_id(), "signed in");
        Ok(session)
    }

    pub fn sign_out(&self) {
        self.sessions.sign_out();
        self.navigation_epoch.fetch_add(1, Ordering::SeqCst);
        *self.area.write().unwrap() = AreaState::Unauthenticated;
        tracing::info!("signed out");
    }

    /// Evaluate one navigation request against the current session.
    ///
    /// A sign-in redirect tears the session down (expired or unscoped
    /// credentials are not worth keeping). Any navigation supersedes
    /// in-flight dashboard loads.
    pub fn navigate(&self, path: &str, now: DateTime<Utc>) -> Decision {
        let session = self.sessions.current();
        let claims = session.as_deref().map(|s| s.claims());

        let decision = self.guard.evaluate(claims, now, path);
        self.navigation_epoch.fetch_add(1, Ordering::SeqCst);

        if decision == Decision::Redirect(route::LOGIN) && session.is_some() {
            self.sessions.sign_out();
        }

        let area = self.guard.area_after(decision, path);
        *self.area.write().unwrap() = area;

        tracing::debug!(path, ?decision, ?area, "navigation evaluated");
        decision
    }

    /// Resolve and load the dashboard for the current session.
    pub async fn load_dashboard(&self) -> Result<DashboardPage, DashboardError> {
        let session = self.sessions.current().ok_or(DashboardError::NotSignedIn)?;
        let epoch = self.navigation_epoch.load(Ordering::SeqCst);

        let page = dashboard::load(&self.api, &session).await;

        if self.navigation_epoch.load(Ordering::SeqCst) != epoch {
            return Err(DashboardError::Superseded);
        }
        if page.requires_reauth() {
            self.sign_out();
            return Err(DashboardError::ReauthRequired);
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use eduhub_auth::{Claims, Role};
    use eduhub_core::{BaseId, TenantId, UserId};

    fn shell() -> AdminShell {
        AdminShell::new(ApiClient::new("http://localhost:0"), RouteGuard::default())
    }

    fn install_session(shell: &AdminShell, roles: &[&str], base_id: Option<BaseId>) {
        let claims = Claims {
            sub: UserId::new(),
            tenant_id: TenantId::new(),
            base_id,
            base_name: None,
            base_logo: None,
            roles: roles.iter().map(|r| Role::parse(r)).collect(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        shell.session_store().sign_in(Session::new("fixed-token", claims));
    }

    #[test]
    fn navigation_without_session_goes_to_login() {
        let shell = shell();
        let d = shell.navigate("/tenant/dashboard", Utc::now());
        assert_eq!(d, Decision::Redirect("/login"));
        assert_eq!(shell.area(), AreaState::Unauthenticated);
    }

    #[test]
    fn teacher_is_bounced_to_campus_home() {
        let shell = shell();
        install_session(&shell, &["role.base.teacher"], Some(BaseId::new()));

        let d = shell.navigate("/tenant/dashboard", Utc::now());
        assert_eq!(d, Decision::Redirect("/campus/dashboard"));
        assert_eq!(shell.area(), AreaState::CampusArea);
        // Bounced, not signed out.
        assert!(shell.session_store().current().is_some());
    }

    #[test]
    fn login_redirect_tears_down_the_session() {
        let shell = shell();
        install_session(&shell, &["role.customer.vip"], None);

        let d = shell.navigate("/tenant/dashboard", Utc::now());
        assert_eq!(d, Decision::Redirect("/login"));
        assert!(shell.session_store().current().is_none());
    }

    #[test]
    fn sign_out_resets_area_state() {
        let shell = shell();
        install_session(&shell, &["role.tenant.admin"], None);

        shell.navigate("/tenant/dashboard", Utc::now());
        assert_eq!(shell.area(), AreaState::TenantArea);

        shell.sign_out();
        assert_eq!(shell.area(), AreaState::Unauthenticated);
    }

    #[tokio::test]
    async fn dashboard_without_session_is_not_signed_in() {
        let shell = shell();
        let err = shell.load_dashboard().await.unwrap_err();
        assert!(matches!(err, DashboardError::NotSignedIn));
    }
}
