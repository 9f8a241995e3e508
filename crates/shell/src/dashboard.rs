//! Dashboard data orchestration.
//!
//! The resolver picks the view; this module issues only the fetches the
//! actor's roles permit, joins them concurrently, and degrades per slice:
//! a failed widget renders as an inline failure, never a failed page.

use eduhub_auth::{Role, Session, TenantRole, classify};
use eduhub_gateway::{
    ApiClient, CampusDashboardStats, GatewayError, PendingPayment, PendingStaff, StockAlert,
    TenantAnalytics, TenantDashboardStats, UpcomingClass,
};
use eduhub_routing::{BaseContext, CampusView, ViewVariant, resolve};

/// A resolved dashboard together with whatever data its widgets managed to
/// load.
#[derive(Debug)]
pub struct DashboardPage {
    pub view: ViewVariant,
    pub data: DashboardData,
}

impl DashboardPage {
    /// True when any slice came back 401/403 — the credential is stale and
    /// the whole session must re-authenticate.
    pub fn requires_reauth(&self) -> bool {
        self.data.failures().iter().any(|e| e.requires_reauth())
    }
}

#[derive(Debug)]
pub enum DashboardData {
    Tenant(TenantDashboardData),
    Campus(CampusDashboardData),
}

impl DashboardData {
    pub fn failures(&self) -> &[GatewayError] {
        match self {
            Self::Tenant(data) => &data.failures,
            Self::Campus(data) => &data.failures,
        }
    }
}

/// Tenant dashboard slices. `None` means the actor's roles did not permit
/// the fetch, or it failed (the failure is then recorded).
#[derive(Debug, Default)]
pub struct TenantDashboardData {
    pub stats: Option<TenantDashboardStats>,
    pub analytics: Option<TenantAnalytics>,
    pub pending_staff: Option<Vec<PendingStaff>>,
    pub pending_payments: Option<Vec<PendingPayment>>,
    pub failures: Vec<GatewayError>,
}

/// Campus dashboard slices.
#[derive(Debug, Default)]
pub struct CampusDashboardData {
    pub stats: Option<CampusDashboardStats>,
    pub upcoming_classes: Option<Vec<UpcomingClass>>,
    pub stock_alerts: Option<Vec<StockAlert>>,
    pub failures: Vec<GatewayError>,
}

/// Resolve the actor's dashboard and load its data slices.
pub async fn load(api: &ApiClient, session: &Session) -> DashboardPage {
    let class = classify(session.roles());
    let base = BaseContext::from(session.claims());
    let view = resolve(&class, session.roles(), &base);

    let data = match &view {
        ViewVariant::Tenant(_) => {
            DashboardData::Tenant(load_tenant(api, session.raw_token(), session.roles()).await)
        }
        ViewVariant::Campus(CampusView::Unassigned { .. }) => {
            // Nothing to fetch for the welcome screen.
            DashboardData::Campus(CampusDashboardData::default())
        }
        ViewVariant::Campus(_) => {
            DashboardData::Campus(load_campus(api, session.raw_token()).await)
        }
    };

    DashboardPage { view, data }
}

async fn load_tenant(api: &ApiClient, token: &str, roles: &[Role]) -> TenantDashboardData {
    let is_admin = has_tenant_role(roles, TenantRole::Admin);
    let is_finance = has_tenant_role(roles, TenantRole::Finance);
    let is_ops = has_tenant_role(roles, TenantRole::Operation);
    let is_hr = has_tenant_role(roles, TenantRole::Hr);

    // Fetch only what the backend would let this actor read; each slice
    // resolves independently.
    let (stats, analytics, pending_staff, pending_payments) = tokio::join!(
        fetch_if(is_admin || is_finance, api.tenant_dashboard_stats(token)),
        fetch_if(is_admin || is_finance || is_ops, api.tenant_dashboard_analytics(token)),
        fetch_if(is_admin || is_hr, api.tenant_pending_staff(token)),
        fetch_if(is_admin || is_finance, api.pending_payments(token)),
    );

    let mut data = TenantDashboardData::default();
    apply(&mut data.stats, &mut data.failures, stats);
    apply(&mut data.analytics, &mut data.failures, analytics);
    apply(&mut data.pending_staff, &mut data.failures, pending_staff);
    apply(&mut data.pending_payments, &mut data.failures, pending_payments);
    data
}

async fn load_campus(api: &ApiClient, token: &str) -> CampusDashboardData {
    let (stats, upcoming_classes, stock_alerts) = tokio::join!(
        fetch_if(true, api.campus_dashboard_stats(token)),
        fetch_if(true, api.upcoming_classes(token)),
        fetch_if(true, api.stock_alerts(token)),
    );

    let mut data = CampusDashboardData::default();
    apply(&mut data.stats, &mut data.failures, stats);
    apply(&mut data.upcoming_classes, &mut data.failures, upcoming_classes);
    apply(&mut data.stock_alerts, &mut data.failures, stock_alerts);
    data
}

fn has_tenant_role(roles: &[Role], wanted: TenantRole) -> bool {
    roles.iter().any(|r| matches!(r, Role::Tenant(t) if *t == wanted))
}

async fn fetch_if<F, T>(permitted: bool, fetch: F) -> Option<Result<T, GatewayError>>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    if permitted { Some(fetch.await) } else { None }
}

fn apply<T>(
    slot: &mut Option<T>,
    failures: &mut Vec<GatewayError>,
    fetched: Option<Result<T, GatewayError>>,
) {
    match fetched {
        Some(Ok(value)) => *slot = Some(value),
        Some(Err(err)) => {
            tracing::warn!(error = %err, "dashboard slice failed");
            failures.push(err);
        }
        None => {}
    }
}
