//! Dashboard view resolution.
//!
//! Given the actor classification and decoded roles, select which composed
//! view receives control. First-match over an ordered predicate list; the
//! resolver performs no network calls — the selected view triggers its own
//! data fetches in the shell.

use eduhub_auth::{ActorClass, BaseRole, Claims, Role, TenantRole};
use eduhub_core::BaseId;

/// Campus context that accompanies view resolution. Display metadata only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseContext {
    pub base_id: Option<BaseId>,
    pub base_name: Option<String>,
}

impl From<&Claims> for BaseContext {
    fn from(claims: &Claims) -> Self {
        Self {
            base_id: claims.base_id,
            base_name: claims.base_name.clone(),
        }
    }
}

/// Headquarters dashboard variants, refined by functional role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantView {
    /// Tenant-wide overview (the admin/"boss" view, also the fallback).
    Default,
    Finance,
    Operations,
    Hr,
}

/// Campus dashboard variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampusView {
    /// Whole-campus view for the base admin (principal).
    Principal,
    Academic,
    Finance,
    Teacher,
    /// No campus role assigned yet; renders a welcome screen carrying the
    /// base name.
    Unassigned { base_name: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewVariant {
    Tenant(TenantView),
    Campus(CampusView),
}

fn has_tenant_role(roles: &[Role], wanted: TenantRole) -> bool {
    roles.iter().any(|r| matches!(r, Role::Tenant(t) if *t == wanted))
}

fn has_base_role(roles: &[Role], wanted: BaseRole) -> bool {
    roles.iter().any(|r| matches!(r, Role::Base(b) if *b == wanted))
}

/// Select the composed dashboard view for an actor.
///
/// Broad category precedence mirrors the shell layout: tenant staff
/// without a base assignment see the tenant view; base staff with an
/// assigned base see the campus view; remaining tenant staff fall back to
/// tenant, everyone else to campus.
pub fn resolve(class: &ActorClass, roles: &[Role], base: &BaseContext) -> ViewVariant {
    let tenant_first = if class.is_tenant_staff && base.base_id.is_none() {
        true
    } else if class.is_base_staff && base.base_id.is_some() {
        false
    } else {
        class.is_tenant_staff
    };

    if tenant_first {
        ViewVariant::Tenant(resolve_tenant(roles))
    } else {
        ViewVariant::Campus(resolve_campus(roles, base))
    }
}

fn resolve_tenant(roles: &[Role]) -> TenantView {
    // The admin outranks functional roles: whoever runs the tenant sees
    // the whole board first.
    if has_tenant_role(roles, TenantRole::Admin) {
        TenantView::Default
    } else if has_tenant_role(roles, TenantRole::Finance) {
        TenantView::Finance
    } else if has_tenant_role(roles, TenantRole::Operation) {
        TenantView::Operations
    } else if has_tenant_role(roles, TenantRole::Hr) {
        TenantView::Hr
    } else {
        TenantView::Default
    }
}

fn resolve_campus(roles: &[Role], base: &BaseContext) -> CampusView {
    // Principal first: they may hold other campus roles but see the whole
    // campus. Teacher is the last concrete match.
    if has_base_role(roles, BaseRole::Admin) {
        CampusView::Principal
    } else if has_base_role(roles, BaseRole::Academic) {
        CampusView::Academic
    } else if has_base_role(roles, BaseRole::Finance) {
        CampusView::Finance
    } else if has_base_role(roles, BaseRole::Teacher) {
        CampusView::Teacher
    } else {
        CampusView::Unassigned {
            base_name: base.base_name.clone(),
        }
    }
}
