//! Navigation-time authorization check.
//!
//! Evaluated before every matched-path render. The guard is a pure decision
//! table over (claims, path): no IO, no panics, and repeated evaluation
//! with the same inputs yields the same decision. Authorization failures
//! resolve to redirects, never to surfaced errors.

use chrono::{DateTime, Utc};

use eduhub_auth::{ActorClass, Claims, classify, validate_claims};

use crate::route::{self, Area};

/// How campus-area access is scoped for actors that also hold tenant roles.
///
/// The business convention correlates `base_id` with base-scoped roles but
/// does not enforce it, so the policy is explicit configuration rather than
/// a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CampusScope {
    /// Campus paths are open to any actor the role rules admit.
    #[default]
    AnyBase,

    /// Campus paths additionally require an assigned base. Tenant admins
    /// are exempt: headquarters may inspect any campus.
    AssignedBaseOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuardConfig {
    pub campus_scope: CampusScope,
}

/// Outcome of a guard evaluation for one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Let the navigation proceed unchanged.
    Allow,
    /// Send the actor elsewhere; terminal for this request.
    Redirect(&'static str),
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Area the actor ends up in once the decision is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaState {
    Unauthenticated,
    TenantArea,
    CampusArea,
    OtherArea,
}

/// The route guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    config: GuardConfig,
}

impl RouteGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Evaluate one navigation request.
    ///
    /// Precedence:
    /// 1. missing or expired credential — sign-in;
    /// 2. tenant area without tenant staff — campus home for base staff,
    ///    sign-in otherwise;
    /// 3. campus area without campus access — tenant home for tenant
    ///    staff, sign-in otherwise;
    /// 4. allow.
    ///
    /// Dual-role actors (tenant and base staff) pass both 2 and 3.
    pub fn evaluate(
        &self,
        claims: Option<&Claims>,
        now: DateTime<Utc>,
        path: &str,
    ) -> Decision {
        let Some(claims) = claims else {
            return Decision::Redirect(route::LOGIN);
        };
        if validate_claims(claims, now).is_err() {
            return Decision::Redirect(route::LOGIN);
        }

        let class = classify(&claims.roles);

        match Area::of(path) {
            Area::Tenant if !class.is_tenant_staff => {
                if class.is_base_staff {
                    Decision::Redirect(route::CAMPUS_DASHBOARD)
                } else {
                    Decision::Redirect(route::LOGIN)
                }
            }
            Area::Campus if !self.campus_admitted(claims, class) => {
                if class.is_tenant_staff {
                    Decision::Redirect(route::TENANT_DASHBOARD)
                } else {
                    Decision::Redirect(route::LOGIN)
                }
            }
            _ => Decision::Allow,
        }
    }

    /// Area state after applying the decision, for the shell's navigation
    /// bookkeeping.
    pub fn area_after(&self, decision: Decision, path: &str) -> AreaState {
        let landed = match decision {
            Decision::Allow => path,
            Decision::Redirect(target) => target,
        };
        if landed == route::LOGIN {
            return AreaState::Unauthenticated;
        }
        match Area::of(landed) {
            Area::Tenant => AreaState::TenantArea,
            Area::Campus => AreaState::CampusArea,
            Area::Open => AreaState::OtherArea,
        }
    }

    fn campus_admitted(&self, claims: &Claims, class: ActorClass) -> bool {
        let role_admitted = class.is_base_staff || class.is_tenant_admin;
        match self.config.campus_scope {
            CampusScope::AnyBase => role_admitted,
            CampusScope::AssignedBaseOnly => {
                class.is_tenant_admin || (role_admitted && claims.base_id.is_some())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use eduhub_core::{BaseId, TenantId, UserId};
    use eduhub_auth::Role;

    fn claims_with_roles(roles: &[&str], base_id: Option<BaseId>) -> Claims {
        Claims {
            sub: UserId::new(),
            tenant_id: TenantId::new(),
            base_id,
            base_name: None,
            base_logo: None,
            roles: roles.iter().map(|r| Role::parse(r)).collect(),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    fn guard() -> RouteGuard {
        RouteGuard::default()
    }

    #[test]
    fn missing_claims_redirect_to_login() {
        let d = guard().evaluate(None, Utc::now(), "/tenant/dashboard");
        assert_eq!(d, Decision::Redirect("/login"));
    }

    #[test]
    fn expired_claims_redirect_to_login() {
        let mut claims = claims_with_roles(&["role.tenant.admin"], None);
        claims.expires_at = Utc::now() - Duration::minutes(1);
        let d = guard().evaluate(Some(&claims), Utc::now(), "/tenant/dashboard");
        assert_eq!(d, Decision::Redirect("/login"));
    }

    #[test]
    fn base_teacher_requesting_tenant_area_lands_on_campus_home() {
        let claims = claims_with_roles(&["role.base.teacher"], Some(BaseId::new()));
        let d = guard().evaluate(Some(&claims), Utc::now(), "/tenant/dashboard");
        assert_eq!(d, Decision::Redirect("/campus/dashboard"));
    }

    #[test]
    fn tenant_finance_requesting_campus_area_lands_on_tenant_home() {
        let claims = claims_with_roles(&["role.tenant.finance"], None);
        let d = guard().evaluate(Some(&claims), Utc::now(), "/campus/stock");
        assert_eq!(d, Decision::Redirect("/tenant/dashboard"));
    }

    #[test]
    fn tenant_admin_may_view_campus_area() {
        let claims = claims_with_roles(&["role.tenant.admin"], None);
        let d = guard().evaluate(Some(&claims), Utc::now(), "/campus/dashboard");
        assert_eq!(d, Decision::Allow);
    }

    #[test]
    fn dual_role_actor_enters_both_areas() {
        let claims = claims_with_roles(
            &["role.tenant.finance", "role.base.teacher"],
            Some(BaseId::new()),
        );
        let now = Utc::now();
        assert!(guard().evaluate(Some(&claims), now, "/tenant/finance").is_allow());
        assert!(guard().evaluate(Some(&claims), now, "/campus/schedule").is_allow());
    }

    #[test]
    fn unscoped_actor_is_kicked_to_login_from_protected_areas() {
        let claims = claims_with_roles(&["role.customer.vip"], None);
        let now = Utc::now();
        assert_eq!(
            guard().evaluate(Some(&claims), now, "/tenant/dashboard"),
            Decision::Redirect("/login")
        );
        assert_eq!(
            guard().evaluate(Some(&claims), now, "/campus/dashboard"),
            Decision::Redirect("/login")
        );
    }

    #[test]
    fn open_paths_admit_any_authenticated_actor() {
        let claims = claims_with_roles(&["role.customer.vip"], None);
        let d = guard().evaluate(Some(&claims), Utc::now(), "/admin/honor-ranks");
        assert_eq!(d, Decision::Allow);
    }

    #[test]
    fn assigned_base_only_blocks_unassigned_base_staff() {
        let guard = RouteGuard::new(GuardConfig {
            campus_scope: CampusScope::AssignedBaseOnly,
        });
        let now = Utc::now();

        // Base staff without an assigned base lose campus access.
        let unassigned = claims_with_roles(&["role.base.teacher"], None);
        assert_eq!(
            guard.evaluate(Some(&unassigned), now, "/campus/dashboard"),
            Decision::Redirect("/login")
        );

        // With an assigned base they keep it.
        let assigned = claims_with_roles(&["role.base.teacher"], Some(BaseId::new()));
        assert!(guard.evaluate(Some(&assigned), now, "/campus/dashboard").is_allow());

        // Tenant admins are exempt from the base requirement.
        let admin = claims_with_roles(&["role.tenant.admin"], None);
        assert!(guard.evaluate(Some(&admin), now, "/campus/dashboard").is_allow());
    }

    #[test]
    fn area_state_follows_the_landed_path() {
        let g = guard();
        assert_eq!(
            g.area_after(Decision::Allow, "/campus/schedule"),
            AreaState::CampusArea
        );
        assert_eq!(
            g.area_after(Decision::Redirect("/tenant/dashboard"), "/campus/stock"),
            AreaState::TenantArea
        );
        assert_eq!(
            g.area_after(Decision::Redirect("/login"), "/tenant/dashboard"),
            AreaState::Unauthenticated
        );
        assert_eq!(g.area_after(Decision::Allow, "/settings"), AreaState::OtherArea);
    }
}
