//! Coarse actor categories derived from the decoded role list.

use crate::{Role, TenantRole};

/// Classification of an actor for routing and view-resolution decisions.
///
/// `base_id` presence and `is_base_staff` are correlated by business
/// convention but not enforced here; the route guard owns that policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActorClass {
    /// Any `role.tenant.*` role present.
    pub is_tenant_staff: bool,
    /// Any `role.base.*` role present.
    pub is_base_staff: bool,
    /// `role.tenant.admin` present.
    pub is_tenant_admin: bool,
}

impl ActorClass {
    /// Neither tenant nor base staff (empty or unrecognized role list).
    pub fn is_unscoped(&self) -> bool {
        !self.is_tenant_staff && !self.is_base_staff
    }
}

/// Derive coarse categories from a role list.
///
/// - No IO, no panics
/// - Deterministic and order-independent (duplicates are harmless)
pub fn classify(roles: &[Role]) -> ActorClass {
    let mut class = ActorClass::default();

    for role in roles {
        match role {
            Role::Tenant(tenant) => {
                class.is_tenant_staff = true;
                if *tenant == TenantRole::Admin {
                    class.is_tenant_admin = true;
                }
            }
            Role::Base(_) => class.is_base_staff = true,
            Role::Other(_) => {}
        }
    }

    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaseRole;
    use proptest::prelude::*;

    #[test]
    fn empty_list_is_unscoped() {
        let class = classify(&[]);
        assert!(class.is_unscoped());
        assert!(!class.is_tenant_admin);
    }

    #[test]
    fn tenant_prefix_marks_tenant_staff() {
        let class = classify(&[Role::parse("role.tenant.finance")]);
        assert!(class.is_tenant_staff);
        assert!(!class.is_base_staff);
        assert!(!class.is_tenant_admin);
    }

    #[test]
    fn only_exact_admin_marks_tenant_admin() {
        assert!(classify(&[Role::parse("role.tenant.admin")]).is_tenant_admin);
        assert!(!classify(&[Role::parse("role.tenant.administrator")]).is_tenant_admin);
        assert!(!classify(&[Role::parse("role.base.admin")]).is_tenant_admin);
    }

    #[test]
    fn unrecognized_roles_grant_nothing() {
        let class = classify(&[
            Role::parse("role.customer.vip"),
            Role::parse("role.teacher"),
        ]);
        assert!(class.is_unscoped());
    }

    #[test]
    fn dual_role_actor_is_both() {
        let class = classify(&[
            Role::Tenant(TenantRole::Finance),
            Role::Base(BaseRole::Teacher),
        ]);
        assert!(class.is_tenant_staff);
        assert!(class.is_base_staff);
    }

    fn arb_role() -> impl Strategy<Value = Role> {
        prop_oneof![
            Just(Role::parse("role.tenant.admin")),
            Just(Role::parse("role.tenant.finance")),
            Just(Role::parse("role.tenant.operation")),
            Just(Role::parse("role.tenant.hr")),
            Just(Role::parse("role.base.admin")),
            Just(Role::parse("role.base.academic")),
            Just(Role::parse("role.base.teacher")),
            Just(Role::parse("role.teacher")),
            "[a-z.]{1,24}".prop_map(|s| Role::parse(&s)),
        ]
    }

    proptest! {
        /// Property: classification is order-independent — permuting the
        /// role list never changes the result.
        #[test]
        fn classification_is_order_independent(
            roles in prop::collection::vec(arb_role(), 0..8),
            rotation in 0usize..8,
        ) {
            let mut rotated = roles.clone();
            if !rotated.is_empty() {
                let len = rotated.len();
                rotated.rotate_left(rotation % len);
            }
            prop_assert_eq!(classify(&roles), classify(&rotated));
        }

        /// Property: any `role.tenant.*` role implies tenant staff; none
        /// implies not tenant staff.
        #[test]
        fn tenant_staff_iff_tenant_scope_present(
            roles in prop::collection::vec(arb_role(), 0..8),
        ) {
            let expected = roles.iter().any(|r| matches!(r, Role::Tenant(_)));
            prop_assert_eq!(classify(&roles).is_tenant_staff, expected);
        }
    }
}
