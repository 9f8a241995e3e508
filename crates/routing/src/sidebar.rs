//! Sidebar selection and static navigation tables.

use eduhub_auth::ActorClass;
use eduhub_core::BaseId;

/// Which sidebar menu an actor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sidebar {
    Tenant,
    Campus,
}

/// Select the sidebar for an actor.
///
/// Precedence: tenant admin without a base assignment sees the tenant
/// menu; base staff with an assigned base see the campus menu; a tenant
/// admin visiting a base still sees the tenant menu; everyone else falls
/// back to the campus menu.
pub fn resolve_sidebar(class: &ActorClass, base_id: Option<BaseId>) -> Sidebar {
    if class.is_tenant_admin && base_id.is_none() {
        Sidebar::Tenant
    } else if class.is_base_staff && base_id.is_some() {
        Sidebar::Campus
    } else if class.is_tenant_admin {
        Sidebar::Tenant
    } else {
        Sidebar::Campus
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Headquarters menu.
pub fn tenant_nav() -> &'static [NavItem] {
    const ITEMS: &[NavItem] = &[
        NavItem { label: "Global dashboard", path: "/tenant/dashboard" },
        NavItem { label: "Finance center", path: "/tenant/finance" },
        NavItem { label: "Bases", path: "/tenant/bases" },
        NavItem { label: "Participants", path: "/tenant/participants" },
        NavItem { label: "Course library", path: "/tenant/courses" },
        NavItem { label: "Rooms", path: "/tenant/rooms" },
        NavItem { label: "Assets", path: "/tenant/assets" },
        NavItem { label: "Materials", path: "/tenant/materials" },
        NavItem { label: "Membership tiers", path: "/tenant/membership-tiers" },
        NavItem { label: "Staff & permissions", path: "/tenant/users" },
    ];
    ITEMS
}

/// Campus menu.
pub fn campus_nav() -> &'static [NavItem] {
    const ITEMS: &[NavItem] = &[
        NavItem { label: "Campus dashboard", path: "/campus/dashboard" },
        NavItem { label: "Schedule", path: "/campus/schedule" },
        NavItem { label: "Members", path: "/campus/memberships" },
        NavItem { label: "Stock", path: "/campus/stock" },
    ];
    ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduhub_auth::{Role, classify};
    use crate::route::Area;

    fn class_of(raw: &[&str]) -> ActorClass {
        let roles: Vec<Role> = raw.iter().map(|r| Role::parse(r)).collect();
        classify(&roles)
    }

    #[test]
    fn tenant_admin_without_base_gets_tenant_menu() {
        let class = class_of(&["role.tenant.admin"]);
        assert_eq!(resolve_sidebar(&class, None), Sidebar::Tenant);
    }

    #[test]
    fn base_staff_with_base_gets_campus_menu() {
        let class = class_of(&["role.base.admin"]);
        assert_eq!(resolve_sidebar(&class, Some(BaseId::new())), Sidebar::Campus);
    }

    #[test]
    fn tenant_admin_visiting_a_base_keeps_tenant_menu() {
        let class = class_of(&["role.tenant.admin"]);
        assert_eq!(resolve_sidebar(&class, Some(BaseId::new())), Sidebar::Tenant);
    }

    #[test]
    fn fallback_is_campus_menu() {
        let class = class_of(&["role.base.teacher"]);
        assert_eq!(resolve_sidebar(&class, None), Sidebar::Campus);
    }

    #[test]
    fn nav_paths_stay_inside_their_area() {
        for item in tenant_nav() {
            assert_eq!(Area::of(item.path), Area::Tenant, "{}", item.path);
        }
        for item in campus_nav() {
            assert_eq!(Area::of(item.path), Area::Campus, "{}", item.path);
        }
    }
}
