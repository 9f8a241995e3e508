//! Route table: access-controlled prefixes and well-known targets.

/// Sign-in route; also the redirect target for every unauthenticated
/// navigation.
pub const LOGIN: &str = "/login";

/// Home view for tenant (headquarters) staff.
pub const TENANT_DASHBOARD: &str = "/tenant/dashboard";

/// Home view for campus staff.
pub const CAMPUS_DASHBOARD: &str = "/campus/dashboard";

/// Broad area a requested path belongs to.
///
/// Only `/tenant/*` and `/campus/*` are access-controlled; every other
/// path is open to any authenticated actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Tenant,
    Campus,
    Open,
}

impl Area {
    /// Classify a path by its access-controlled prefix.
    ///
    /// Matching is segment-aware: `/tenant` and `/tenant/finance` are
    /// tenant-area, `/tenantx` is open.
    pub fn of(path: &str) -> Self {
        if prefix_segment_matches(path, "/tenant") {
            Self::Tenant
        } else if prefix_segment_matches(path, "/campus") {
            Self::Campus
        } else {
            Self::Open
        }
    }
}

fn prefix_segment_matches(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
