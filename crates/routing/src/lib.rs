//! `eduhub-routing` — navigation policy for the admin surface.
//!
//! Pure decision logic: the route guard (allow/redirect per navigation),
//! the dashboard view resolver, and sidebar selection. No IO happens here;
//! the shell wires decisions to fetches and rendering.

pub mod guard;
pub mod resolver;
pub mod route;
pub mod sidebar;

pub use guard::{AreaState, CampusScope, Decision, GuardConfig, RouteGuard};
pub use resolver::{BaseContext, CampusView, TenantView, ViewVariant, resolve};
pub use route::Area;
pub use sidebar::{NavItem, Sidebar, campus_nav, resolve_sidebar, tenant_nav};
