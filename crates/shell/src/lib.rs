//! `eduhub-shell` — composition root for the admin surface.
//!
//! Wires the session store, route guard, view resolver, and gateway client
//! into the sign-in / navigate / load-dashboard flow the UI drives.

pub mod app;
pub mod dashboard;

pub use app::{AdminShell, DashboardError, SignInError};
pub use dashboard::{CampusDashboardData, DashboardData, DashboardPage, TenantDashboardData};
