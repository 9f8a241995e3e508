//! `eduhub-gateway` — authenticated client over the external backend API.
//!
//! The backend owns auth, storage, and business logic; this crate attaches
//! the bearer credential to outbound calls and surfaces typed results or
//! errors to the view layer. It never retries — retry policy, if any,
//! belongs to the caller.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::GatewayError;
pub use types::{
    CampusDashboardStats, PendingPayment, PendingStaff, StockAlert, TenantAnalytics,
    TenantDashboardStats, UpcomingClass,
};
