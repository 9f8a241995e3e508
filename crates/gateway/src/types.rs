//! Response payloads for the dashboard endpoints.
//!
//! Field sets mirror the backend wire format; amounts are integer cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tenant-wide statistics (`GET /tenant/dashboard/stats`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantDashboardStats {
    pub total_bases: i64,
    pub active_bases: i64,
    pub today_revenue: i64,
    pub month_revenue: i64,
    pub revenue_growth_rate: f64,
    pub today_new_students: i64,
    pub student_growth_rate: f64,
    pub pending_audit_count: i64,
    /// Daily revenue for the trailing window, parallel to `trend_dates`.
    #[serde(default)]
    pub revenue_trend: Vec<i64>,
    #[serde(default)]
    pub trend_dates: Vec<String>,
    #[serde(default)]
    pub student_trend: Vec<i64>,
}

/// Deep-dive analytics (`GET /tenant/dashboard/analytics`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantAnalytics {
    pub trial_class_count: i64,
    pub new_leads_count: i64,
    pub new_members_count: i64,
    pub conversion_rate: f64,
    pub active_rate: f64,
    pub staff_pending_count: i64,
    pub staff_total_count: i64,
}

/// Onboarding queue entry (`GET /tenant/dashboard/pending-staff`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingStaff {
    pub full_name: String,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
}

/// Payment record awaiting approval (`GET /finance/payments?status=PENDING`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPayment {
    pub id: Uuid,
    pub order_id: Uuid,
    pub amount_cents: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Campus headline numbers (`GET /base/dashboard/stats`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusDashboardStats {
    pub participant_count: i64,
    pub member_count: i64,
    pub today_class_count: i64,
}

/// Upcoming class entry (`GET /base/classes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingClass {
    pub id: Uuid,
    pub course_name_key: String,
    pub start_time: DateTime<Utc>,
    pub teacher_name: String,
    pub room_name: String,
}

/// Low-stock warning (`GET /base/stock/alerts`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAlert {
    pub material_id: Uuid,
    pub name_key: String,
    pub current_stock: i64,
}
