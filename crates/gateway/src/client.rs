//! The API client.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::types::{
    CampusDashboardStats, PendingPayment, PendingStaff, StockAlert, TenantAnalytics,
    TenantDashboardStats, UpcomingClass,
};

/// Thin authenticated client over the external backend REST API.
///
/// Attaches `Authorization: Bearer <credential>` per call; surfaces
/// non-2xx responses as [`GatewayError::Api`] and transport failures as
/// [`GatewayError::Network`]. No automatic retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:8000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for an opaque bearer token
    /// (`POST /auth/login`). A non-2xx response means invalid credentials
    /// as far as this surface is concerned.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(GatewayError::Network)?;

        let response = into_success(response).await?;
        let body: LoginResponse = response.json().await.map_err(GatewayError::Decode)?;
        Ok(body.token)
    }

    /// Authenticated GET returning the endpoint's JSON payload.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(GatewayError::Network)?;

        let response = into_success(response).await?;
        response.json().await.map_err(GatewayError::Decode)
    }

    // Typed dashboard endpoints. Each maps one backend read; the shell
    // decides which of these an actor's roles permit.

    pub async fn tenant_dashboard_stats(
        &self,
        token: &str,
    ) -> Result<TenantDashboardStats, GatewayError> {
        self.get("/tenant/dashboard/stats", token).await
    }

    pub async fn tenant_dashboard_analytics(
        &self,
        token: &str,
    ) -> Result<TenantAnalytics, GatewayError> {
        self.get("/tenant/dashboard/analytics", token).await
    }

    pub async fn tenant_pending_staff(
        &self,
        token: &str,
    ) -> Result<Vec<PendingStaff>, GatewayError> {
        self.get("/tenant/dashboard/pending-staff", token).await
    }

    pub async fn pending_payments(&self, token: &str) -> Result<Vec<PendingPayment>, GatewayError> {
        self.get("/finance/payments?status=PENDING", token).await
    }

    pub async fn campus_dashboard_stats(
        &self,
        token: &str,
    ) -> Result<CampusDashboardStats, GatewayError> {
        self.get("/base/dashboard/stats", token).await
    }

    pub async fn upcoming_classes(&self, token: &str) -> Result<Vec<UpcomingClass>, GatewayError> {
        self.get("/base/classes", token).await
    }

    pub async fn stock_alerts(&self, token: &str) -> Result<Vec<StockAlert>, GatewayError> {
        self.get("/base/stock/alerts", token).await
    }
}

async fn into_success(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Keep whatever body the backend sent; many endpoints return a plain
    // error string or a small JSON object.
    let message = response.text().await.unwrap_or_default();
    Err(GatewayError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/api/v1///");
        assert_eq!(client.base_url(), "http://localhost:8000/api/v1");
    }
}
