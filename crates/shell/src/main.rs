use anyhow::Context;
use chrono::Utc;

use eduhub_gateway::ApiClient;
use eduhub_routing::{Decision, RouteGuard, route};
use eduhub_shell::AdminShell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    eduhub_observability::init();

    let api_url = std::env::var("EDUHUB_API_URL").unwrap_or_else(|_| {
        tracing::warn!("EDUHUB_API_URL not set; using local dev default");
        "http://localhost:8000/api/v1".to_string()
    });
    let email = std::env::var("EDUHUB_EMAIL").context("EDUHUB_EMAIL not set")?;
    let password = std::env::var("EDUHUB_PASSWORD").context("EDUHUB_PASSWORD not set")?;

    let shell = AdminShell::new(ApiClient::new(api_url), RouteGuard::default());

    shell.sign_in(&email, &password).await?;

    // Enter at the tenant home and follow one guard bounce, the way the
    // web surface would.
    let mut path = route::TENANT_DASHBOARD;
    if let Decision::Redirect(target) = shell.navigate(path, Utc::now()) {
        tracing::info!(from = path, to = target, "redirected");
        path = target;
        if path == route::LOGIN {
            anyhow::bail!("credential grants no dashboard access");
        }
        shell.navigate(path, Utc::now());
    }

    let page = shell
        .load_dashboard()
        .await
        .context("dashboard load failed")?;
    tracing::info!(view = ?page.view, failures = page.data.failures().len(), "dashboard loaded");

    Ok(())
}
