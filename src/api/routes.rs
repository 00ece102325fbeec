use axum::{
    Router,
    extract::FromRef,
    routing::{any, get},
};
use std::sync::Arc;

use crate::client::{BackendClient, BackendError};
use crate::config::Settings;
use crate::services::{DashboardService, OrderService, ProxyService, SalesService};

use super::handlers;
use super::policy::ErrorPolicy;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub order_service: Arc<OrderService>,
    pub sales_service: Arc<SalesService>,
    pub dashboard_service: Arc<DashboardService>,
    pub proxy_service: Arc<ProxyService>,
    pub error_policy: ErrorPolicy,
}

impl AppState {
    /// Wire every service onto one shared backend client.
    pub fn from_settings(settings: &Settings) -> Result<Self, BackendError> {
        let client = BackendClient::new(&settings.backend)?;

        Ok(AppState {
            order_service: Arc::new(OrderService::new(client.clone())),
            sales_service: Arc::new(SalesService::new(client.clone())),
            dashboard_service: Arc::new(DashboardService::new(client.clone())),
            proxy_service: Arc::new(ProxyService::new(client, settings.app.max_body_bytes)),
            error_policy: ErrorPolicy::new(&settings.app),
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Orders
        .route("/api/orders/{id}", get(handlers::get_order))
        // Sales
        .route("/api/sales/sales_summary", get(handlers::get_sales_summary))
        // Dashboards
        .route("/api/dashboard/{period}", get(handlers::get_dashboard))
        // Everything else under /api goes straight to the backend
        .route("/api/{*path}", any(handlers::forward_to_backend))
        .with_state(state)
}

async fn health_check() -> axum::Json<crate::api::dto::HealthResponse> {
    axum::Json(crate::api::dto::HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}
