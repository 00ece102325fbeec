use axum::{
    Json,
    extract::{Path, RawQuery, State, rejection::PathRejection},
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{dto::DashboardQuery, error::ApiError, policy::ErrorPolicy};
use crate::domain::{DashboardPeriod, Resource};
use crate::services::DashboardService;
use crate::utils::parse_date_param;

pub async fn get_dashboard(
    State(service): State<Arc<DashboardService>>,
    State(policy): State<ErrorPolicy>,
    period: Result<Path<String>, PathRejection>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Value>, ApiError> {
    let Path(period) = period.map_err(|_| policy.invalid_path())?;
    let period =
        DashboardPeriod::parse(&period).ok_or_else(|| policy.unknown_dashboard_period(&period))?;

    let query = DashboardQuery::from_raw(raw.as_deref());
    let target_date =
        parse_date_param(query.date.as_deref()).map_err(|_| policy.invalid_date("date"))?;

    let dashboard = service
        .get_dashboard(period, target_date)
        .await
        .map_err(|e| policy.upstream(Resource::Dashboard, e))?;

    Ok(Json(dashboard))
}
