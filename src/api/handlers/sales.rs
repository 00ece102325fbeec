use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{dto::SalesSummaryQuery, error::ApiError, policy::ErrorPolicy};
use crate::domain::{DateRange, Resource};
use crate::services::SalesService;
use crate::utils::parse_date_param;

pub async fn get_sales_summary(
    State(service): State<Arc<SalesService>>,
    State(policy): State<ErrorPolicy>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Value>, ApiError> {
    let query = SalesSummaryQuery::from_raw(raw.as_deref());
    let start = parse_date_param(query.start_date.as_deref())
        .map_err(|_| policy.invalid_date("start_date"))?;
    let end = parse_date_param(query.end_date.as_deref())
        .map_err(|_| policy.invalid_date("end_date"))?;

    let summary = service
        .get_summary(&DateRange::new(start, end))
        .await
        .map_err(|e| policy.upstream(Resource::SalesSummary, e))?;

    Ok(Json(summary))
}
