use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{error::ApiError, policy::ErrorPolicy};
use crate::domain::Resource;
use crate::services::OrderService;

pub async fn get_order(
    State(service): State<Arc<OrderService>>,
    State(policy): State<ErrorPolicy>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id.map_err(|_| policy.invalid_path())?;

    let order = service
        .get_by_id(&id)
        .await
        .map_err(|e| policy.upstream(Resource::Order, e))?;

    Ok(Json(order))
}
