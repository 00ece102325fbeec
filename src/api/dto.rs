use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::first_query_value;

// Query DTOs. Built from the raw query string: a repeated key keeps its first
// value, and dates stay raw strings until the handler parses them.
#[derive(Debug, Default)]
pub struct SalesSummaryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SalesSummaryQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            start_date: first_query_value(raw, "start_date"),
            end_date: first_query_value(raw, "end_date"),
        }
    }
}

#[derive(Debug, Default)]
pub struct DashboardQuery {
    pub date: Option<String>,
}

impl DashboardQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            date: first_query_value(raw, "date"),
        }
    }
}

// Response DTOs
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
