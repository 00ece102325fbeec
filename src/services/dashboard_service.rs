use chrono::NaiveDate;
use serde_json::Value;

use crate::client::{BackendClient, BackendError};
use crate::domain::{DashboardPeriod, format_backend_date};

pub struct DashboardService {
    client: BackendClient,
}

impl DashboardService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Get the daily, weekly or monthly dashboard containing `target_date`.
    /// Without a date the backend picks its own default.
    pub async fn get_dashboard(
        &self,
        period: DashboardPeriod,
        target_date: Option<NaiveDate>,
    ) -> Result<Value, BackendError> {
        let query: Vec<(&str, String)> = target_date
            .map(|date| ("date", format_backend_date(date)))
            .into_iter()
            .collect();

        self.client
            .get_json(&["dashboard", period.as_str()], &query)
            .await
    }
}
