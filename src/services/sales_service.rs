use serde_json::Value;

use crate::client::{BackendClient, BackendError};
use crate::domain::DateRange;

pub struct SalesService {
    client: BackendClient,
}

impl SalesService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Get the aggregated sales summary, optionally filtered by date range
    pub async fn get_summary(&self, range: &DateRange) -> Result<Value, BackendError> {
        self.client
            .get_json(&["sales", "sales_summary"], &range.to_query())
            .await
    }
}
