use serde_json::Value;

use crate::client::{BackendClient, BackendError};

pub struct OrderService {
    client: BackendClient,
}

impl OrderService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Fetch a single order. The id is an opaque token and is not validated.
    pub async fn get_by_id(&self, id: &str) -> Result<Value, BackendError> {
        self.client.get_json(&["orders", id], &[]).await
    }
}
