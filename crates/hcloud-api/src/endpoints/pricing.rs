//! Prices of all resources.

use hcloud_core::query::QueryParams;
use hcloud_core::types::Resource;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::Result;

impl HcloudClient {
    /// Fetch the price list.
    pub async fn get_pricing(&self) -> Result<Value> {
        self.get(Resource::Pricing.path(), &QueryParams::new())
            .await
    }
}
