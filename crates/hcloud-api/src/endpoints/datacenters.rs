//! Datacenters.

use hcloud_core::id::DatacenterId;
use hcloud_core::types::Resource;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

impl HcloudClient {
    /// List datacenters. The response also names the `recommendation`.
    pub async fn list_datacenters(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(Resource::Datacenters, params).await
    }

    /// Fetch a datacenter.
    pub async fn get_datacenter(&self, id: DatacenterId) -> Result<Value> {
        self.get_resource(Resource::Datacenters, id).await
    }
}
