//! Load balancer types.

use hcloud_core::id::LoadBalancerTypeId;
use hcloud_core::types::Resource;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

impl HcloudClient {
    /// List load balancer types.
    pub async fn list_load_balancer_types(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(Resource::LoadBalancerTypes, params)
            .await
    }

    /// Fetch a load balancer type.
    pub async fn get_load_balancer_type(&self, id: LoadBalancerTypeId) -> Result<Value> {
        self.get_resource(Resource::LoadBalancerTypes, id).await
    }
}
