//! Server types.

use hcloud_core::id::ServerTypeId;
use hcloud_core::types::Resource;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

impl HcloudClient {
    /// List server types.
    pub async fn list_server_types(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(Resource::ServerTypes, params).await
    }

    /// Fetch a server type.
    pub async fn get_server_type(&self, id: ServerTypeId) -> Result<Value> {
        self.get_resource(Resource::ServerTypes, id).await
    }
}
