//! ISO images for the virtual drive.

use hcloud_core::id::IsoId;
use hcloud_core::types::Resource;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

impl HcloudClient {
    /// List ISOs.
    pub async fn list_isos(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(Resource::Isos, params).await
    }

    /// Fetch an ISO.
    pub async fn get_iso(&self, id: IsoId) -> Result<Value> {
        self.get_resource(Resource::Isos, id).await
    }
}
