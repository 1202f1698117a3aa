//! Global action records.

use hcloud_core::id::ActionId;
use hcloud_core::types::Resource;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

impl HcloudClient {
    /// List actions of all resources.
    ///
    /// The API requires at least one `id` filter on this collection; add them
    /// with [`ListParams::with_filter`].
    pub async fn list_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(Resource::Actions, params).await
    }

    /// Fetch an action by ID.
    pub async fn get_action(&self, id: ActionId) -> Result<Value> {
        self.get_resource(Resource::Actions, id).await
    }
}
