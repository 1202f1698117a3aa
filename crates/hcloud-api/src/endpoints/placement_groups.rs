//! Placement groups.

use hcloud_core::id::PlacementGroupId;
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const PLACEMENT_GROUPS: Resource = Resource::PlacementGroups;

impl HcloudClient {
    /// List placement groups.
    pub async fn list_placement_groups(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(PLACEMENT_GROUPS, params).await
    }

    /// Create a placement group (`name`, `type: spread`).
    pub async fn create_placement_group<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(PLACEMENT_GROUPS, body).await
    }

    /// Fetch a placement group.
    pub async fn get_placement_group(&self, id: PlacementGroupId) -> Result<Value> {
        self.get_resource(PLACEMENT_GROUPS, id).await
    }

    /// Update `name` or `labels`.
    pub async fn update_placement_group<B>(&self, id: PlacementGroupId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(PLACEMENT_GROUPS, id, body).await
    }

    /// Delete a placement group.
    pub async fn delete_placement_group(&self, id: PlacementGroupId) -> Result<Value> {
        self.delete_resource(PLACEMENT_GROUPS, id).await
    }
}
