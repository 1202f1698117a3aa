//! Block storage volumes.

use hcloud_core::id::{ActionId, VolumeId};
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const VOLUMES: Resource = Resource::Volumes;

impl HcloudClient {
    /// List volumes.
    pub async fn list_volumes(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(VOLUMES, params).await
    }

    /// Create a volume.
    ///
    /// Needs `name` and `size` (GB) plus either `location` or `server`;
    /// `automount` and `format` apply only when attaching to a server.
    pub async fn create_volume<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(VOLUMES, body).await
    }

    /// Fetch a volume.
    pub async fn get_volume(&self, id: VolumeId) -> Result<Value> {
        self.get_resource(VOLUMES, id).await
    }

    /// Update `name` or `labels`.
    pub async fn update_volume<B>(&self, id: VolumeId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(VOLUMES, id, body).await
    }

    /// Delete a detached volume.
    pub async fn delete_volume(&self, id: VolumeId) -> Result<Value> {
        self.delete_resource(VOLUMES, id).await
    }

    /// Attach to a `server` in the same location.
    pub async fn attach_volume<B>(&self, id: VolumeId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(VOLUMES, id, "attach", Some(body)).await
    }

    /// Detach from its server.
    pub async fn detach_volume(&self, id: VolumeId) -> Result<Value> {
        self.run_action::<()>(VOLUMES, id, "detach", None).await
    }

    /// Grow a volume to `size` GB. Volumes cannot shrink.
    pub async fn resize_volume<B>(&self, id: VolumeId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(VOLUMES, id, "resize", Some(body)).await
    }

    /// Change `delete` protection.
    pub async fn change_volume_protection<B>(&self, id: VolumeId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(VOLUMES, id, "change_protection", Some(body))
            .await
    }

    /// List actions across all volumes.
    pub async fn list_volume_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(VOLUMES, params).await
    }

    /// Fetch a volume action.
    pub async fn get_volume_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(VOLUMES, action_id).await
    }

    /// List the actions of one volume.
    pub async fn list_actions_for_volume(&self, id: VolumeId, params: &ListParams) -> Result<Value> {
        self.list_item_actions(VOLUMES, id, params).await
    }

    /// Fetch one action of a volume.
    pub async fn get_action_for_volume(&self, id: VolumeId, action_id: ActionId) -> Result<Value> {
        self.get_item_action(VOLUMES, id, action_id).await
    }
}
