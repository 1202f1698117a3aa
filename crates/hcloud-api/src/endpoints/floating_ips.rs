//! Floating IPs.

use hcloud_core::id::{ActionId, FloatingIpId};
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const FLOATING_IPS: Resource = Resource::FloatingIps;

impl HcloudClient {
    /// List floating IPs.
    pub async fn list_floating_ips(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(FLOATING_IPS, params).await
    }

    /// Create a floating IP. Needs `type` and either `server` or `home_location`.
    pub async fn create_floating_ip<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(FLOATING_IPS, body).await
    }

    /// Fetch a floating IP.
    pub async fn get_floating_ip(&self, id: FloatingIpId) -> Result<Value> {
        self.get_resource(FLOATING_IPS, id).await
    }

    /// Update `name`, `description` or `labels`.
    pub async fn update_floating_ip<B>(&self, id: FloatingIpId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(FLOATING_IPS, id, body).await
    }

    /// Delete a floating IP.
    pub async fn delete_floating_ip(&self, id: FloatingIpId) -> Result<Value> {
        self.delete_resource(FLOATING_IPS, id).await
    }

    /// Assign to a `server`.
    pub async fn assign_floating_ip<B>(&self, id: FloatingIpId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(FLOATING_IPS, id, "assign", Some(body)).await
    }

    /// Unassign from its server.
    pub async fn unassign_floating_ip(&self, id: FloatingIpId) -> Result<Value> {
        self.run_action::<()>(FLOATING_IPS, id, "unassign", None)
            .await
    }

    /// Set the reverse DNS entry (`ip`, `dns_ptr`).
    pub async fn change_floating_ip_dns_ptr<B>(&self, id: FloatingIpId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(FLOATING_IPS, id, "change_dns_ptr", Some(body))
            .await
    }

    /// Change `delete` protection.
    pub async fn change_floating_ip_protection<B>(
        &self,
        id: FloatingIpId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(FLOATING_IPS, id, "change_protection", Some(body))
            .await
    }

    /// List actions across all floating IPs.
    pub async fn list_floating_ip_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(FLOATING_IPS, params).await
    }

    /// Fetch a floating IP action.
    pub async fn get_floating_ip_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(FLOATING_IPS, action_id).await
    }

    /// List the actions of one floating IP.
    pub async fn list_actions_for_floating_ip(
        &self,
        id: FloatingIpId,
        params: &ListParams,
    ) -> Result<Value> {
        self.list_item_actions(FLOATING_IPS, id, params).await
    }

    /// Fetch one action of a floating IP.
    pub async fn get_action_for_floating_ip(
        &self,
        id: FloatingIpId,
        action_id: ActionId,
    ) -> Result<Value> {
        self.get_item_action(FLOATING_IPS, id, action_id).await
    }
}
