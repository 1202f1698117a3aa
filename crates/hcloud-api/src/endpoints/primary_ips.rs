//! Primary IPs.
//!
//! Unlike floating IPs, a primary IP can only be assigned to a powered-off
//! server and there is at most one of each family per server.

use hcloud_core::id::{ActionId, PrimaryIpId};
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const PRIMARY_IPS: Resource = Resource::PrimaryIps;

impl HcloudClient {
    /// List primary IPs. Accepts `ip` as an additional filter.
    pub async fn list_primary_ips(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(PRIMARY_IPS, params).await
    }

    /// Create a primary IP.
    ///
    /// Needs `name`, `type` and `assignee_type`; give either `assignee_id` or
    /// `datacenter`.
    pub async fn create_primary_ip<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(PRIMARY_IPS, body).await
    }

    /// Fetch a primary IP.
    pub async fn get_primary_ip(&self, id: PrimaryIpId) -> Result<Value> {
        self.get_resource(PRIMARY_IPS, id).await
    }

    /// Update `name`, `labels` or `auto_delete`.
    pub async fn update_primary_ip<B>(&self, id: PrimaryIpId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(PRIMARY_IPS, id, body).await
    }

    /// Delete a primary IP.
    pub async fn delete_primary_ip(&self, id: PrimaryIpId) -> Result<Value> {
        self.delete_resource(PRIMARY_IPS, id).await
    }

    /// Assign to a resource (`assignee_id`, `assignee_type`).
    pub async fn assign_primary_ip<B>(&self, id: PrimaryIpId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(PRIMARY_IPS, id, "assign", Some(body)).await
    }

    /// Unassign from its resource.
    pub async fn unassign_primary_ip(&self, id: PrimaryIpId) -> Result<Value> {
        self.run_action::<()>(PRIMARY_IPS, id, "unassign", None)
            .await
    }

    /// Set the reverse DNS entry (`ip`, `dns_ptr`).
    pub async fn change_primary_ip_dns_ptr<B>(&self, id: PrimaryIpId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(PRIMARY_IPS, id, "change_dns_ptr", Some(body))
            .await
    }

    /// Change `delete` protection.
    pub async fn change_primary_ip_protection<B>(&self, id: PrimaryIpId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(PRIMARY_IPS, id, "change_protection", Some(body))
            .await
    }

    /// List actions across all primary IPs.
    pub async fn list_primary_ip_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(PRIMARY_IPS, params).await
    }

    /// Fetch a primary IP action.
    pub async fn get_primary_ip_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(PRIMARY_IPS, action_id).await
    }

    /// List the actions of one primary IP.
    pub async fn list_actions_for_primary_ip(
        &self,
        id: PrimaryIpId,
        params: &ListParams,
    ) -> Result<Value> {
        self.list_item_actions(PRIMARY_IPS, id, params).await
    }

    /// Fetch one action of a primary IP.
    pub async fn get_action_for_primary_ip(
        &self,
        id: PrimaryIpId,
        action_id: ActionId,
    ) -> Result<Value> {
        self.get_item_action(PRIMARY_IPS, id, action_id).await
    }
}
