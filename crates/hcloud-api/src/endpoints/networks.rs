//! Private networks, subnets and routes.

use hcloud_core::id::{ActionId, NetworkId};
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const NETWORKS: Resource = Resource::Networks;

impl HcloudClient {
    /// List networks.
    pub async fn list_networks(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(NETWORKS, params).await
    }

    /// Create a network with an `ip_range` and optional `subnets` and `routes`.
    pub async fn create_network<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(NETWORKS, body).await
    }

    /// Fetch a network.
    pub async fn get_network(&self, id: NetworkId) -> Result<Value> {
        self.get_resource(NETWORKS, id).await
    }

    /// Update `name`, `labels` or `expose_routes_to_vswitch`.
    pub async fn update_network<B>(&self, id: NetworkId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(NETWORKS, id, body).await
    }

    /// Delete a network.
    pub async fn delete_network(&self, id: NetworkId) -> Result<Value> {
        self.delete_resource(NETWORKS, id).await
    }

    /// Add a route (`destination`, `gateway`).
    pub async fn add_network_route<B>(&self, id: NetworkId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(NETWORKS, id, "add_route", Some(body)).await
    }

    /// Delete a route.
    pub async fn delete_network_route<B>(&self, id: NetworkId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(NETWORKS, id, "delete_route", Some(body))
            .await
    }

    /// Add a subnet (`type`, `network_zone`, `ip_range`).
    pub async fn add_network_subnet<B>(&self, id: NetworkId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(NETWORKS, id, "add_subnet", Some(body)).await
    }

    /// Delete the subnet with the given `ip_range`.
    pub async fn delete_network_subnet<B>(&self, id: NetworkId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(NETWORKS, id, "delete_subnet", Some(body))
            .await
    }

    /// Grow the network's `ip_range`.
    pub async fn change_network_ip_range<B>(&self, id: NetworkId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(NETWORKS, id, "change_ip_range", Some(body))
            .await
    }

    /// Change `delete` protection.
    pub async fn change_network_protection<B>(&self, id: NetworkId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(NETWORKS, id, "change_protection", Some(body))
            .await
    }

    /// List actions across all networks.
    pub async fn list_network_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(NETWORKS, params).await
    }

    /// Fetch a network action.
    pub async fn get_network_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(NETWORKS, action_id).await
    }

    /// List the actions of one network.
    pub async fn list_actions_for_network(
        &self,
        id: NetworkId,
        params: &ListParams,
    ) -> Result<Value> {
        self.list_item_actions(NETWORKS, id, params).await
    }

    /// Fetch one action of a network.
    pub async fn get_action_for_network(&self, id: NetworkId, action_id: ActionId) -> Result<Value> {
        self.get_item_action(NETWORKS, id, action_id).await
    }
}
