//! Servers: lifecycle, power management and the server action endpoints.
//!
//! Power and maintenance commands return an `action` document describing the
//! asynchronous operation; fetch it again with [`HcloudClient::get_action`]
//! to observe progress.

use hcloud_core::id::{ActionId, ServerId};
use hcloud_core::types::Resource;
use hcloud_core::query::QueryParams;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::{ListParams, MetricsParams};
use crate::Result;

const SERVERS: Resource = Resource::Servers;

impl HcloudClient {
    /// List servers.
    ///
    /// Supports `name`, `label_selector`, `status` and `sort` filters.
    pub async fn list_servers(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(SERVERS, params).await
    }

    /// Create a server.
    ///
    /// The body needs at least `name`, `server_type` and `image`. The response
    /// carries the `server`, the creating `action`, any `next_actions` and the
    /// `root_password` when no SSH key was given.
    pub async fn create_server<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(SERVERS, body).await
    }

    /// Fetch a server.
    pub async fn get_server(&self, id: ServerId) -> Result<Value> {
        self.get_resource(SERVERS, id).await
    }

    /// Update a server's `name` or `labels`.
    pub async fn update_server<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(SERVERS, id, body).await
    }

    /// Delete a server. Returns the deletion action.
    pub async fn delete_server(&self, id: ServerId) -> Result<Value> {
        self.delete_resource(SERVERS, id).await
    }

    /// Fetch CPU, disk or network metrics for a server.
    pub async fn get_server_metrics(&self, id: ServerId, params: &MetricsParams) -> Result<Value> {
        let query: QueryParams = params.to_query()?;
        self.get(&SERVERS.item_sub(id, "metrics"), &query).await
    }

    /// List actions across all servers.
    pub async fn list_server_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(SERVERS, params).await
    }

    /// Fetch a server action by ID.
    pub async fn get_server_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(SERVERS, action_id).await
    }

    /// List the actions of one server.
    pub async fn list_actions_for_server(
        &self,
        id: ServerId,
        params: &ListParams,
    ) -> Result<Value> {
        self.list_item_actions(SERVERS, id, params).await
    }

    /// Fetch one action of a server.
    pub async fn get_action_for_server(&self, id: ServerId, action_id: ActionId) -> Result<Value> {
        self.get_item_action(SERVERS, id, action_id).await
    }

    /// Power on a server.
    pub async fn poweron_server(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "poweron", None).await
    }

    /// Cut power to a server. This is a hard stop that may lose data.
    pub async fn poweroff_server(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "poweroff", None).await
    }

    /// Send an ACPI reboot request.
    pub async fn reboot_server(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "reboot", None).await
    }

    /// Hard-reset a server.
    pub async fn reset_server(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "reset", None).await
    }

    /// Send an ACPI shutdown request.
    pub async fn shutdown_server(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "shutdown", None).await
    }

    /// Reset the root password. The response carries the new `root_password`.
    pub async fn reset_server_password(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "reset_password", None)
            .await
    }

    /// Boot the next time into the rescue system (`type`, `ssh_keys`).
    pub async fn enable_server_rescue<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "enable_rescue", Some(body))
            .await
    }

    /// Disable the rescue system.
    pub async fn disable_server_rescue(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "disable_rescue", None)
            .await
    }

    /// Create an image (snapshot or backup) from a server's disk.
    pub async fn create_server_image<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "create_image", Some(body))
            .await
    }

    /// Reinstall a server from an `image`.
    pub async fn rebuild_server<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "rebuild", Some(body)).await
    }

    /// Change a stopped server's `server_type`, optionally with `upgrade_disk`.
    pub async fn change_server_type<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "change_type", Some(body))
            .await
    }

    /// Enable daily backups.
    pub async fn enable_server_backup(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "enable_backup", None)
            .await
    }

    /// Disable backups. Existing backups are deleted.
    pub async fn disable_server_backup(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "disable_backup", None)
            .await
    }

    /// Attach an `iso` to the server's virtual drive.
    pub async fn attach_iso_to_server<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "attach_iso", Some(body)).await
    }

    /// Eject the attached ISO.
    pub async fn detach_iso_from_server(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "detach_iso", None).await
    }

    /// Set the reverse DNS entry (`ip`, `dns_ptr`) of a server address.
    pub async fn change_server_dns_ptr<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "change_dns_ptr", Some(body))
            .await
    }

    /// Change `delete`/`rebuild` protection.
    pub async fn change_server_protection<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "change_protection", Some(body))
            .await
    }

    /// Request a VNC console. The response carries `wss_url` and `password`.
    pub async fn request_server_console(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "request_console", None)
            .await
    }

    /// Attach a server to a `network`.
    pub async fn attach_server_to_network<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "attach_to_network", Some(body))
            .await
    }

    /// Detach a server from a `network`.
    pub async fn detach_server_from_network<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "detach_from_network", Some(body))
            .await
    }

    /// Replace the alias IPs a server uses in a network.
    pub async fn change_server_alias_ips<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "change_alias_ips", Some(body))
            .await
    }

    /// Add a stopped server to a `placement_group`.
    pub async fn add_server_to_placement_group<B>(&self, id: ServerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(SERVERS, id, "add_to_placement_group", Some(body))
            .await
    }

    /// Remove a stopped server from its placement group.
    pub async fn remove_server_from_placement_group(&self, id: ServerId) -> Result<Value> {
        self.run_action::<()>(SERVERS, id, "remove_from_placement_group", None)
            .await
    }
}
