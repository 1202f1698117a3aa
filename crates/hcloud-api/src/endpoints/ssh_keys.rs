//! SSH keys.

use hcloud_core::id::SshKeyId;
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const SSH_KEYS: Resource = Resource::SshKeys;

impl HcloudClient {
    /// List SSH keys. Accepts `fingerprint` as an additional filter.
    pub async fn list_ssh_keys(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(SSH_KEYS, params).await
    }

    /// Upload a key (`name`, `public_key`).
    pub async fn create_ssh_key<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(SSH_KEYS, body).await
    }

    /// Fetch an SSH key.
    pub async fn get_ssh_key(&self, id: SshKeyId) -> Result<Value> {
        self.get_resource(SSH_KEYS, id).await
    }

    /// Update `name` or `labels`.
    pub async fn update_ssh_key<B>(&self, id: SshKeyId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(SSH_KEYS, id, body).await
    }

    /// Delete an SSH key.
    pub async fn delete_ssh_key(&self, id: SshKeyId) -> Result<Value> {
        self.delete_resource(SSH_KEYS, id).await
    }
}
