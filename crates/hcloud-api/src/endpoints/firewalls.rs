//! Firewalls and their rule sets.

use hcloud_core::id::{ActionId, FirewallId};
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const FIREWALLS: Resource = Resource::Firewalls;

impl HcloudClient {
    /// List firewalls.
    pub async fn list_firewalls(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(FIREWALLS, params).await
    }

    /// Create a firewall, optionally with initial `rules` and `apply_to`.
    pub async fn create_firewall<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(FIREWALLS, body).await
    }

    /// Fetch a firewall.
    pub async fn get_firewall(&self, id: FirewallId) -> Result<Value> {
        self.get_resource(FIREWALLS, id).await
    }

    /// Update a firewall's `name` or `labels`.
    pub async fn update_firewall<B>(&self, id: FirewallId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(FIREWALLS, id, body).await
    }

    /// Delete a firewall. It must not be applied to any resource.
    pub async fn delete_firewall(&self, id: FirewallId) -> Result<Value> {
        self.delete_resource(FIREWALLS, id).await
    }

    /// Apply a firewall to servers or label selectors (`apply_to`).
    pub async fn apply_firewall_to_resources<B>(&self, id: FirewallId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(FIREWALLS, id, "apply_to_resources", Some(body))
            .await
    }

    /// Remove a firewall from resources (`remove_from`).
    pub async fn remove_firewall_from_resources<B>(
        &self,
        id: FirewallId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(FIREWALLS, id, "remove_from_resources", Some(body))
            .await
    }

    /// Replace all rules of a firewall.
    ///
    /// An empty `rules` array removes every rule. The response holds one
    /// action per resource the firewall is applied to.
    pub async fn set_firewall_rules<B>(&self, id: FirewallId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(FIREWALLS, id, "set_rules", Some(body)).await
    }

    /// List actions across all firewalls.
    pub async fn list_firewall_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(FIREWALLS, params).await
    }

    /// Fetch a firewall action.
    pub async fn get_firewall_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(FIREWALLS, action_id).await
    }

    /// List the actions of one firewall.
    pub async fn list_actions_for_firewall(
        &self,
        id: FirewallId,
        params: &ListParams,
    ) -> Result<Value> {
        self.list_item_actions(FIREWALLS, id, params).await
    }

    /// Fetch one action of a firewall.
    pub async fn get_action_for_firewall(
        &self,
        id: FirewallId,
        action_id: ActionId,
    ) -> Result<Value> {
        self.get_item_action(FIREWALLS, id, action_id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::test_client;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn set_rules_converts_nested_keys() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/firewalls/38/actions/set_rules"))
            .and(body_json(json!({
                "rules": [{
                    "direction": "in",
                    "protocol": "tcp",
                    "port": "22",
                    "source_ips": ["0.0.0.0/0", "::/0"]
                }]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "actions": [
                    {"id": 13, "command": "set_firewall_rules"},
                    {"id": 14, "command": "apply_firewall"}
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client
            .set_firewall_rules(
                38.into(),
                &json!({
                    "rules": [{
                        "direction": "in",
                        "protocol": "tcp",
                        "port": "22",
                        "source-ips": ["0.0.0.0/0", "::/0"]
                    }]
                }),
            )
            .await
            .unwrap();
        assert_eq!(value["actions"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn apply_to_label_selector() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/firewalls/38/actions/apply_to_resources"))
            .and(body_json(json!({
                "apply_to": [{"type": "label_selector", "label_selector": {"selector": "env=prod"}}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"actions": []})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .apply_firewall_to_resources(
                38.into(),
                &json!({
                    "apply-to": [{"type": "label_selector", "label-selector": {"selector": "env=prod"}}]
                }),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_in_use_firewall_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/firewalls/38"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "error": {"code": "resource_in_use", "message": "firewall is still in use", "details": {}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.delete_firewall(38.into()).await.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.api_error().unwrap().code(), Some("resource_in_use"));
    }
}
