//! Load balancers, their services and targets.

use hcloud_core::id::{ActionId, LoadBalancerId};
use hcloud_core::query::QueryParams;
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::{ListParams, MetricsParams};
use crate::Result;

const LOAD_BALANCERS: Resource = Resource::LoadBalancers;

impl HcloudClient {
    /// List load balancers.
    pub async fn list_load_balancers(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(LOAD_BALANCERS, params).await
    }

    /// Create a load balancer.
    ///
    /// Needs `name`, `load_balancer_type` and either `location` or
    /// `network_zone`; `services` and `targets` may be given up front.
    pub async fn create_load_balancer<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(LOAD_BALANCERS, body).await
    }

    /// Fetch a load balancer.
    pub async fn get_load_balancer(&self, id: LoadBalancerId) -> Result<Value> {
        self.get_resource(LOAD_BALANCERS, id).await
    }

    /// Update a load balancer's `name` or `labels`.
    pub async fn update_load_balancer<B>(&self, id: LoadBalancerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(LOAD_BALANCERS, id, body).await
    }

    /// Delete a load balancer.
    pub async fn delete_load_balancer(&self, id: LoadBalancerId) -> Result<Value> {
        self.delete_resource(LOAD_BALANCERS, id).await
    }

    /// Fetch `open_connections`, `connections_per_second`,
    /// `requests_per_second` or `bandwidth` metrics.
    pub async fn get_load_balancer_metrics(
        &self,
        id: LoadBalancerId,
        params: &MetricsParams,
    ) -> Result<Value> {
        let query: QueryParams = params.to_query()?;
        self.get(&LOAD_BALANCERS.item_sub(id, "metrics"), &query)
            .await
    }

    /// Add a service (listen port, protocol, health check).
    pub async fn add_load_balancer_service<B>(&self, id: LoadBalancerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "add_service", Some(body))
            .await
    }

    /// Update the service identified by `listen_port`.
    pub async fn update_load_balancer_service<B>(
        &self,
        id: LoadBalancerId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "update_service", Some(body))
            .await
    }

    /// Delete the service identified by `listen_port`.
    pub async fn delete_load_balancer_service<B>(
        &self,
        id: LoadBalancerId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "delete_service", Some(body))
            .await
    }

    /// Add a server, label selector or IP target.
    pub async fn add_load_balancer_target<B>(&self, id: LoadBalancerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "add_target", Some(body))
            .await
    }

    /// Remove a target.
    pub async fn remove_load_balancer_target<B>(
        &self,
        id: LoadBalancerId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "remove_target", Some(body))
            .await
    }

    /// Attach to a `network`, optionally with a fixed `ip`.
    pub async fn attach_load_balancer_to_network<B>(
        &self,
        id: LoadBalancerId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "attach_to_network", Some(body))
            .await
    }

    /// Detach from a `network`.
    pub async fn detach_load_balancer_from_network<B>(
        &self,
        id: LoadBalancerId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "detach_from_network", Some(body))
            .await
    }

    /// Switch between `round_robin` and `least_connections`.
    pub async fn change_load_balancer_algorithm<B>(
        &self,
        id: LoadBalancerId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "change_algorithm", Some(body))
            .await
    }

    /// Set the reverse DNS entry of a public address.
    pub async fn change_load_balancer_dns_ptr<B>(
        &self,
        id: LoadBalancerId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "change_dns_ptr", Some(body))
            .await
    }

    /// Change `delete` protection.
    pub async fn change_load_balancer_protection<B>(
        &self,
        id: LoadBalancerId,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "change_protection", Some(body))
            .await
    }

    /// Change the `load_balancer_type`.
    pub async fn change_load_balancer_type<B>(&self, id: LoadBalancerId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(LOAD_BALANCERS, id, "change_type", Some(body))
            .await
    }

    /// Enable the public interface.
    pub async fn enable_load_balancer_public_interface(&self, id: LoadBalancerId) -> Result<Value> {
        self.run_action::<()>(LOAD_BALANCERS, id, "enable_public_interface", None)
            .await
    }

    /// Disable the public interface. The load balancer must be in a network.
    pub async fn disable_load_balancer_public_interface(
        &self,
        id: LoadBalancerId,
    ) -> Result<Value> {
        self.run_action::<()>(LOAD_BALANCERS, id, "disable_public_interface", None)
            .await
    }

    /// List actions across all load balancers.
    pub async fn list_load_balancer_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(LOAD_BALANCERS, params).await
    }

    /// Fetch a load balancer action.
    pub async fn get_load_balancer_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(LOAD_BALANCERS, action_id).await
    }

    /// List the actions of one load balancer.
    pub async fn list_actions_for_load_balancer(
        &self,
        id: LoadBalancerId,
        params: &ListParams,
    ) -> Result<Value> {
        self.list_item_actions(LOAD_BALANCERS, id, params).await
    }

    /// Fetch one action of a load balancer.
    pub async fn get_action_for_load_balancer(
        &self,
        id: LoadBalancerId,
        action_id: ActionId,
    ) -> Result<Value> {
        self.get_item_action(LOAD_BALANCERS, id, action_id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::test_client;
    use crate::MetricsParams;
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn add_service_with_health_check() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/load_balancers/4711/actions/add_service"))
            .and(body_json(json!({
                "protocol": "http",
                "listen_port": 80,
                "destination_port": 8080,
                "proxyprotocol": false,
                "health_check": {"protocol": "http", "port": 8080, "interval": 15, "timeout": 10, "retries": 3}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "action": {"id": 13, "command": "add_service"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .add_load_balancer_service(
                4711.into(),
                &json!({
                    "protocol": "http",
                    "listen-port": 80,
                    "destination-port": 8080,
                    "proxyprotocol": false,
                    "health-check": {"protocol": "http", "port": 8080, "interval": 15, "timeout": 10, "retries": 3}
                }),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn toggle_public_interface() {
        let server = MockServer::start().await;
        for command in ["enable_public_interface", "disable_public_interface"] {
            Mock::given(method("POST"))
                .and(path(format!("/v1/load_balancers/4711/actions/{command}").as_str()))
                .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                    "action": {"id": 1, "command": command}
                })))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = test_client(&server);
        client
            .disable_load_balancer_public_interface(4711.into())
            .await
            .unwrap();
        let value = client
            .enable_load_balancer_public_interface(4711.into())
            .await
            .unwrap();
        assert_eq!(value["action"]["command"], "enable_public_interface");
    }

    #[tokio::test]
    async fn metrics_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/load_balancers/4711/metrics"))
            .and(query_param("type", "open_connections"))
            .and(query_param("start", "2024-06-01T12:00:00Z"))
            .and(query_param("end", "2024-06-01T13:00:00Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "metrics": {"time_series": {"open_connections": {"values": []}}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let params = MetricsParams::new("open_connections", start, start + Duration::hours(1));
        let value = client
            .get_load_balancer_metrics(4711.into(), &params)
            .await
            .unwrap();
        assert!(value["metrics"]["time_series"]["open_connections"].is_object());
    }

    #[tokio::test]
    async fn reversed_metrics_period_fails_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let params = MetricsParams::new("bandwidth", end + Duration::hours(1), end);
        let err = client
            .get_load_balancer_metrics(4711.into(), &params)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidRequest(_)));
    }
}
