//! Asynchronous Hetzner Cloud client.
//!
//! The endpoint methods live in [`crate::endpoints`], one module per resource;
//! this module holds the client itself and the request shapes they share.

use hcloud_core::client::{
    ClientConfig, ServiceClient, ServiceClientBuilder, DEFAULT_TIMEOUT_SECS,
};
use hcloud_core::config::HcloudConfig;
use hcloud_core::query::QueryParams;
use hcloud_core::transport::Transport;
use hcloud_core::types::{Resource, DEFAULT_ENDPOINT};
use hcloud_core::KeyCase;
use reqwest::Method;
use secrecy::SecretString;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::models::ListParams;
use crate::Result;

const USER_AGENT: &str = concat!("hcloud-api/", env!("CARGO_PKG_VERSION"));

/// Builder for [`HcloudClient`].
#[derive(Debug, Clone)]
pub struct HcloudClientBuilder {
    inner: ServiceClientBuilder,
}

impl HcloudClientBuilder {
    /// Create a builder for the public API endpoint using the given token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let config = HcloudConfig::new(token)?;
        Self::from_config(&config)
    }

    /// Create a builder from a [`HcloudConfig`].
    pub fn from_config(config: &HcloudConfig) -> Result<Self> {
        let config = config.clone().validated()?;
        let mut builder = ServiceClientBuilder::new(&config.endpoint, config.timeout())?
            .with_key_case(config.key_case)
            .with_user_agent(config.user_agent.as_deref().unwrap_or(USER_AGENT));

        debug!(
            endpoint = %config.endpoint,
            key_case = %config.key_case,
            authenticated = config.token.is_some(),
            "Configuring Hetzner Cloud client"
        );

        if let Some(token) = config.token {
            builder = builder.with_token(token);
        }

        Ok(Self { inner: builder })
    }

    /// Create an unauthenticated builder for an arbitrary endpoint.
    pub fn with_endpoint(endpoint: impl AsRef<str>) -> Result<Self> {
        let builder = ServiceClientBuilder::new(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))?
            .with_user_agent(USER_AGENT);
        Ok(Self { inner: builder })
    }

    /// Set or replace the API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.inner = self.inner.with_token(SecretString::from(token.into()));
        self
    }

    /// Set the key case of returned documents.
    #[must_use]
    pub fn with_key_case(mut self, key_case: KeyCase) -> Self {
        self.inner = self.inner.with_key_case(key_case);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.with_user_agent(user_agent);
        self
    }

    /// Use a custom transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.inner = self.inner.with_transport(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HcloudClient> {
        let inner = self.inner.build()?;
        Ok(HcloudClient { inner })
    }
}

/// Asynchronous Hetzner Cloud client.
#[derive(Debug, Clone)]
pub struct HcloudClient {
    inner: ServiceClient,
}

impl HcloudClient {
    /// Construct a client for the public API endpoint.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        HcloudClientBuilder::new(token)?.build()
    }

    /// Construct a client from `HCLOUD_TOKEN` and `HCLOUD_ENDPOINT`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&HcloudConfig::from_env()?)
    }

    /// Construct a client from a configuration.
    pub fn from_config(config: &HcloudConfig) -> Result<Self> {
        HcloudClientBuilder::from_config(config)?.build()
    }

    /// Start a builder with the given token.
    pub fn builder(token: impl Into<String>) -> Result<HcloudClientBuilder> {
        HcloudClientBuilder::new(token)
    }

    /// The public API endpoint.
    #[must_use]
    pub const fn default_endpoint() -> &'static str {
        DEFAULT_ENDPOINT
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Return the key case of returned documents.
    #[must_use]
    pub fn key_case(&self) -> KeyCase {
        self.inner.key_case()
    }

    /// Issue an arbitrary request relative to the API endpoint.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner.execute(method, path, query, body).await
    }

    pub(crate) async fn get(&self, path: &str, query: &QueryParams) -> Result<Value> {
        self.inner
            .execute::<()>(Method::GET, path, query, None)
            .await
    }

    pub(crate) async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner
            .execute(method, path, &QueryParams::new(), body)
            .await
    }

    /// `GET /{resource}`
    pub(crate) async fn list_resource(
        &self,
        resource: Resource,
        params: &ListParams,
    ) -> Result<Value> {
        self.get(resource.path(), &params.to_query()).await
    }

    /// `GET /{resource}/{id}`
    pub(crate) async fn get_resource(&self, resource: Resource, id: impl Display) -> Result<Value> {
        self.get(&resource.item(id), &QueryParams::new()).await
    }

    /// `POST /{resource}`
    pub(crate) async fn create_resource<B>(&self, resource: Resource, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, resource.path(), Some(body)).await
    }

    /// `PUT /{resource}/{id}`
    pub(crate) async fn update_resource<B>(
        &self,
        resource: Resource,
        id: impl Display,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, &resource.item(id), Some(body)).await
    }

    /// `DELETE /{resource}/{id}`
    pub(crate) async fn delete_resource(&self, resource: Resource, id: impl Display) -> Result<Value> {
        self.send::<()>(Method::DELETE, &resource.item(id), None)
            .await
    }

    /// `POST /{resource}/{id}/actions/{command}`
    pub(crate) async fn run_action<B>(
        &self,
        resource: Resource,
        id: impl Display,
        command: &str,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, &resource.item_action(id, command), body)
            .await
    }

    /// `GET /{resource}/actions`
    pub(crate) async fn list_resource_actions(
        &self,
        resource: Resource,
        params: &ListParams,
    ) -> Result<Value> {
        self.get(&resource.actions(), &params.to_query()).await
    }

    /// `GET /{resource}/actions/{action_id}`
    pub(crate) async fn get_resource_action(
        &self,
        resource: Resource,
        action_id: impl Display,
    ) -> Result<Value> {
        self.get(&resource.action(action_id), &QueryParams::new())
            .await
    }

    /// `GET /{resource}/{id}/actions`
    pub(crate) async fn list_item_actions(
        &self,
        resource: Resource,
        id: impl Display,
        params: &ListParams,
    ) -> Result<Value> {
        self.get(&resource.item_actions(id), &params.to_query())
            .await
    }

    /// `GET /{resource}/{id}/actions/{action_id}`
    pub(crate) async fn get_item_action(
        &self,
        resource: Resource,
        id: impl Display,
        action_id: impl Display,
    ) -> Result<Value> {
        self.get(&resource.item_action(id, action_id), &QueryParams::new())
            .await
    }
}
