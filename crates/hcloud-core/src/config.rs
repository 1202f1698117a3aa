//! Configuration structures for Hetzner Cloud clients.
//!
//! [`HcloudConfig`] holds everything needed to reach the API: the endpoint,
//! the API token, the request timeout and the key case responses should use.
//! It can be built programmatically, deserialized from a config file or read
//! from the environment.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

use crate::casing::KeyCase;
use crate::client::DEFAULT_TIMEOUT_SECS;
use crate::error::Error;
use crate::types::{DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR, TOKEN_ENV_VAR};

/// Configuration for a Hetzner Cloud client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HcloudConfig {
    /// API base URL
    #[validate(url)]
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API token; never serialized
    #[serde(skip)]
    pub token: Option<SecretString>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Key case used for response documents
    #[serde(default)]
    pub key_case: KeyCase,

    /// Optional `User-Agent` override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl HcloudConfig {
    /// Create a configuration for the default endpoint with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::default().with_token(token).validated()
    }

    /// Read the configuration from `HCLOUD_TOKEN` and `HCLOUD_ENDPOINT`.
    ///
    /// # Errors
    ///
    /// Returns an error if `HCLOUD_TOKEN` is missing or the configuration is
    /// invalid.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the token variable is missing or the configuration
    /// is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::ConfigError(format!("{TOKEN_ENV_VAR} is not set")))?;

        let mut config = Self::default().with_token(token);
        if let Some(endpoint) = lookup(ENDPOINT_ENV_VAR).filter(|e| !e.trim().is_empty()) {
            config = config.with_endpoint(endpoint);
        }

        config.validated()
    }

    /// Set the API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Set the API endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set the key case used for response documents.
    #[must_use]
    pub const fn with_key_case(mut self, key_case: KeyCase) -> Self {
        self.key_case = key_case;
        self
    }

    /// Set a custom `User-Agent`.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration, returning it unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is out of range, the endpoint is not a URL
    /// or the token is empty.
    pub fn validated(self) -> Result<Self, Error> {
        self.validate()?;

        if self
            .token
            .as_ref()
            .is_some_and(|token| token.expose_secret().trim().is_empty())
        {
            return Err(Error::ConfigError("API token is empty".to_string()));
        }

        Ok(self)
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for HcloudConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            request_timeout_secs: default_request_timeout_secs(),
            key_case: KeyCase::default(),
            user_agent: None,
        }
    }
}
