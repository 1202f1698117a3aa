//! HTTP client configuration and the shared request helper.
//!
//! Every endpoint wrapper funnels through [`ServiceClient::execute`], which
//! builds the URL, attaches the bearer token, converts outgoing keys to the
//! wire convention, issues the call and normalizes the response.

use reqwest::Method;
use secrecy::SecretString;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::casing::{to_wire, transform_keys, KeyCase};
use crate::error::{ApiError, Error, Result};
use crate::query::QueryParams;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connect timeout
    pub connect_timeout: Duration,

    /// Enable request/response logging
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            enable_logging: true,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`ServiceClient`].
#[derive(Clone)]
pub struct ServiceClientBuilder {
    base_url: Url,
    http_config: ClientConfig,
    token: Option<SecretString>,
    key_case: KeyCase,
    user_agent: String,
    transport: Option<Arc<dyn Transport>>,
}

impl ServiceClientBuilder {
    /// Create a builder for the given API endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute http(s) URL.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url.as_ref())?,
            http_config: ClientConfig::new().with_timeout(timeout),
            token: None,
            key_case: KeyCase::default(),
            user_agent: concat!("hcloud-core/", env!("CARGO_PKG_VERSION")).to_string(),
            transport: None,
        })
    }

    /// Set the API token sent as `Authorization: Bearer`.
    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the key case responses are converted to.
    #[must_use]
    pub const fn with_key_case(mut self, key_case: KeyCase) -> Self {
        self.key_case = key_case;
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a custom transport instead of the `reqwest` one.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn build(self) -> Result<ServiceClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(&self.http_config, &self.user_agent)?),
        };

        Ok(ServiceClient {
            base_url: self.base_url,
            token: self.token,
            key_case: self.key_case,
            enable_logging: self.http_config.enable_logging,
            transport,
        })
    }
}

impl fmt::Debug for ServiceClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClientBuilder")
            .field("base_url", &self.base_url.as_str())
            .field("http_config", &self.http_config)
            .field("key_case", &self.key_case)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

/// Request helper shared by all endpoint wrappers.
#[derive(Clone)]
pub struct ServiceClient {
    base_url: Url,
    token: Option<SecretString>,
    key_case: KeyCase,
    enable_logging: bool,
    transport: Arc<dyn Transport>,
}

impl ServiceClient {
    /// Return the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Return the key case responses are converted to.
    #[must_use]
    pub const fn key_case(&self) -> KeyCase {
        self.key_case
    }

    /// Returns true if a token is attached to requests.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Resolve a relative resource path and query against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined onto the base URL.
    pub fn build_url(&self, path: &str, query: &QueryParams) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid path `{path}`: {err}")))?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.to_wire());
        }

        Ok(url)
    }

    /// Issue one request and return the normalized response body.
    ///
    /// Success bodies have their keys converted to the client's key case; an
    /// empty success body becomes `null`. Non-2xx responses become
    /// [`Error::Api`].
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, the request fails,
    /// the API rejects it or the response is not valid JSON.
    pub async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path, query)?;
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| Error::InvalidRequest(format!("Unserializable body: {err}")))?
            .map(to_wire);

        if self.enable_logging {
            debug!(method = %method, path = %path, query = ?query, "Sending Hetzner Cloud request");
        }

        let request = ApiRequest {
            method,
            url,
            token: self.token.clone(),
            body,
        };

        let response = self.transport.send(request).await?;
        self.normalize(path, response)
    }

    /// Turn a raw response into data or a normalized [`ApiError`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx statuses and [`Error::ParseError`]
    /// for success bodies that are not JSON.
    pub fn normalize(&self, path: &str, response: ApiResponse) -> Result<Value> {
        let ApiResponse { status, body } = response;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            let value = serde_json::from_str::<Value>(&body).map_err(|err| {
                Error::ParseError(format!("Failed to parse response for `{path}`: {err}"))
            })?;
            return Ok(transform_keys(value, self.key_case));
        }

        let error = Error::Api(ApiError::from_response(status, &body, self.key_case));
        if self.enable_logging {
            if error.should_log() {
                warn!(path = %path, status = status.as_u16(), "Hetzner Cloud request failed: {error}");
            } else {
                debug!(path = %path, status = status.as_u16(), "Hetzner Cloud request rejected: {error}");
            }
        }
        Err(error)
    }
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("base_url", &self.base_url.as_str())
            .field("key_case", &self.key_case)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|err| Error::ConfigError(format!("Invalid API endpoint `{raw}`: {err}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigError(format!(
            "Unsupported API endpoint scheme `{}`",
            url.scheme()
        )));
    }

    // Relative joins replace the last segment unless the path ends in '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);

    Ok(url)
}
