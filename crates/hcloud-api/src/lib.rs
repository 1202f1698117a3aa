//! Hetzner Cloud API client.
//!
//! Every documented endpoint is exposed as one async method on
//! [`HcloudClient`]. Methods return the response document as plain JSON data;
//! requests rejected by the API come back as
//! [`Error::Api`](hcloud_core::Error::Api) carrying the normalized error
//! document.
//!
//! ```no_run
//! use hcloud_api::{HcloudClient, ListParams};
//! use serde_json::json;
//!
//! # async fn run() -> hcloud_api::Result<()> {
//! let client = HcloudClient::new("my-api-token")?;
//!
//! let servers = client.list_servers(&ListParams::new().with_label_selector("env=prod")).await?;
//! println!("{}", servers["servers"]);
//!
//! let created = client
//!     .create_server(&json!({"name": "web-1", "server_type": "cx22", "image": "ubuntu-24.04"}))
//!     .await?;
//! println!("root password: {}", created["root_password"]);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod endpoints;
pub mod models;

pub use client::{HcloudClient, HcloudClientBuilder};
pub use hcloud_core::id::{
    ActionId, CertificateId, DatacenterId, FirewallId, FloatingIpId, ImageId, IsoId,
    LoadBalancerId, LoadBalancerTypeId, LocationId, NetworkId, PlacementGroupId, PrimaryIpId,
    ServerId, ServerTypeId, SshKeyId, VolumeId,
};
pub use hcloud_core::{ApiError, Error, KeyCase};
pub use models::{
    Action, ActionError, ActionResource, ActionStatus, ListParams, Meta, MetricsParams,
    Pagination,
};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = hcloud_core::Result<T>;
