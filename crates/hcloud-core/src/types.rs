//! Core Hetzner Cloud types.
//!
//! This module enumerates the resource collections exposed by the API and
//! knows how their REST paths are laid out.

use std::fmt;

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.hetzner.cloud/v1";
/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "HCLOUD_TOKEN";
/// Environment variable overriding the API endpoint.
pub const ENDPOINT_ENV_VAR: &str = "HCLOUD_ENDPOINT";

/// Resource collections of the Hetzner Cloud API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Asynchronous action records
    Actions,
    /// TLS certificates
    Certificates,
    /// Datacenters
    Datacenters,
    /// Firewalls
    Firewalls,
    /// Floating IPs
    FloatingIps,
    /// Images
    Images,
    /// ISO images
    Isos,
    /// Load balancer types
    LoadBalancerTypes,
    /// Load balancers
    LoadBalancers,
    /// Locations
    Locations,
    /// Private networks
    Networks,
    /// Placement groups
    PlacementGroups,
    /// Pricing information
    Pricing,
    /// Primary IPs
    PrimaryIps,
    /// Server types
    ServerTypes,
    /// Servers
    Servers,
    /// SSH keys
    SshKeys,
    /// Volumes
    Volumes,
}

impl Resource {
    /// Returns the collection path segment.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Certificates => "certificates",
            Self::Datacenters => "datacenters",
            Self::Firewalls => "firewalls",
            Self::FloatingIps => "floating_ips",
            Self::Images => "images",
            Self::Isos => "isos",
            Self::LoadBalancerTypes => "load_balancer_types",
            Self::LoadBalancers => "load_balancers",
            Self::Locations => "locations",
            Self::Networks => "networks",
            Self::PlacementGroups => "placement_groups",
            Self::Pricing => "pricing",
            Self::PrimaryIps => "primary_ips",
            Self::ServerTypes => "server_types",
            Self::Servers => "servers",
            Self::SshKeys => "ssh_keys",
            Self::Volumes => "volumes",
        }
    }

    /// `/{resource}/{id}`
    #[must_use]
    pub fn item(&self, id: impl fmt::Display) -> String {
        format!("{}/{id}", self.path())
    }

    /// `/{resource}/actions`
    #[must_use]
    pub fn actions(&self) -> String {
        format!("{}/actions", self.path())
    }

    /// `/{resource}/actions/{action_id}`
    #[must_use]
    pub fn action(&self, action_id: impl fmt::Display) -> String {
        format!("{}/actions/{action_id}", self.path())
    }

    /// `/{resource}/{id}/actions`
    #[must_use]
    pub fn item_actions(&self, id: impl fmt::Display) -> String {
        format!("{}/{id}/actions", self.path())
    }

    /// `/{resource}/{id}/actions/{action}`, where `action` is either an
    /// action ID or a command name such as `poweron`.
    #[must_use]
    pub fn item_action(&self, id: impl fmt::Display, action: impl fmt::Display) -> String {
        format!("{}/{id}/actions/{action}", self.path())
    }

    /// `/{resource}/{id}/{sub}`
    #[must_use]
    pub fn item_sub(&self, id: impl fmt::Display, sub: &str) -> String {
        format!("{}/{id}/{sub}", self.path())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
