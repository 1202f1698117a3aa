//! Endpoint wrappers, one module per resource collection.
//!
//! Each module adds methods to [`HcloudClient`](crate::HcloudClient). Request
//! bodies are any `Serialize` value; keys may be written in snake or kebab
//! case and are sent in snake case.

pub mod actions;
pub mod certificates;
pub mod datacenters;
pub mod firewalls;
pub mod floating_ips;
pub mod images;
pub mod isos;
pub mod load_balancer_types;
pub mod load_balancers;
pub mod locations;
pub mod networks;
pub mod placement_groups;
pub mod pricing;
pub mod primary_ips;
pub mod server_types;
pub mod servers;
pub mod ssh_keys;
pub mod volumes;
