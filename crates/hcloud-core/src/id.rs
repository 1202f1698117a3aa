//! Strongly-typed identifiers for Hetzner Cloud resources.
//!
//! Every resource is addressed by a positive integer ID. Wrapping them per
//! resource keeps a server ID from being passed where a volume ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Macro to generate strongly-typed ID wrapper types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw ID.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw ID.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Parses an ID from a string.
            ///
            /// # Errors
            ///
            /// Returns an error if the string is not an unsigned integer.
            pub fn parse_str(input: &str) -> Result<Self> {
                input
                    .trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| Error::InvalidId(input.to_string()))
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_str(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(ActionId, "Action ID");
id_type!(CertificateId, "Certificate ID");
id_type!(DatacenterId, "Datacenter ID");
id_type!(FirewallId, "Firewall ID");
id_type!(FloatingIpId, "Floating IP ID");
id_type!(ImageId, "Image ID");
id_type!(IsoId, "ISO ID");
id_type!(LoadBalancerId, "Load Balancer ID");
id_type!(LoadBalancerTypeId, "Load Balancer Type ID");
id_type!(LocationId, "Location ID");
id_type!(NetworkId, "Network ID");
id_type!(PlacementGroupId, "Placement Group ID");
id_type!(PrimaryIpId, "Primary IP ID");
id_type!(ServerId, "Server ID");
id_type!(ServerTypeId, "Server Type ID");
id_type!(SshKeyId, "SSH Key ID");
id_type!(VolumeId, "Volume ID");
