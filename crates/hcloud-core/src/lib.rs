//! # hcloud-core
//!
//! Core types and utilities for talking to the Hetzner Cloud API.
//!
//! This crate provides the pieces every endpoint wrapper shares: the HTTP call
//! helper, the key-casing transform, error normalization and configuration.
//!
//! ## Modules
//!
//! - [`error`] - Error types and API error normalization
//! - [`casing`] - Recursive key-casing transform between `snake_case` and `kebab-case`
//! - [`config`] - Token, endpoint and timeout configuration
//! - [`client`] - The request helper shared by every endpoint wrapper
//! - [`transport`] - HTTP transport abstraction and the `reqwest` implementation
//! - [`query`] - Query parameter builder
//! - [`types`] - Resource collections and their REST paths
//! - [`id`] - Strongly-typed resource identifiers

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod casing;
pub mod client;
pub mod config;
pub mod error;
pub mod id;
pub mod query;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use casing::KeyCase;
pub use error::{ApiError, Error, Result};
