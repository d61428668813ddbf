//! # ps-infra
//!
//! Infrastructure adapters for Peerspace: the JSON/HTTP implementation of
//! the `ps-core` remote-service ports against the local daemon, and
//! configuration loading.

pub mod config_loader;
pub mod rest;

pub use config_loader::load_client_config;
pub use rest::{DaemonRestAdapter, RestClient};
