//! REST plumbing for the local daemon.

pub mod adapter;
pub mod client;
pub mod dto;

pub use adapter::DaemonRestAdapter;
pub use client::RestClient;
