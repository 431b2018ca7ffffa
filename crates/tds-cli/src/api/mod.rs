//! HTTP API access for the TDS server

pub mod client;
pub mod types;

pub use client::ApiClient;
