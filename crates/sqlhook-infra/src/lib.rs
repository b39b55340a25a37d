//! Infrastructure layer for sqlhook.
//!
//! Implements the `HttpTransport` port from `sqlhook-core` on top of reqwest
//! and loads `FlowConfig` from TOML files.

pub mod config;
pub mod http;
