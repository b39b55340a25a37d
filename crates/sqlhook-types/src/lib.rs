//! Shared domain types for sqlhook.
//!
//! Request and response records for the two hiring API calls, the flow
//! configuration, the submitted SQL answer, and the error taxonomy.
//!
//! No I/O dependencies -- only serde, serde_json, thiserror, secrecy, url.

pub mod config;
pub mod error;
pub mod registration;
pub mod solution;
pub mod webhook;
