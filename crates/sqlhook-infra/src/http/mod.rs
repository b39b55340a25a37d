//! HTTP transport for the hiring API.

pub mod client;

pub use client::{CONNECT_TIMEOUT, READ_TIMEOUT, ReqwestTransport};
