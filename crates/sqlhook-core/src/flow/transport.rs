//! HttpTransport trait definition.
//!
//! The runner only ever issues JSON POSTs, so the port is one method wide.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).
//!
//! Implementations live in sqlhook-infra (e.g., `ReqwestTransport`).

use sqlhook_types::error::TransportError;

/// A JSON POST to issue.
#[derive(Debug, Clone, Copy)]
pub struct JsonPost<'a> {
    pub url: &'a str,
    /// Sent verbatim as the `Authorization` header when present.
    pub authorization: Option<&'a str>,
    /// Already-encoded JSON body, sent with `Content-Type: application/json`.
    pub body: &'a str,
}

/// Status and raw body of an HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP backends the flow runs over.
///
/// Any HTTP status is a successful reply at this level; only failures to get
/// a reply at all (DNS, connect, timeout, body read) are errors.
pub trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        request: JsonPost<'_>,
    ) -> impl std::future::Future<Output = Result<HttpReply, TransportError>> + Send;
}
