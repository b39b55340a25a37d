//! Business logic for sqlhook.
//!
//! Defines the [`flow::transport::HttpTransport`] port that the infrastructure
//! layer implements and the [`flow::runner::WebhookFlowRunner`] that drives the
//! generate-then-submit handshake over it. Depends only on `sqlhook-types` --
//! never on `sqlhook-infra` or any HTTP crate.

pub mod flow;
