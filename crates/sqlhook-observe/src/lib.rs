//! Observability for sqlhook: tracing subscriber setup and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
