//! The two-call hiring webhook flow.

pub mod plan;
pub mod runner;
pub mod transport;
