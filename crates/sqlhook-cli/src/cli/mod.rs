//! CLI definition for the `sqlhook` binary.
//!
//! Running with no arguments performs the whole flow once with the built-in
//! identity and query. Every flag is optional.

pub mod flow;
pub mod report;

use std::path::PathBuf;

use clap::Parser;

/// Register with the hiring API and submit the SQL answer.
#[derive(Parser, Debug)]
#[command(name = "sqlhook", version, about, long_about = None)]
pub struct Cli {
    /// TOML file overriding endpoints, identity, or query.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the request bodies that would be sent and exit without network I/O.
    #[arg(long)]
    pub dry_run: bool,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed logs (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long)]
    pub otel: bool,
}
