//! sqlhook entry point.
//!
//! Binary name: `sqlhook`
//!
//! Parses CLI arguments, sets up tracing, then runs the hiring webhook flow
//! once. Exit code 0 when the submission response was reported (whatever its
//! HTTP status), 1 on any error.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use sqlhook_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};
use sqlhook_types::error::{FlowError, FlowStage};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = cli::flow::execute(&cli).await;
    if let Err(err) = &result {
        match failed_stage(err) {
            Some(stage) => tracing::error!(%stage, "ERROR during flow: {err:#}"),
            None => tracing::error!("ERROR during flow: {err:#}"),
        }
        eprintln!("{} {err:?}", console::style("error:").red().bold());
    }

    shutdown_tracing();
    ExitCode::from(exit_status(&result))
}

/// 0 once the report was printed, 1 for every error kind.
fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// The hiring API call a flow error came from, if it is one.
fn failed_stage(err: &anyhow::Error) -> Option<FlowStage> {
    err.downcast_ref::<FlowError>().map(FlowError::stage)
}
