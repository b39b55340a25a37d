//! The `sqlhook` command: load config, then run or plan the webhook flow.

use anyhow::Context;

use sqlhook_core::flow::plan::FlowPlan;
use sqlhook_core::flow::runner::WebhookFlowRunner;
use sqlhook_infra::config::load_flow_config;
use sqlhook_infra::http::ReqwestTransport;

use super::Cli;
use super::report;

/// Execute the command described by `cli`.
///
/// Any error here is terminal; `main` turns it into exit code 1.
pub async fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = load_flow_config(cli.config.as_deref())
        .await
        .context("Failed to load flow configuration")?;

    if cli.dry_run {
        let plan = FlowPlan::from_config(&config).context("Failed to build request plan")?;
        return report::print_plan(&plan, cli.json);
    }

    let transport = ReqwestTransport::new().context("Failed to create HTTP client")?;
    let outcome = WebhookFlowRunner::new(&transport, &config)
        .run()
        .await
        .context("Webhook flow failed")?;

    report::print_outcome(&outcome, cli.json)
}
