//! Rendering of run results and dry-run plans.

use std::fmt::Write as _;

use console::style;

use sqlhook_core::flow::plan::FlowPlan;
use sqlhook_core::flow::runner::FlowOutcome;

pub fn print_outcome(outcome: &FlowOutcome, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        print!("{}", render_outcome(outcome)?);
    }
    Ok(())
}

pub fn print_plan(plan: &FlowPlan, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        print!("{}", render_plan(plan)?);
    }
    Ok(())
}

/// Status line and raw body of the submission, whatever the status.
fn render_outcome(outcome: &FlowOutcome) -> anyhow::Result<String> {
    let submission = &outcome.submission;
    let status = if submission.is_success() {
        style(submission.status_code).green().bold()
    } else {
        style(submission.status_code).yellow().bold()
    };

    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "  Webhook: {}", style(&outcome.webhook).cyan())?;
    if let Some(question) = outcome.question {
        writeln!(out, "  Assigned: {question}")?;
    }
    writeln!(out, "  Submission response status: {status}")?;
    writeln!(out, "  Submission response body: {}", submission.body)?;
    writeln!(out)?;
    Ok(out)
}

fn render_plan(plan: &FlowPlan) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "  {} (dry run, nothing sent)", style("Planned requests").bold())?;
    writeln!(out)?;
    writeln!(out, "  POST {}", style(&plan.generate_url).cyan())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&plan.generation_body)?)?;
    writeln!(out)?;
    writeln!(
        out,
        "  POST {}  (Authorization: <accessToken>)",
        style(&plan.submit_url).cyan()
    )?;
    writeln!(out, "{}", serde_json::to_string_pretty(&plan.submission_body)?)?;
    if let Some(question) = plan.question {
        writeln!(out)?;
        writeln!(out, "  Assigned: {question}")?;
    }
    writeln!(out)?;
    Ok(out)
}
