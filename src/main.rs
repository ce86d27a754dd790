mod app;
mod cli;
mod config;
mod event;
mod lint;
mod model;
mod providers;
mod util;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::{App, Outcome};
use cli::Inputs;
use config::LintConfig;
use providers::github::GitHubHost;
use providers::jira::JiraTracker;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for workflow commands
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("JIRA_LINT_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let inputs = Inputs::parse();

    // Until the config is read, fail hard
    let config = match LintConfig::resolve(&inputs) {
        Ok(config) => config,
        Err(e) => return report_failure(&format!("{e:#}"), true),
    };
    let fail_on_error = config.fail_on_error;

    match run(inputs, config).await {
        Ok(Outcome::Skipped) => {
            tracing::info!("Branch skipped");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Passed) => ExitCode::SUCCESS,
        Ok(Outcome::Failed(messages)) => report_failure(&messages.join("\n"), fail_on_error),
        Err(e) => report_failure(&format!("{e:#}"), fail_on_error),
    }
}

async fn run(inputs: Inputs, config: LintConfig) -> Result<Outcome> {
    let event_path = inputs
        .event_path
        .context("GITHUB_EVENT_PATH is not set; pass --event-path")?;
    let pr = event::load_event(&event_path)?;
    tracing::debug!("Pull request -> {pr:?}");

    let tracker = JiraTracker::new(
        config.jira_base_url.clone(),
        config.jira_user.clone(),
        config.jira_token.clone(),
    )?;
    let host = GitHubHost::new(config.github_api_url.clone(), config.github_token.clone());

    let app = App::new(config, Box::new(tracker), Box::new(host));
    app.run(&pr).await
}

/// Emit a workflow annotation. Hard failures exit non-zero, soft ones only warn.
fn report_failure(message: &str, hard: bool) -> ExitCode {
    let message = message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A");
    if hard {
        println!("::error::{message}");
        ExitCode::FAILURE
    } else {
        println!("::warning::{message}");
        ExitCode::SUCCESS
    }
}
