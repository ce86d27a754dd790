use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::model::pull_request::PullRequest;

/// The subset of the `pull_request` webhook payload the linter reads.
#[derive(Deserialize)]
struct EventPayload {
    repository: Option<Repository>,
    pull_request: Option<PullRequestPayload>,
}

#[derive(Deserialize)]
struct Repository {
    name: String,
    owner: Owner,
}

#[derive(Deserialize)]
struct Owner {
    login: String,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    number: u64,
    title: Option<String>,
    body: Option<String>,
    additions: Option<u64>,
    base: Option<GitRef>,
    head: Option<GitRef>,
}

#[derive(Deserialize)]
struct GitRef {
    #[serde(rename = "ref", default)]
    git_ref: String,
}

pub fn parse_event(json: &str) -> Result<PullRequest> {
    let payload: EventPayload =
        serde_json::from_str(json).context("Failed to parse workflow event payload")?;

    let repository = payload
        .repository
        .context("Missing 'repository' from github action context.")?;
    let pr = payload
        .pull_request
        .context("Missing 'pull_request' from github action context. Is the workflow triggered by a pull request?")?;

    Ok(PullRequest {
        owner: repository.owner.login,
        repo: repository.name,
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        body: pr.body,
        additions: pr.additions,
        base_ref: pr.base.map(|r| r.git_ref).unwrap_or_default(),
        head_ref: pr.head.map(|r| r.git_ref).unwrap_or_default(),
    })
}

pub fn load_event(path: &Path) -> Result<PullRequest> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event payload from {}", path.display()))?;
    parse_event(&contents)
}
