use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;

use super::CodeHost;
use crate::model::pull_request::PullRequest;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub struct GitHubHost {
    api_url: String,
    token: String,
    client: reqwest::Client,
}

impl GitHubHost {
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn issue_url(&self, pr: &PullRequest, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/{suffix}",
            self.api_url, pr.owner, pr.repo, pr.number
        )
    }

    fn pull_url(&self, pr: &PullRequest) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_url, pr.owner, pr.repo, pr.number
        )
    }

    async fn send(&self, req: reqwest::RequestBuilder, what: &str) -> Result<()> {
        let resp = req
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "jira-lint")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .with_context(|| format!("GitHub API request to {what} failed"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Failed to {what}: {status} {body}");
        }
        Ok(())
    }
}

#[async_trait]
impl CodeHost for GitHubHost {
    async fn add_labels(&self, pr: &PullRequest, labels: &[String]) -> Result<()> {
        let req = self
            .client
            .post(self.issue_url(pr, "labels"))
            .json(&json!({ "labels": labels }));
        self.send(req, "add labels").await
    }

    async fn update_description(&self, pr: &PullRequest, body: &str) -> Result<()> {
        let req = self
            .client
            .patch(self.pull_url(pr))
            .json(&json!({ "body": body }));
        self.send(req, "update PR details").await
    }

    async fn add_comment(&self, pr: &PullRequest, body: &str) -> Result<()> {
        let req = self
            .client
            .post(self.issue_url(pr, "comments"))
            .json(&json!({ "body": body }));
        self.send(req, "add comment").await
    }
}
