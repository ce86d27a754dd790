pub mod github;
pub mod jira;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::model::pull_request::PullRequest;
use crate::model::work_item::{ItemDetails, WorkItemKey};

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Issue {0} not found")]
    NotFound(String),

    #[error("Jira API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Jira API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of issue metadata.
#[async_trait]
pub trait Tracker: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch_item(&self, key: &WorkItemKey) -> Result<ItemDetails, TrackerError>;
}

/// Where the pull request lives. Calls are fire-and-forget from the linter's
/// point of view: nothing is read back.
#[async_trait]
pub trait CodeHost: Send + Sync {
    async fn add_labels(&self, pr: &PullRequest, labels: &[String]) -> Result<()>;
    async fn update_description(&self, pr: &PullRequest, body: &str) -> Result<()>;
    async fn add_comment(&self, pr: &PullRequest, body: &str) -> Result<()>;
}
