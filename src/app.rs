use anyhow::{Context, Result};

use crate::config::LintConfig;
use crate::lint::{branch, description, item, keys, size};
use crate::model::pull_request::PullRequest;
use crate::model::work_item::ItemDetails;
use crate::providers::{CodeHost, Tracker, TrackerError};
use crate::util::markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The branch is exempt from linting.
    Skipped,
    Passed,
    /// Policy violations, one message each.
    Failed(Vec<String>),
}

pub struct App {
    config: LintConfig,
    tracker: Box<dyn Tracker>,
    host: Box<dyn CodeHost>,
}

impl App {
    pub fn new(config: LintConfig, tracker: Box<dyn Tracker>, host: Box<dyn CodeHost>) -> Self {
        Self {
            config,
            tracker,
            host,
        }
    }

    /// Lint one pull request: label it, describe it, comment on it and apply
    /// the policy gates.
    pub async fn run(&self, pr: &PullRequest) -> Result<Outcome> {
        let policy = &self.config.policy;

        if pr.head_ref.is_empty() && pr.base_ref.is_empty() {
            self.comment(pr, &markup::missing_branches_comment()).await;
            return Ok(Outcome::Failed(vec![
                "Unable to get the head and base branch".into(),
            ]));
        }

        tracing::info!("Base branch -> {}", pr.base_ref);
        tracing::info!("Head branch -> {}", pr.head_ref);

        if branch::should_skip(&pr.head_ref, policy.ignore_pattern.as_deref()) {
            return Ok(Outcome::Skipped);
        }

        let mut found = keys::extract_keys(&pr.head_ref);
        if found.is_empty() {
            tracing::info!("No issue key in branch, looking at the PR title");
            found = keys::extract_keys(&pr.title);
        }

        let Some(key) = keys::canonical_key(&found) else {
            self.comment(pr, &markup::no_key_comment(&pr.head_ref)).await;
            return Ok(Outcome::Failed(vec![
                "JIRA issue id is missing in your branch.".into(),
            ]));
        };
        tracing::info!("JIRA key -> {key}");

        let details = match self.tracker.fetch_item(key).await {
            Ok(details) => details,
            Err(TrackerError::NotFound(_)) => {
                self.comment(pr, &markup::no_key_comment(&pr.head_ref)).await;
                return Ok(Outcome::Failed(vec![format!(
                    "Invalid JIRA key {key}. Please create a branch with a valid JIRA issue key."
                )]));
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to fetch {key} from {}", self.tracker.name())
                })
            }
        };

        let labels = self.labels_for(pr, &details);
        if !labels.is_empty() {
            tracing::info!("Adding labels -> {labels:?}");
            self.host.add_labels(pr, &labels).await?;
        }

        if description::should_update(pr.body.as_deref()) {
            tracing::info!("Updating PR description");
            let body = markup::pr_description(pr.body.as_deref(), &details, self.config.details_open);
            self.host.update_description(pr, &body).await?;

            if !self.config.skip_comments {
                tracing::info!("Adding comment for the PR title");
                self.comment(pr, &markup::pr_title_comment(&details.summary, &pr.title))
                    .await;

                if size::is_oversized(pr.changed_lines(), policy.size_threshold as f64) {
                    tracing::info!("Adding comment for huge PR");
                    let body = size::huge_pr_comment(pr.additions.unwrap_or_default(), policy.size_threshold);
                    self.comment(pr, &body).await;
                }
            }
        } else {
            tracing::info!("PR description will not be updated.");
        }

        let mut failures = Vec::new();

        if !item::is_status_valid(policy.validate_status, &policy.allowed_statuses, &details) {
            tracing::info!("Adding comment for invalid issue status");
            self.comment(pr, &item::invalid_status_comment(&details.status, &policy.allowed_statuses))
                .await;
            failures.push(format!(
                "The found jira issue is not in acceptable statuses (status: {})",
                details.status
            ));
        }

        if !item::is_type_valid(policy.validate_type, &policy.allowed_types, &details) {
            tracing::info!("Adding comment for invalid issue type");
            self.comment(pr, &item::invalid_type_comment(&details.item_type.name, &policy.allowed_types))
                .await;
            failures.push(format!(
                "The found jira issue is not an acceptable type (type: {})",
                details.item_type.name
            ));
        }

        if !item::is_project_valid(policy.validate_project, &policy.allowed_projects, &details) {
            tracing::info!("Adding comment for invalid project");
            self.comment(pr, &item::invalid_project_comment(&details.project.key, &policy.allowed_projects))
                .await;
            failures.push(format!(
                "The found jira issue is not in an acceptable project (project: {})",
                details.project.key
            ));
        }

        if failures.is_empty() {
            tracing::info!("The issue passed all validations.");
            Ok(Outcome::Passed)
        } else {
            Ok(Outcome::Failed(failures))
        }
    }

    /// Project, hotfix and type labels, empty names dropped.
    fn labels_for(&self, pr: &PullRequest, details: &ItemDetails) -> Vec<String> {
        let type_name = &details.item_type.name;
        let type_label = if self.config.ignored_label_types.contains(type_name) {
            None
        } else {
            Some(type_name.clone())
        };

        [
            Some(details.project.name.clone()),
            branch::hotfix_label(&pr.base_ref).map(String::from),
            type_label,
        ]
        .into_iter()
        .flatten()
        .filter(|l| !l.is_empty())
        .collect()
    }

    // Comments are advisory; a failed post is logged and the run goes on.
    async fn comment(&self, pr: &PullRequest, body: &str) {
        if let Err(e) = self.host.add_comment(pr, body).await {
            tracing::warn!("Failed to add comment: {e:#}");
        }
    }
}
