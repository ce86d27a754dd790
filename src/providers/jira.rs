use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use super::{Tracker, TrackerError};
use crate::model::work_item::{
    Estimate, ItemDetails, ItemLabel, ItemType, ProjectRef, WorkItemKey,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const ISSUE_FIELDS: &str = "project,summary,issuetype,labels,status,customfield_10016";

pub struct JiraTracker {
    base_url: String,
    auth_header: String,
    client: reqwest::Client,
}

impl JiraTracker {
    /// `base_url` is the site root, e.g. `https://acme.atlassian.net`.
    pub fn new(base_url: String, user: String, api_token: String) -> anyhow::Result<Self> {
        let creds = format!("{user}:{api_token}");
        let encoded = base64::engine::general_purpose::STANDARD.encode(creds);
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {encoded}"),
            client,
        })
    }
}

#[derive(Deserialize)]
struct JiraIssue {
    fields: IssueFields,
}

#[derive(Deserialize)]
struct IssueFields {
    summary: Option<String>,
    status: Option<NamedField>,
    issuetype: Option<IssueTypeField>,
    project: ProjectField,
    #[serde(default)]
    labels: Vec<String>,
    customfield_10016: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct NamedField {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueTypeField {
    name: String,
    #[serde(default)]
    icon_url: String,
}

#[derive(Deserialize)]
struct ProjectField {
    key: String,
    name: String,
}

/// Turn a raw Jira issue into the snapshot the linter works with.
fn to_details(base_url: &str, key: &str, issue: JiraIssue) -> ItemDetails {
    let fields = issue.fields;
    let project = fields.project;

    let labels = fields
        .labels
        .into_iter()
        .map(|label| {
            let jql = format!(
                "project = {} AND labels = {label} ORDER BY created DESC",
                project.key
            );
            ItemLabel {
                url: format!("{base_url}/issues?jql={}", urlencoding::encode(&jql)),
                name: label,
            }
        })
        .collect();

    let item_type = fields
        .issuetype
        .map(|t| ItemType {
            name: t.name,
            icon_url: t.icon_url,
        })
        .unwrap_or_else(|| ItemType {
            name: String::new(),
            icon_url: String::new(),
        });

    ItemDetails {
        key: key.to_string(),
        summary: fields.summary.unwrap_or_default(),
        url: format!("{base_url}/browse/{key}"),
        status: fields.status.map(|s| s.name).unwrap_or_default(),
        item_type,
        project: ProjectRef {
            url: format!("{base_url}/browse/{}", project.key),
            name: project.name,
            key: project.key,
        },
        estimate: Estimate::from_value(fields.customfield_10016.as_ref()),
        labels,
    }
}

#[async_trait]
impl Tracker for JiraTracker {
    fn name(&self) -> &str {
        "Jira"
    }

    async fn fetch_item(&self, key: &WorkItemKey) -> Result<ItemDetails, TrackerError> {
        let key = key.to_string();
        let url = format!(
            "{}/rest/api/3/issue/{key}?fields={ISSUE_FIELDS}",
            self.base_url
        );
        tracing::debug!("Fetching Jira issue from {url}");

        let resp = self
            .client
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TrackerError::NotFound(key));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TrackerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let issue: JiraIssue = resp.json().await?;
        Ok(to_details(&self.base_url, &key, issue))
    }
}
