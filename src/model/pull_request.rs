use serde::{Deserialize, Serialize};

/// The pull request the workflow was triggered for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additions: Option<u64>,
    #[serde(default)]
    pub base_ref: String,
    #[serde(default)]
    pub head_ref: String,
}

impl PullRequest {
    /// Added lines as a float, NaN when the payload did not carry a count.
    pub fn changed_lines(&self) -> f64 {
        self.additions.map_or(f64::NAN, |a| a as f64)
    }
}
