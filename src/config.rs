use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::cli::Inputs;
use crate::lint::size::DEFAULT_SIZE_THRESHOLD;

/// Settings that may also come from a TOML file. Lists are real arrays here.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub jira_user: Option<String>,
    pub jira_token: Option<String>,
    pub jira_base_url: Option<String>,
    pub github_token: Option<String>,
    pub skip_branches: Option<String>,
    pub skip_comments: Option<bool>,
    pub pr_threshold: Option<u64>,
    pub validate_issue_status: Option<bool>,
    pub allowed_issue_statuses: Option<Vec<String>>,
    pub validate_issue_type: Option<bool>,
    pub allowed_issue_types: Option<Vec<String>>,
    pub validate_project: Option<bool>,
    pub allowed_projects: Option<Vec<String>>,
    pub fail_on_error: Option<bool>,
    pub ignored_label_types: Option<Vec<String>>,
    pub details_open: Option<bool>,
}

/// Policy gates. Fixed for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    pub ignore_pattern: Option<String>,
    pub validate_status: bool,
    pub allowed_statuses: Vec<String>,
    pub validate_type: bool,
    pub allowed_types: Vec<String>,
    pub validate_project: bool,
    pub allowed_projects: Vec<String>,
    pub size_threshold: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            ignore_pattern: None,
            validate_status: false,
            allowed_statuses: Vec::new(),
            validate_type: false,
            allowed_types: Vec::new(),
            validate_project: false,
            allowed_projects: Vec::new(),
            size_threshold: DEFAULT_SIZE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LintConfig {
    pub jira_base_url: String,
    pub jira_user: String,
    pub jira_token: String,
    pub github_token: String,
    pub github_api_url: String,
    pub skip_comments: bool,
    pub fail_on_error: bool,
    pub details_open: bool,
    pub ignored_label_types: Vec<String>,
    pub policy: PolicyConfig,
}

pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: FileConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Split a comma separated input into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bool(name: &str, raw: Option<&str>) -> Result<Option<bool>> {
    match non_empty(raw) {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(v) if v.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(v) => bail!("Input '{name}' must be 'true' or 'false', got '{v}'"),
    }
}

fn required(name: &str, input: Option<&str>, file: Option<String>) -> Result<String> {
    non_empty(input)
        .map(String::from)
        .or(file.filter(|s| !s.trim().is_empty()))
        .with_context(|| format!("Input required and not supplied: {name}"))
}

fn list(input: Option<&str>, file: Option<Vec<String>>) -> Vec<String> {
    non_empty(input)
        .map(split_list)
        .or(file)
        .unwrap_or_default()
}

impl LintConfig {
    /// Merge workflow inputs over the optional config file.
    pub fn resolve(inputs: &Inputs) -> Result<Self> {
        let file = match &inputs.config {
            Some(path) => load_file_config(path)?,
            None => FileConfig::default(),
        };
        Self::merge(inputs, file)
    }

    pub fn merge(inputs: &Inputs, file: FileConfig) -> Result<Self> {
        let jira_base_url = required(
            "jira-base-url",
            inputs.jira_base_url.as_deref(),
            file.jira_base_url,
        )?
        .trim_end_matches('/')
        .to_string();

        // An unparsable threshold falls back to the default rather than failing.
        let size_threshold = match non_empty(inputs.pr_threshold.as_deref()) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid pr-threshold '{raw}', using {DEFAULT_SIZE_THRESHOLD}");
                DEFAULT_SIZE_THRESHOLD
            }),
            None => file.pr_threshold.unwrap_or(DEFAULT_SIZE_THRESHOLD),
        };

        let policy = PolicyConfig {
            ignore_pattern: non_empty(inputs.skip_branches.as_deref())
                .map(String::from)
                .or(file.skip_branches.filter(|p| !p.is_empty())),
            validate_status: parse_bool("validate_issue_status", inputs.validate_issue_status.as_deref())?
                .or(file.validate_issue_status)
                .unwrap_or(false),
            allowed_statuses: list(inputs.allowed_issue_statuses.as_deref(), file.allowed_issue_statuses),
            validate_type: parse_bool("validate_issue_type", inputs.validate_issue_type.as_deref())?
                .or(file.validate_issue_type)
                .unwrap_or(false),
            allowed_types: list(inputs.allowed_issue_types.as_deref(), file.allowed_issue_types),
            validate_project: parse_bool("validate_project", inputs.validate_project.as_deref())?
                .or(file.validate_project)
                .unwrap_or(false),
            allowed_projects: list(inputs.allowed_projects.as_deref(), file.allowed_projects),
            size_threshold,
        };

        Ok(Self {
            jira_base_url,
            jira_user: required("jira-user", inputs.jira_user.as_deref(), file.jira_user)?,
            jira_token: required("jira-token", inputs.jira_token.as_deref(), file.jira_token)?,
            github_token: required("github-token", inputs.github_token.as_deref(), file.github_token)?,
            github_api_url: inputs.github_api_url.clone(),
            skip_comments: parse_bool("skip-comments", inputs.skip_comments.as_deref())?
                .or(file.skip_comments)
                .unwrap_or(false),
            fail_on_error: parse_bool("fail-on-error", inputs.fail_on_error.as_deref())?
                .or(file.fail_on_error)
                .unwrap_or(true),
            details_open: parse_bool("details-open", inputs.details_open.as_deref())?
                .or(file.details_open)
                .unwrap_or(true),
            ignored_label_types: list(inputs.ignored_label_types.as_deref(), file.ignored_label_types),
            policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn inputs() -> Inputs {
        Inputs {
            jira_user: Some("me@acme.io".into()),
            jira_token: Some("jira-token".into()),
            jira_base_url: Some("https://acme.atlassian.net/".into()),
            github_token: Some("gh-token".into()),
            github_api_url: "https://api.github.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_when_optional_inputs_are_empty() {
        let mut raw = inputs();
        raw.pr_threshold = Some(String::new());
        raw.skip_branches = Some(String::new());
        raw.skip_comments = Some(String::new());

        let config = LintConfig::merge(&raw, FileConfig::default()).unwrap();
        assert_eq!(config.jira_base_url, "https://acme.atlassian.net");
        assert_eq!(config.policy, PolicyConfig::default());
        assert!(!config.skip_comments);
        assert!(config.fail_on_error);
        assert!(config.details_open);
    }

    #[test]
    fn invalid_threshold_falls_back_to_default() {
        let mut raw = inputs();
        raw.pr_threshold = Some("lots".into());
        let config = LintConfig::merge(&raw, FileConfig::default()).unwrap();
        assert_eq!(config.policy.size_threshold, DEFAULT_SIZE_THRESHOLD);

        raw.pr_threshold = Some("1200".into());
        let config = LintConfig::merge(&raw, FileConfig::default()).unwrap();
        assert_eq!(config.policy.size_threshold, 1200);
    }

    #[test]
    fn splits_allow_lists() {
        let mut raw = inputs();
        raw.validate_issue_status = Some("true".into());
        raw.allowed_issue_statuses = Some("In Progress, In Review,,".into());
        raw.validate_project = Some("TRUE".into());
        raw.allowed_projects = Some("MOJO".into());

        let config = LintConfig::merge(&raw, FileConfig::default()).unwrap();
        assert!(config.policy.validate_status);
        assert_eq!(config.policy.allowed_statuses, vec!["In Progress", "In Review"]);
        assert!(config.policy.validate_project);
        assert_eq!(config.policy.allowed_projects, vec!["MOJO"]);
        assert!(!config.policy.validate_type);
    }

    #[test]
    fn missing_required_input_is_an_error() {
        let mut raw = inputs();
        raw.jira_token = Some("  ".into());
        let err = LintConfig::merge(&raw, FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("jira-token"));
    }

    #[test]
    fn rejects_non_boolean_flags() {
        let mut raw = inputs();
        raw.fail_on_error = Some("yes please".into());
        assert!(LintConfig::merge(&raw, FileConfig::default()).is_err());
    }

    #[test]
    fn inputs_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
jira_user = "file-user"
jira_token = "file-token"
jira_base_url = "https://file.atlassian.net"
github_token = "file-gh"
pr_threshold = 400
validate_issue_type = true
allowed_issue_types = ["Story", "Bug"]
allowed_issue_statuses = ["Done"]
fail_on_error = false
"#
        )
        .unwrap();

        let raw = Inputs {
            jira_user: Some("input-user".into()),
            allowed_issue_statuses: Some("In Progress".into()),
            config: Some(file.path().to_path_buf()),
            github_api_url: "https://api.github.com".into(),
            ..Default::default()
        };

        let config = LintConfig::resolve(&raw).unwrap();
        assert_eq!(config.jira_user, "input-user");
        assert_eq!(config.jira_token, "file-token");
        assert_eq!(config.jira_base_url, "https://file.atlassian.net");
        assert_eq!(config.policy.size_threshold, 400);
        assert!(config.policy.validate_type);
        assert_eq!(config.policy.allowed_types, vec!["Story", "Bug"]);
        assert_eq!(config.policy.allowed_statuses, vec!["In Progress"]);
        assert!(!config.fail_on_error);
    }

    #[test]
    fn unreadable_config_file_is_an_error() {
        let raw = Inputs {
            config: Some("/nonexistent/jira-lint.toml".into()),
            ..inputs()
        };
        assert!(LintConfig::resolve(&raw).is_err());
    }
}
