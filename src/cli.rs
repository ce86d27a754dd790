use std::path::PathBuf;

use clap::Parser;

use crate::providers::github::DEFAULT_API_URL;

/// Workflow inputs. Every action input can be given as a flag or through the
/// `INPUT_*` variable GitHub Actions sets for it. Values stay raw strings
/// here, since Actions passes unset inputs as empty strings;
/// `LintConfig::resolve` interprets them.
#[derive(Parser, Debug, Default)]
#[command(name = "jira-lint")]
#[command(about = "Link pull requests to Jira issues and enforce issue policies", long_about = None)]
pub struct Inputs {
    #[arg(long, env = "INPUT_JIRA-USER")]
    pub jira_user: Option<String>,

    #[arg(long, env = "INPUT_JIRA-TOKEN", hide_env_values = true)]
    pub jira_token: Option<String>,

    #[arg(long, env = "INPUT_JIRA-BASE-URL")]
    pub jira_base_url: Option<String>,

    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Regex of head branches to skip
    #[arg(long, env = "INPUT_SKIP-BRANCHES")]
    pub skip_branches: Option<String>,

    /// Skip the PR title and PR size comments
    #[arg(long, env = "INPUT_SKIP-COMMENTS")]
    pub skip_comments: Option<String>,

    /// Additions above which the PR is flagged as too large
    #[arg(long, env = "INPUT_PR-THRESHOLD")]
    pub pr_threshold: Option<String>,

    #[arg(long, env = "INPUT_VALIDATE_ISSUE_STATUS")]
    pub validate_issue_status: Option<String>,

    /// Comma separated
    #[arg(long, env = "INPUT_ALLOWED_ISSUE_STATUSES")]
    pub allowed_issue_statuses: Option<String>,

    #[arg(long, env = "INPUT_VALIDATE_ISSUE_TYPE")]
    pub validate_issue_type: Option<String>,

    /// Comma separated
    #[arg(long, env = "INPUT_ALLOWED_ISSUE_TYPES")]
    pub allowed_issue_types: Option<String>,

    #[arg(long, env = "INPUT_VALIDATE_PROJECT")]
    pub validate_project: Option<String>,

    /// Comma separated
    #[arg(long, env = "INPUT_ALLOWED_PROJECTS")]
    pub allowed_projects: Option<String>,

    /// Fail the workflow on violations instead of only warning
    #[arg(long, env = "INPUT_FAIL-ON-ERROR")]
    pub fail_on_error: Option<String>,

    /// Issue types that should not become PR labels, comma separated
    #[arg(long, env = "INPUT_IGNORED-LABEL-TYPES")]
    pub ignored_label_types: Option<String>,

    /// Render the issue details block expanded
    #[arg(long, env = "INPUT_DETAILS-OPEN")]
    pub details_open: Option<String>,

    /// Optional TOML file with the same settings
    #[arg(long, env = "JIRA_LINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pull request event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub github_api_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let inputs = Inputs::try_parse_from([
            "jira-lint",
            "--jira-user",
            "me@acme.io",
            "--skip-branches",
            "^release/",
            "--allowed-issue-statuses",
            "In Progress,In Review",
            "--github-api-url",
            "https://ghe.acme.io/api/v3",
        ])
        .unwrap();

        assert_eq!(inputs.jira_user.as_deref(), Some("me@acme.io"));
        assert_eq!(inputs.skip_branches.as_deref(), Some("^release/"));
        assert_eq!(
            inputs.allowed_issue_statuses.as_deref(),
            Some("In Progress,In Review")
        );
        assert_eq!(inputs.github_api_url, "https://ghe.acme.io/api/v3");
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Inputs::command().debug_assert();
    }
}
