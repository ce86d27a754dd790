use std::sync::LazyLock;

use regex::Regex;

use crate::lint::description::HIDDEN_MARKER;
use crate::model::work_item::{ItemDetails, ItemLabel};
use crate::util::similarity::compare_two_strings;

const PR_GUIDE_URL: &str = "https://www.atlassian.com/blog/git/written-unwritten-guide-pull-requests";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex pattern for whitespace"));

/// Label links for the details table, `-` when there are none.
pub fn labels_for_display(labels: &[ItemLabel]) -> String {
    if labels.is_empty() {
        return "-".to_string();
    }
    let markup = labels
        .iter()
        .map(|l| format!(r#"<a href="{}" title="{}">{}</a>"#, l.url, l.name, l.name))
        .collect::<Vec<_>>()
        .join(", ");
    WHITESPACE_RUN.replace(&markup, " ").into_owned()
}

/// Issue details block prepended to the existing description.
pub fn pr_description(body: Option<&str>, details: &ItemDetails, open: bool) -> String {
    let display_key = details.key.to_uppercase();
    let open_attr = if open { " open" } else { "" };

    format!(
        r#"
<!-- {HIDDEN_MARKER} -->
<details{open_attr}>
  <summary><a href="{url}" title="{display_key}" target="_blank">{display_key}</a></summary>
  <br />
  <table>
    <tr><th>Summary</th><td>{summary}</td></tr>
    <tr><th>Type</th><td><img alt="{type_name}" src="{type_icon}" /> {type_name}</td>
    </tr>
    <tr><th>Status</th><td>{status}</td></tr>
    <tr><th>Points</th><td>{estimate}</td></tr>
    <tr><th>Labels</th><td>{labels}</td></tr>
  </table>
</details>

{body}"#,
        url = details.url,
        summary = details.summary,
        type_name = details.item_type.name,
        type_icon = details.item_type.icon_url,
        status = details.status,
        estimate = details.estimate,
        labels = labels_for_display(&details.labels),
        body = body.unwrap_or_default(),
    )
}

pub fn no_key_comment(branch: &str) -> String {
    format!(
        r#"A JIRA Issue ID is missing from your branch name `{branch}` or PR title! 🦄

Please either name your branch to contain a valid Jira ID, or include one in your PR title.

Valid sample branch names:

- `feature/shiny-new-feature--mojo-10`
- `chore/changelogUpdate_mojo-123`
- `bugfix/fix-some-strange-bug_GAL-2345`"#
    )
}

pub fn missing_branches_comment() -> String {
    "jira-lint is unable to determine the head and base branch".to_string()
}

fn title_table(story_title: &str, pr_title: &str) -> String {
    format!(
        r#"<table>
  <tr>
    <th>Story Title</th>
    <td>{story_title}</td>
  </tr>
  <tr>
    <th>PR Title</th>
    <td>{pr_title}</td>
  </tr>
</table>
<p>
  Check out this <a href="{PR_GUIDE_URL}">guide</a> to learn more about PR best-practices.
</p>
"#
    )
}

/// Comment on how closely the PR title follows the story title.
pub fn pr_title_comment(story_title: &str, pr_title: &str) -> String {
    let score = compare_two_strings(story_title, pr_title);

    if score < 0.2 {
        format!(
            r#"<p>Knock Knock! 🔍</p>
<p>
  Just thought I'd let you know that your <em>PR title</em> and <em>story title</em> look <strong>quite different</strong>. PR titles
  that closely resemble the story title make it easier for reviewers to understand the context of the PR.
</p>
<blockquote>
  An easy-to-understand PR title a day makes the reviewer review away! 😛⚡️
</blockquote>
{}"#,
            title_table(story_title, pr_title)
        )
    } else if score <= 0.4 {
        format!(
            r#"<p>Let's make that PR title a 💯 shall we? 💪</p>
<p>
  Your <em>PR title</em> and <em>story title</em> look <strong>slightly different</strong>. Just checking in to know if it was intentional!
</p>
{}"#,
            title_table(story_title, pr_title)
        )
    } else {
        "<p>I'm a bot and I 👍 this PR title. 🤖</p>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::description::should_update;
    use crate::model::work_item::{Estimate, ItemType, ProjectRef};

    fn details() -> ItemDetails {
        ItemDetails {
            key: "abc-123".into(),
            summary: "Story title or summary".into(),
            url: "url".into(),
            status: "In Progress".into(),
            item_type: ItemType {
                name: "feature".into(),
                icon_url: "feature-icon-url".into(),
            },
            project: ProjectRef {
                name: "project".into(),
                url: "project-url".into(),
                key: "abc".into(),
            },
            estimate: Estimate::Number(1.into()),
            labels: vec![ItemLabel {
                name: "frontend".into(),
                url: "frontend-url".into(),
            }],
        }
    }

    #[test]
    fn description_includes_marker_and_details() {
        let issue = details();
        let description = pr_description(Some("some_body"), &issue, true);

        assert!(!should_update(Some(&description)));
        assert!(description.contains("ABC-123"));
        assert!(description.contains("<td>1</td>"));
        assert!(description.contains("In Progress"));
        assert!(description.contains("frontend"));
        assert!(description.contains("<details open>"));
        assert!(description.ends_with("some_body"));
    }

    #[test]
    fn description_can_start_collapsed() {
        let mut issue = details();
        issue.estimate = Estimate::NotAvailable;
        let description = pr_description(None, &issue, false);
        assert!(description.contains("<details>"));
        assert!(description.contains("<td>N/A</td>"));
    }

    #[test]
    fn labels_markup_without_extra_spaces() {
        let labels = vec![
            ItemLabel {
                name: "one".into(),
                url: "url-one".into(),
            },
            ItemLabel {
                name: "two".into(),
                url: "url-two".into(),
            },
        ];
        assert_eq!(
            labels_for_display(&labels),
            r#"<a href="url-one" title="one">one</a>, <a href="url-two" title="two">two</a>"#
        );
        assert_eq!(labels_for_display(&[]), "-");
    }

    #[test]
    fn no_key_comment_mentions_branch() {
        assert!(no_key_comment("test_new_feature").contains("test_new_feature"));
    }

    #[test]
    fn title_comment_tracks_similarity() {
        let same = pr_title_comment("Add login validation", "Add login validation");
        assert!(same.contains("I'm a bot"));

        let different = pr_title_comment("Add login validation", "Bump xyz");
        assert!(different.contains("quite different"));
        assert!(different.contains("Bump xyz"));
    }
}
