use crate::model::work_item::ItemDetails;

/// Allow-list gate. A disabled gate always passes; otherwise `actual` must be
/// in `allowed` verbatim.
pub fn is_allowed(enabled: bool, allowed: &[String], actual: &str) -> bool {
    if !enabled {
        return true;
    }
    allowed.iter().any(|a| a == actual)
}

pub fn is_status_valid(enabled: bool, allowed: &[String], details: &ItemDetails) -> bool {
    if !enabled {
        tracing::info!("Skipping Jira issue status validation as it is disabled");
    }
    is_allowed(enabled, allowed, &details.status)
}

pub fn is_type_valid(enabled: bool, allowed: &[String], details: &ItemDetails) -> bool {
    if !enabled {
        tracing::info!("Skipping Jira issue type validation as it is disabled");
    }
    is_allowed(enabled, allowed, &details.item_type.name)
}

pub fn is_project_valid(enabled: bool, allowed: &[String], details: &ItemDetails) -> bool {
    if !enabled {
        tracing::info!("Skipping Jira project validation as it is disabled");
    }
    is_allowed(enabled, allowed, &details.project.key)
}

fn violation_table(
    headline: &str,
    detected_label: &str,
    detected: &str,
    allowed_label: &str,
    allowed: &[String],
    advice: &str,
) -> String {
    format!(
        r#"<p>:broken_heart: {headline} :broken_heart: </p>
<table>
  <tr>
    <th>{detected_label}</th>
    <td>{detected}</td>
    <td>:x:</td>
  </tr>
  <tr>
    <th>{allowed_label}</th>
    <td>{allowed}</td>
    <td>:heavy_check_mark:</td>
  </tr>
</table>
<p>{advice}</p>
"#,
        allowed = allowed.join(", ")
    )
}

pub fn invalid_status_comment(status: &str, allowed: &[String]) -> String {
    violation_table(
        "The detected issue is not in one of the allowed statuses",
        "Detected Status",
        status,
        "Allowed Statuses",
        allowed,
        "Please ensure your jira story is in one of the allowed statuses",
    )
}

pub fn invalid_type_comment(item_type: &str, allowed: &[String]) -> String {
    violation_table(
        "The detected issue is not an allowed type",
        "Detected Issue Type",
        item_type,
        "Allowed Issue Types",
        allowed,
        "Please ensure your jira ticket is created as the right type.",
    )
}

pub fn invalid_project_comment(project: &str, allowed: &[String]) -> String {
    violation_table(
        "The detected issue is not in one of the allowed projects",
        "Detected Project",
        project,
        "Allowed Projects",
        allowed,
        "Please ensure your jira ticket is created in the right project",
    )
}
