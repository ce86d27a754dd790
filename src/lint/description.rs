/// Hidden marker embedded in the generated description block.
pub const HIDDEN_MARKER: &str = "added_by_jira_lint";

/// Returns false when `body` already carries the generated block.
pub fn should_update(body: Option<&str>) -> bool {
    match body {
        Some(body) if body.contains(HIDDEN_MARKER) => {
            tracing::info!("Marker found, PR description will not be updated.");
            false
        }
        Some(_) => {
            tracing::info!("Marker not found, PR description will be updated.");
            true
        }
        None => true,
    }
}
