use regex::Regex;

/// Branches opened by bots; matched as prefixes.
pub const BOT_BRANCH_PREFIXES: &[&str] = &["dependabot", "all-contributors"];

/// Trunk branches that are never linted.
pub const DEFAULT_BRANCHES: &[&str] = &["main", "master", "production", "gh-pages"];

pub const HOTFIX_PRE_PROD_LABEL: &str = "HOTFIX-PRE-PROD";
pub const HOTFIX_PROD_LABEL: &str = "HOTFIX-PROD";

/// Whether the whole lint should be skipped for `branch`.
///
/// `extra_pattern` is searched (not anchored) in the branch name. An empty
/// pattern is treated as absent, since it would otherwise match every branch.
pub fn should_skip(branch: &str, extra_pattern: Option<&str>) -> bool {
    if BOT_BRANCH_PREFIXES.iter().any(|p| branch.starts_with(p)) {
        tracing::info!("You look like a bot so we're letting you off the hook!");
        return true;
    }

    if DEFAULT_BRANCHES.contains(&branch) {
        tracing::info!("Ignoring check for default branch {branch}");
        return true;
    }

    let Some(pattern) = extra_pattern.filter(|p| !p.is_empty()) else {
        return false;
    };

    match Regex::new(pattern) {
        Ok(re) if re.is_match(branch) => {
            tracing::info!(
                "branch '{branch}' ignored as it matches the ignore pattern '{pattern}' provided in skip-branches"
            );
            true
        }
        Ok(_) => {
            tracing::info!(
                "branch '{branch}' does not match ignore pattern '{pattern}' provided in skip-branches"
            );
            false
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid skip-branches pattern '{pattern}': {e}");
            false
        }
    }
}

/// Hotfix label for a pull request targeting `base_branch`, if any.
pub fn hotfix_label(base_branch: &str) -> Option<&'static str> {
    if base_branch.starts_with("release/v") {
        Some(HOTFIX_PRE_PROD_LABEL)
    } else if base_branch.starts_with("production") {
        Some(HOTFIX_PROD_LABEL)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_bot_branches() {
        assert!(should_skip("dependabot", None));
        assert!(should_skip("dependabot/npm_and_yarn/types/react-dom-16.9.6", None));
        assert!(!should_skip("feature/add-dependabot-config", None));
        assert!(!should_skip("feature/add-dependabot-config-OSS-101", None));

        assert!(should_skip("all-contributors", None));
        assert!(should_skip("all-contributors/add-ghost", None));
        assert!(!should_skip("chore/add-all-contributors", None));
        assert!(!should_skip("chore/add-all-contributors-OSS-102", None));
    }

    #[test]
    fn skips_default_branches_exactly() {
        for branch in ["main", "master", "production", "gh-pages"] {
            assert!(should_skip(branch, None), "{branch}");
        }
        assert!(!should_skip("mainline", None));
        assert!(!should_skip("production-release", None));
    }

    #[test]
    fn handles_custom_ignore_patterns() {
        assert!(should_skip("bar", Some("^bar")));
        assert!(!should_skip("foobar", Some("^bar")));

        assert!(!should_skip("bar", Some("[0-9]{2}")));
        assert!(!should_skip("bar", Some("")));
        assert!(!should_skip("foo", Some("[0-9]{2}")));
        assert!(should_skip("f00", Some("[0-9]{2}")));
    }

    #[test]
    fn anchored_custom_pattern_matches_whole_names_only() {
        let pattern = Some(r"^(production-release|master|release/v\d+)$");
        assert!(should_skip("production-release", pattern));
        assert!(should_skip("master", pattern));
        assert!(should_skip("release/v77", pattern));

        assert!(!should_skip("release/very-important-feature", pattern));
        assert!(!should_skip("masterful", pattern));
        assert!(!should_skip("productionish", pattern));
        assert!(!should_skip("fix/production-issue", pattern));
        assert!(!should_skip("chore/rebase-with-master", pattern));
        assert!(!should_skip("chore/rebase-with-release", pattern));
        assert!(!should_skip("chore/rebase-with-release/v77", pattern));
    }

    #[test]
    fn invalid_pattern_never_matches() {
        assert!(!should_skip("feature/(", Some("(")));
    }

    #[test]
    fn empty_and_regular_branches_are_linted() {
        assert!(!should_skip("", None));
        assert!(!should_skip("feature/awesomeNewFeature", None));
    }

    #[test]
    fn hotfix_label_follows_base_branch() {
        assert_eq!(hotfix_label("master"), None);
        assert_eq!(hotfix_label(""), None);
        assert_eq!(hotfix_label("production-release"), Some(HOTFIX_PROD_LABEL));
        assert_eq!(hotfix_label("release/v"), Some(HOTFIX_PRE_PROD_LABEL));
        assert_eq!(hotfix_label("release/v1.2"), Some(HOTFIX_PRE_PROD_LABEL));
    }
}
