use std::sync::LazyLock;

use regex::Regex;

use crate::model::work_item::WorkItemKey;

/// Matches a key on reversed, uppercased text: number first, then at most ten
/// prefix characters. Scanning the reversed text keeps the prefix from
/// swallowing the words that precede it in a branch name.
static REVERSED_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)-([A-Z0-9]{1,10})").expect("Invalid regex pattern for issue keys")
});

fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Extract every issue key from `input`, in left-to-right order.
///
/// ```text
/// extract_keys("feature/newFeature--mojo-5611")   -> [MOJO-5611]
/// extract_keys("ABCDEFGHIJKL-999")                -> [CDEFGHIJKL-999]
/// extract_keys("MOJO-6789/task-ES-43")            -> [MOJO-6789, ES-43]
/// ```
pub fn extract_keys(input: &str) -> Vec<WorkItemKey> {
    let reversed = reverse(input).to_uppercase();

    let mut keys: Vec<WorkItemKey> = REVERSED_KEY_REGEX
        .captures_iter(&reversed)
        .map(|caps| WorkItemKey::new(&reverse(&caps[2]), &reverse(&caps[1])))
        .collect();

    keys.reverse();
    keys
}

/// The key a run acts on: the last one found, since keys conventionally sit
/// at the end of a branch name.
pub fn canonical_key(keys: &[WorkItemKey]) -> Option<&WorkItemKey> {
    keys.last()
}
