/// Additions above which a pull request is considered too large to review.
pub const DEFAULT_SIZE_THRESHOLD: u64 = 800;

/// True when `changed_lines` exceeds `threshold`. NaN on either side is never
/// oversized, so a missing count cannot block a workflow.
pub fn is_oversized(changed_lines: f64, threshold: f64) -> bool {
    if changed_lines.is_nan() || threshold.is_nan() {
        return false;
    }
    changed_lines > threshold
}

pub fn huge_pr_comment(additions: u64, threshold: u64) -> String {
    format!(
        r#"<p>This PR is too huge for one to review :broken_heart: </p>
<table>
  <tr>
    <th>Additions</th>
    <td>{additions} :no_good_woman: </td>
  </tr>
  <tr>
    <th>Expected</th>
    <td>:arrow_down: {threshold}</td>
  </tr>
</table>
<p>Consider breaking it down into multiple small PRs.</p>
<p>
  Check out this <a href="https://www.atlassian.com/blog/git/written-unwritten-guide-pull-requests">guide</a>
  to learn more about PR best-practices.
</p>
"#
    )
}
