use crate::modules::issues::core::issue::Issue;
use crate::shared::infrastructure::entity_store::StoreSnapshot;

/// Issues whose name contains `query`, case-insensitively. Backs the
/// client-side search used when picking issues for bulk operations.
pub fn search_issues<'a>(snapshot: &'a StoreSnapshot<Issue>, query: &str) -> Vec<&'a Issue> {
    let needle = query.to_lowercase();
    let mut matches: Vec<&Issue> = snapshot
        .iter()
        .filter(|issue| issue.name.to_lowercase().contains(&needle))
        .collect();
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matches
}
