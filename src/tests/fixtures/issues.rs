// Shared test fixture for issues. The base record is a JSON payload in the
// backend's wire shape, so the fixture doubles as a deserialization check.

use crate::modules::issues::core::issue::{Issue, IssueDraft};
use chrono::DateTime;

const ISSUE_JSON: &str = r#"{
    "id": "issue-fixed-0001",
    "name": "Fix login bug",
    "description": "Users cannot sign in with SSO.",
    "state": "state-backlog",
    "priority": "urgent",
    "assignees": ["user-fixed-0001"],
    "labels": ["bug"],
    "parent": null,
    "target_date": "2024-07-01",
    "created_at": "2024-03-01T09:30:00Z",
    "updated_at": "2024-03-01T09:30:00Z",
    "created_by": "user-fixed-0001"
}"#;

pub struct IssueBuilder {
    inner: Issue,
}

impl Default for IssueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl IssueBuilder {
    pub fn new() -> Self {
        let inner: Issue = serde_json::from_str(ISSUE_JSON).expect("issue fixture must parse");
        Self { inner }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn state(mut self, v: impl Into<String>) -> Self {
        self.inner.state = v.into();
        self
    }

    pub fn priority(mut self, v: impl Into<String>) -> Self {
        self.inner.priority = Some(v.into());
        self
    }

    pub fn created_at(mut self, rfc3339: &str) -> Self {
        self.inner.created_at = DateTime::parse_from_rfc3339(rfc3339)
            .expect("fixture timestamp must be RFC 3339")
            .with_timezone(&chrono::Utc);
        self
    }

    pub fn build(self) -> Issue {
        self.inner
    }
}

/// Minimal valid draft with the given name.
pub fn issue_draft(name: &str) -> IssueDraft {
    IssueDraft {
        name: name.to_string(),
        description: String::new(),
        state: "state-backlog".to_string(),
        ..IssueDraft::default()
    }
}
