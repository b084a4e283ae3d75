// In memory implementation of the issue remote port.
//
// Purpose
// - Support store and handler tests and local development without a backend.
//
// Responsibilities
// - Own records like the real backend does: assign ids and timestamps on
//   create, merge patches server-side, answer lists newest first.
// - Let tests inject a failure for the next call.

use crate::modules::issues::core::issue::{Issue, IssueDraft, IssuePatch};
use crate::shared::core::primitives::{Actor, Scope};
use crate::shared::infrastructure::remote::{EntityRemote, RemoteError};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryIssueRemote {
    records: RwLock<HashMap<String, Issue>>,
    fail_next: Mutex<Option<RemoteError>>,
}

impl InMemoryIssueRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, issues: Vec<Issue>) {
        let mut records = self.records.write().await;
        for issue in issues {
            records.insert(issue.id.clone(), issue);
        }
    }

    /// Makes the next remote call fail with `error`, once.
    pub fn fail_next_call(&self, error: RemoteError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    fn take_failure(&self) -> Result<(), RemoteError> {
        match self.fail_next.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl EntityRemote<Issue> for InMemoryIssueRemote {
    async fn list(&self, _scope: &Scope) -> Result<Vec<Issue>, RemoteError> {
        self.take_failure()?;
        let records = self.records.read().await;
        let mut issues: Vec<Issue> = records.values().cloned().collect();
        issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(issues)
    }

    async fn create(
        &self,
        _scope: &Scope,
        draft: IssueDraft,
        actor: &Actor,
    ) -> Result<Issue, RemoteError> {
        self.take_failure()?;
        if draft.name.trim().is_empty() {
            return Err(RemoteError::Validation {
                fields: vec!["name".to_string()],
            });
        }

        let now = Utc::now();
        let issue = Issue {
            id: Uuid::now_v7().to_string(),
            name: draft.name,
            description: draft.description,
            state: draft.state,
            priority: draft.priority,
            assignees: draft.assignees,
            labels: draft.labels,
            parent: draft.parent,
            target_date: draft.target_date,
            created_at: now,
            updated_at: now,
            created_by: actor.id.clone(),
        };
        self.records
            .write()
            .await
            .insert(issue.id.clone(), issue.clone());
        Ok(issue)
    }

    async fn patch(
        &self,
        _scope: &Scope,
        id: &str,
        patch: IssuePatch,
        _actor: &Actor,
    ) -> Result<Issue, RemoteError> {
        self.take_failure()?;
        let mut records = self.records.write().await;
        let issue = records
            .get_mut(id)
            .ok_or(RemoteError::Http { status: 404 })?;

        if let Some(name) = patch.name {
            issue.name = name;
        }
        if let Some(description) = patch.description {
            issue.description = description;
        }
        if let Some(state) = patch.state {
            issue.state = state;
        }
        if let Some(priority) = patch.priority {
            issue.priority = Some(priority);
        }
        if let Some(assignees) = patch.assignees {
            issue.assignees = assignees;
        }
        if let Some(labels) = patch.labels {
            issue.labels = labels;
        }
        if let Some(parent) = patch.parent {
            issue.parent = Some(parent);
        }
        if let Some(target_date) = patch.target_date {
            issue.target_date = Some(target_date);
        }
        issue.updated_at = Utc::now();
        Ok(issue.clone())
    }

    async fn delete(&self, _scope: &Scope, id: &str, _actor: &Actor) -> Result<(), RemoteError> {
        self.take_failure()?;
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(RemoteError::Http { status: 404 })
    }

    async fn bulk_delete(
        &self,
        _scope: &Scope,
        ids: &[String],
        _actor: &Actor,
    ) -> Result<(), RemoteError> {
        self.take_failure()?;
        let mut records = self.records.write().await;
        for id in ids {
            records.remove(id);
        }
        Ok(())
    }
}
