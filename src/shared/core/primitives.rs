// Shared value types used across every module.
//
// Purpose
// - Identify which remote collection an operation targets (Scope) and on
//   whose behalf it runs (Actor).
//
// Boundaries
// - No behavior beyond construction and access. Anything that talks to the
//   network lives behind the ports in shared::infrastructure.

use serde::{Deserialize, Serialize};

/// Addressing context for a remote collection: workspace plus project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub workspace: String,
    pub project: String,
}

impl Scope {
    pub fn new(workspace: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            workspace: workspace.into(),
            project: project.into(),
        }
    }
}

/// The user a mutation is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub display_name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Narrow read-only capability for call sites that need to know which scope
/// is currently active, instead of reaching back into some shared root.
pub trait CurrentScopeProvider: Send + Sync {
    fn current_scope(&self) -> Scope;
}

/// Scope provider that always answers with the scope it was built with.
#[derive(Debug, Clone)]
pub struct FixedScope {
    scope: Scope,
}

impl FixedScope {
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }
}

impl CurrentScopeProvider for FixedScope {
    fn current_scope(&self) -> Scope {
        self.scope.clone()
    }
}
