// Remote port for entity collections.
//
// Purpose
// - Describe the CRUD surface the stores need from the backend as a trait,
//   without implementing any transport here.
//
// Responsibilities
// - Keep the stores independent of any HTTP client by coding against traits.
//
// Boundaries
// - No concrete transport here. Adapters implement these traits per module;
//   in-memory implementations back the tests and local development.

use crate::shared::core::primitives::{Actor, Scope};
use crate::shared::infrastructure::entity_store::Entity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Network(String),

    #[error("http {status}")]
    Http { status: u16 },

    #[error("validation failed on: {}", fields.join(", "))]
    Validation { fields: Vec<String> },
}

/// Backend CRUD for one entity collection. The remote owns the durable
/// records and assigns ids; the stores only cache what it returns.
#[async_trait]
pub trait EntityRemote<E: Entity>: Send + Sync {
    async fn list(&self, scope: &Scope) -> Result<Vec<E>, RemoteError>;

    async fn create(&self, scope: &Scope, draft: E::Draft, actor: &Actor)
    -> Result<E, RemoteError>;

    async fn patch(
        &self,
        scope: &Scope,
        id: &str,
        patch: E::Patch,
        actor: &Actor,
    ) -> Result<E, RemoteError>;

    async fn delete(&self, scope: &Scope, id: &str, actor: &Actor) -> Result<(), RemoteError>;

    async fn bulk_delete(
        &self,
        scope: &Scope,
        ids: &[String],
        actor: &Actor,
    ) -> Result<(), RemoteError>;
}
