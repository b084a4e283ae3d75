// Observable in-memory cache of remote-owned entities.
//
// Purpose
// - Mirror one remote collection locally so views can read it synchronously.
//
// Responsibilities
// - Keep at most one entry per id.
// - Install a fresh collection value on every mutation so observers can
//   detect change by identity, never by deep comparison.
// - Synchronize create/update/delete with the remote through the
//   EntityRemote port.
//
// Boundaries
// - No transport, no retries, no timeouts; those belong to the remote
//   adapter. No user-facing feedback; that belongs to the use-case handlers.

use crate::shared::core::primitives::{Actor, Scope};
use crate::shared::infrastructure::remote::{EntityRemote, RemoteError};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A domain record cached by an [`EntityStore`]. The remote system owns the
/// record; the store only cares about its identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Shape sent to the remote when creating a record, before an id exists.
    type Draft: Clone + Send + Sync + 'static;
    /// Partial shape sent to the remote on update.
    type Patch: Clone + Send + Sync + 'static;

    fn id(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entity with id {0} in the local collection")]
    NotFound(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Immutable point-in-time view of a store. Cloning is cheap; the entity map
/// is shared behind an `Arc` and replaced wholesale on every mutation.
#[derive(Debug, Clone)]
pub struct StoreSnapshot<E> {
    entities: Arc<HashMap<String, E>>,
    is_loading: bool,
}

impl<E> StoreSnapshot<E> {
    fn empty() -> Self {
        Self {
            entities: Arc::new(HashMap::new()),
            is_loading: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_entities(entities: Vec<E>) -> Self
    where
        E: Entity,
    {
        let entities = entities
            .into_iter()
            .map(|entity| (entity.id().to_string(), entity))
            .collect();
        Self {
            entities: Arc::new(entities),
            is_loading: false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// True strictly between the start of a bulk load and its completion.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entities.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    /// Identity comparison of the underlying collection value. Two snapshots
    /// taken with no successful mutation in between share the same value.
    pub fn same_collection(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entities, &other.entities)
    }
}

/// Cache of one remote entity collection with confirmed-write updates:
/// create and update touch the remote first and only then the local map,
/// while delete removes locally first and settles with the remote in the
/// background.
pub struct EntityStore<E: Entity, R: EntityRemote<E>> {
    remote: Arc<R>,
    state: watch::Sender<StoreSnapshot<E>>,
}

impl<E, R> EntityStore<E, R>
where
    E: Entity,
    R: EntityRemote<E> + 'static,
{
    pub fn new(remote: Arc<R>) -> Self {
        let (state, _) = watch::channel(StoreSnapshot::empty());
        Self { remote, state }
    }

    pub fn snapshot(&self) -> StoreSnapshot<E> {
        self.state.borrow().clone()
    }

    /// Change feed for observers. The receiver always holds the latest
    /// snapshot; intermediate values may be skipped.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot<E>> {
        self.state.subscribe()
    }

    /// Fetches the full collection for `scope` and replaces the local map
    /// wholesale; entries absent from the response are dropped.
    ///
    /// Failures are logged and swallowed here: the loading flag is reset and
    /// the previous collection stays in place, on the assumption that a load
    /// is re-triggered by navigation anyway.
    ///
    /// Overlapping loads are not coalesced or cancelled; the last response
    /// to resolve wins, even if it was issued first.
    pub async fn load(&self, scope: &Scope) {
        self.state.send_modify(|snapshot| snapshot.is_loading = true);

        match self.remote.list(scope).await {
            Ok(list) => {
                let mut entities = HashMap::with_capacity(list.len());
                for entity in list {
                    entities.insert(entity.id().to_string(), entity);
                }
                self.state.send_modify(|snapshot| {
                    snapshot.entities = Arc::new(entities);
                    snapshot.is_loading = false;
                });
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    workspace = %scope.workspace,
                    project = %scope.project,
                    "loading entities failed; keeping previous collection"
                );
                self.state.send_modify(|snapshot| snapshot.is_loading = false);
            }
        }
    }

    /// Persists `draft` remotely and, once the remote has assigned an id,
    /// inserts the returned entity. Nothing is visible locally until the
    /// remote call succeeds.
    pub async fn create(
        &self,
        scope: &Scope,
        draft: E::Draft,
        actor: &Actor,
    ) -> Result<E, StoreError> {
        let created = self.remote.create(scope, draft, actor).await?;
        self.install(|entities| {
            entities.insert(created.id().to_string(), created.clone());
        });
        Ok(created)
    }

    /// Confirmed-write update: the remote is patched first and its returned
    /// representation replaces `id` locally. On failure the collection is
    /// untouched and the error goes back to the caller.
    ///
    /// `id` must already be cached; a miss is reported as
    /// [`StoreError::NotFound`] without touching the remote.
    pub async fn update(
        &self,
        scope: &Scope,
        id: &str,
        patch: E::Patch,
        actor: &Actor,
    ) -> Result<(), StoreError> {
        let known = self.state.borrow().contains(id);
        if !known {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let updated = self.remote.patch(scope, id, patch, actor).await?;
        self.install(|entities| {
            entities.insert(updated.id().to_string(), updated);
        });
        Ok(())
    }

    /// Removes `id` locally right away, with no snapshot retained, then
    /// issues the remote delete in the background. A remote failure is
    /// logged and the entity is NOT restored: responsiveness is favored
    /// over consistency for deletes, a deliberate trade-off.
    ///
    /// The returned handle lets tests and shutdown paths await the remote
    /// call; callers are free to drop it.
    pub fn delete(&self, scope: &Scope, id: &str, actor: &Actor) -> JoinHandle<()> {
        self.install(|entities| {
            entities.remove(id);
        });

        let remote = Arc::clone(&self.remote);
        let scope = scope.clone();
        let id = id.to_string();
        let actor = actor.clone();
        tokio::spawn(async move {
            if let Err(error) = remote.delete(&scope, &id, &actor).await {
                tracing::warn!(%error, id = %id, "remote delete failed; local removal stands");
            }
        })
    }

    /// Confirmed bulk delete: the remote call settles first, then every id
    /// in `ids` is dropped from the collection in one replacement.
    pub async fn bulk_delete(
        &self,
        scope: &Scope,
        ids: &[String],
        actor: &Actor,
    ) -> Result<(), StoreError> {
        self.remote.bulk_delete(scope, ids, actor).await?;
        self.install(|entities| {
            for id in ids {
                entities.remove(id);
            }
        });
        Ok(())
    }

    // Copy-on-write step: clone the current map, mutate the clone, install
    // it behind a fresh Arc so snapshot identity changes.
    fn install(&self, mutate: impl FnOnce(&mut HashMap<String, E>)) {
        self.state.send_modify(|snapshot| {
            let mut next = (*snapshot.entities).clone();
            mutate(&mut next);
            snapshot.entities = Arc::new(next);
        });
    }
}
