// Bulk-delete use case, as driven by the issue search modal: the remote
// call settles first, then the selection disappears from the cache and the
// user gets a toast either way.

use crate::modules::issues::core::issue::Issue;
use crate::shared::core::primitives::{Actor, CurrentScopeProvider};
use crate::shared::infrastructure::entity_store::{EntityStore, StoreError};
use crate::shared::infrastructure::notifications::{Notification, NotificationPublisher};
use crate::shared::infrastructure::remote::EntityRemote;
use std::sync::Arc;

pub struct BulkDeleteIssuesHandler<R, P, S>
where
    R: EntityRemote<Issue> + 'static,
    P: NotificationPublisher,
    S: CurrentScopeProvider,
{
    store: Arc<EntityStore<Issue, R>>,
    publisher: Arc<P>,
    scope_provider: Arc<S>,
}

impl<R, P, S> BulkDeleteIssuesHandler<R, P, S>
where
    R: EntityRemote<Issue> + 'static,
    P: NotificationPublisher,
    S: CurrentScopeProvider,
{
    pub fn new(store: Arc<EntityStore<Issue, R>>, publisher: Arc<P>, scope_provider: Arc<S>) -> Self {
        Self {
            store,
            publisher,
            scope_provider,
        }
    }

    pub async fn handle(&self, issue_ids: Vec<String>, actor: &Actor) -> Result<(), StoreError> {
        if issue_ids.is_empty() {
            self.publisher.notify(Notification::error(
                "Error!",
                "Please select at least one issue.",
            ));
            return Ok(());
        }

        let scope = self.scope_provider.current_scope();
        match self.store.bulk_delete(&scope, &issue_ids, actor).await {
            Ok(()) => {
                self.publisher.notify(Notification::success(
                    "Success!",
                    "Issues deleted successfully!",
                ));
                Ok(())
            }
            Err(error) => {
                self.publisher.notify(Notification::error(
                    "Error!",
                    "Something went wrong. Please try again.",
                ));
                Err(error)
            }
        }
    }
}
