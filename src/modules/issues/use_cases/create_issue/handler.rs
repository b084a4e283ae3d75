// Create-issue use case: persist through the store, then tell the user.
//
// The store stays silent about outcomes; this handler owns the feedback so
// forms can keep their state and offer a retry on failure.

use crate::modules::issues::core::issue::{Issue, IssueDraft};
use crate::shared::core::primitives::{Actor, CurrentScopeProvider};
use crate::shared::infrastructure::entity_store::{EntityStore, StoreError};
use crate::shared::infrastructure::notifications::{Notification, NotificationPublisher};
use crate::shared::infrastructure::remote::EntityRemote;
use std::sync::Arc;

pub struct CreateIssueHandler<R, P, S>
where
    R: EntityRemote<Issue> + 'static,
    P: NotificationPublisher,
    S: CurrentScopeProvider,
{
    store: Arc<EntityStore<Issue, R>>,
    publisher: Arc<P>,
    scope_provider: Arc<S>,
}

impl<R, P, S> CreateIssueHandler<R, P, S>
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

    pub async fn handle(&self, draft: IssueDraft, actor: &Actor) -> Result<Issue, StoreError> {
        let scope = self.scope_provider.current_scope();
        match self.store.create(&scope, draft, actor).await {
            Ok(issue) => {
                self.publisher.notify(Notification::success(
                    "Success!",
                    "Issue created successfully.",
                ));
                Ok(issue)
            }
            Err(error) => {
                self.publisher.notify(Notification::error(
                    "Error!",
                    "Issue could not be created. Please try again.",
                ));
                Err(error)
            }
        }
    }
}
