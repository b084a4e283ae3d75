// Observable cache of a member's view preferences, written optimistically:
// the new value is visible before the backend confirms, and reverts to the
// previous value if the save fails.

use crate::modules::view_props::core::ports::ViewPropsRemote;
use crate::modules::view_props::core::props::ViewProps;
use crate::shared::core::primitives::Scope;
use crate::shared::infrastructure::entity_store::StoreError;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable point-in-time view of the store; cheap to clone.
#[derive(Debug, Clone)]
pub struct ViewPropsSnapshot {
    props: Arc<ViewProps>,
    is_loading: bool,
}

impl ViewPropsSnapshot {
    fn initial() -> Self {
        Self {
            props: Arc::new(ViewProps::default()),
            is_loading: false,
        }
    }

    pub fn props(&self) -> &ViewProps {
        &self.props
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Identity comparison: true when no write happened between the two
    /// snapshots (a rolled-back write restores the previous identity).
    pub fn same_value(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.props, &other.props)
    }
}

pub struct ViewPropsStore<R: ViewPropsRemote> {
    remote: Arc<R>,
    state: watch::Sender<ViewPropsSnapshot>,
}

impl<R> ViewPropsStore<R>
where
    R: ViewPropsRemote + 'static,
{
    pub fn new(remote: Arc<R>) -> Self {
        let (state, _) = watch::channel(ViewPropsSnapshot::initial());
        Self { remote, state }
    }

    pub fn snapshot(&self) -> ViewPropsSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewPropsSnapshot> {
        self.state.subscribe()
    }

    /// Fetches the member's preferences for `scope`. Failures are logged and
    /// swallowed; the previous value stays in place and the loading flag is
    /// reset, same contract as the entity stores.
    pub async fn load(&self, scope: &Scope) {
        self.state.send_modify(|snapshot| snapshot.is_loading = true);

        match self.remote.fetch(scope).await {
            Ok(props) => {
                self.state.send_modify(|snapshot| {
                    snapshot.props = Arc::new(props);
                    snapshot.is_loading = false;
                });
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    workspace = %scope.workspace,
                    project = %scope.project,
                    "loading view props failed; keeping previous value"
                );
                self.state.send_modify(|snapshot| snapshot.is_loading = false);
            }
        }
    }

    /// Optimistic write: `props` becomes visible immediately, then the save
    /// runs. On failure the previous value is restored and the error goes
    /// back to the caller.
    pub async fn update(&self, scope: &Scope, props: ViewProps) -> Result<(), StoreError> {
        let previous = self.state.borrow().props.clone();

        let next = Arc::new(props);
        self.state
            .send_modify(|snapshot| snapshot.props = Arc::clone(&next));

        match self.remote.save(scope, &next).await {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "saving view props failed; reverting to previous value");
                self.state
                    .send_modify(|snapshot| snapshot.props = previous);
                Err(error.into())
            }
        }
    }
}
