// In memory implementation of the view props remote port.
//
// Purpose
// - Back store tests and local development; answers defaults for a scope
//   that was never saved, like the backend does for a fresh member.

use crate::modules::view_props::core::ports::ViewPropsRemote;
use crate::modules::view_props::core::props::ViewProps;
use crate::shared::core::primitives::Scope;
use crate::shared::infrastructure::remote::RemoteError;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryViewPropsRemote {
    saved: RwLock<HashMap<Scope, ViewProps>>,
    fail_next: Mutex<Option<RemoteError>>,
}

impl InMemoryViewPropsRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next remote call fail with `error`, once.
    pub fn fail_next_call(&self, error: RemoteError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    pub async fn saved_for(&self, scope: &Scope) -> Option<ViewProps> {
        self.saved.read().await.get(scope).cloned()
    }

    fn take_failure(&self) -> Result<(), RemoteError> {
        match self.fail_next.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ViewPropsRemote for InMemoryViewPropsRemote {
    async fn fetch(&self, scope: &Scope) -> Result<ViewProps, RemoteError> {
        self.take_failure()?;
        Ok(self
            .saved
            .read()
            .await
            .get(scope)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, scope: &Scope, props: &ViewProps) -> Result<(), RemoteError> {
        self.take_failure()?;
        self.saved.write().await.insert(scope.clone(), props.clone());
        Ok(())
    }
}
