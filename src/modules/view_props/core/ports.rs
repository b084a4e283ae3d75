// Remote port for a member's project view preferences. The backend keeps
// one ViewProps value per member and scope; there is no id to speak of.

use crate::modules::view_props::core::props::ViewProps;
use crate::shared::core::primitives::Scope;
use crate::shared::infrastructure::remote::RemoteError;
use async_trait::async_trait;

#[async_trait]
pub trait ViewPropsRemote: Send + Sync {
    async fn fetch(&self, scope: &Scope) -> Result<ViewProps, RemoteError>;

    async fn save(&self, scope: &Scope, props: &ViewProps) -> Result<(), RemoteError>;
}
