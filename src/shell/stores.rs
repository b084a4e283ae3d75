use crate::modules::issues::core::issue::Issue;
use crate::modules::view_props::core::ports::ViewPropsRemote;
use crate::modules::view_props::core::store::ViewPropsStore;
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shared::infrastructure::remote::EntityRemote;
use std::sync::Arc;

/// All stores of the data layer, built from explicitly injected remotes.
pub struct Stores<RI, RV>
where
    RI: EntityRemote<Issue> + 'static,
    RV: ViewPropsRemote + 'static,
{
    pub issues: Arc<EntityStore<Issue, RI>>,
    pub view_props: Arc<ViewPropsStore<RV>>,
}

impl<RI, RV> Stores<RI, RV>
where
    RI: EntityRemote<Issue> + 'static,
    RV: ViewPropsRemote + 'static,
{
    pub fn new(issue_remote: Arc<RI>, view_props_remote: Arc<RV>) -> Self {
        Self {
            issues: Arc::new(EntityStore::new(issue_remote)),
            view_props: Arc::new(ViewPropsStore::new(view_props_remote)),
        }
    }
}

impl<RI, RV> Clone for Stores<RI, RV>
where
    RI: EntityRemote<Issue> + 'static,
    RV: ViewPropsRemote + 'static,
{
    fn clone(&self) -> Self {
        Self {
            issues: Arc::clone(&self.issues),
            view_props: Arc::clone(&self.view_props),
        }
    }
}
