use crate::modules::issues::adapters::in_memory::InMemoryIssueRemote;
use crate::modules::issues::core::issue::IssuePatch;
use crate::modules::issues::core::queries::search_issues;
use crate::modules::issues::use_cases::create_issue::handler::CreateIssueHandler;
use crate::modules::view_props::adapters::in_memory::InMemoryViewPropsRemote;
use crate::modules::view_props::core::props::{IssueViewKind, ViewProps};
use crate::shared::core::primitives::{Actor, FixedScope, Scope};
use crate::shared::infrastructure::notifications::{NotificationKind, RecordingPublisher};
use crate::shared::infrastructure::remote::RemoteError;
use crate::shell::stores::Stores;
use crate::tests::fixtures::issues::{issue_draft, IssueBuilder};
use std::sync::Arc;

fn scope() -> Scope {
    Scope::new("acme", "web-app")
}

fn actor() -> Actor {
    Actor::new("user-fixed-0001", "Ada")
}

fn wired() -> (
    Stores<InMemoryIssueRemote, InMemoryViewPropsRemote>,
    Arc<InMemoryIssueRemote>,
    Arc<InMemoryViewPropsRemote>,
) {
    let issue_remote = Arc::new(InMemoryIssueRemote::new());
    let view_props_remote = Arc::new(InMemoryViewPropsRemote::new());
    let stores = Stores::new(Arc::clone(&issue_remote), Arc::clone(&view_props_remote));
    (stores, issue_remote, view_props_remote)
}

#[tokio::test]
async fn walks_an_issue_through_load_create_rename_and_delete() {
    let (stores, issue_remote, _) = wired();
    issue_remote
        .seed(vec![IssueBuilder::new()
            .id("seeded")
            .name("Ship dashboard")
            .created_at("2024-01-01T00:00:00Z")
            .build()])
        .await;

    stores.issues.load(&scope()).await;
    assert_eq!(stores.issues.snapshot().len(), 1);

    let publisher = Arc::new(RecordingPublisher::default());
    let create = CreateIssueHandler::new(
        Arc::clone(&stores.issues),
        Arc::clone(&publisher),
        Arc::new(FixedScope::new(scope())),
    );
    let created = create
        .handle(issue_draft("Fix login bug"), &actor())
        .await
        .expect("expected the issue to be created");
    assert_eq!(stores.issues.snapshot().len(), 2);
    assert_eq!(publisher.published()[0].kind, NotificationKind::Success);

    stores
        .issues
        .update(&scope(), &created.id, IssuePatch::rename("Fix login bug now"), &actor())
        .await
        .expect("expected the rename to be confirmed");
    let snapshot = stores.issues.snapshot();
    assert_eq!(snapshot.get(&created.id).unwrap().name, "Fix login bug now");

    let found = search_issues(&snapshot, "login");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, created.id);

    stores
        .issues
        .delete(&scope(), &created.id, &actor())
        .await
        .expect("expected the background delete to finish");
    assert!(!stores.issues.snapshot().contains(&created.id));
    assert_eq!(issue_remote.record_count().await, 1);
}

#[tokio::test]
async fn keeps_a_deleted_issue_gone_even_when_the_backend_rejects() {
    let (stores, issue_remote, _) = wired();
    issue_remote
        .seed(vec![IssueBuilder::new().id("1").build()])
        .await;
    stores.issues.load(&scope()).await;

    issue_remote.fail_next_call(RemoteError::Http { status: 500 });
    let pending = stores.issues.delete(&scope(), "1", &actor());

    assert!(!stores.issues.snapshot().contains("1"));
    pending.await.unwrap();
    assert!(!stores.issues.snapshot().contains("1"));
    // The backend still holds the record; only a reload would bring it back.
    assert_eq!(issue_remote.record_count().await, 1);
}

#[tokio::test]
async fn saves_view_props_optimistically_and_rolls_back_a_rejected_save() {
    let (stores, _, view_props_remote) = wired();
    stores.view_props.load(&scope()).await;
    assert_eq!(
        stores.view_props.snapshot().props().issue_view,
        IssueViewKind::List
    );

    let kanban = ViewProps {
        issue_view: IssueViewKind::Kanban,
        ..ViewProps::default()
    };
    stores
        .view_props
        .update(&scope(), kanban.clone())
        .await
        .expect("expected the save to succeed");
    assert_eq!(view_props_remote.saved_for(&scope()).await, Some(kanban));

    view_props_remote.fail_next_call(RemoteError::Network("connection refused".into()));
    let calendar = ViewProps {
        issue_view: IssueViewKind::Calendar,
        ..ViewProps::default()
    };
    let result = stores.view_props.update(&scope(), calendar).await;

    assert!(result.is_err());
    assert_eq!(
        stores.view_props.snapshot().props().issue_view,
        IssueViewKind::Kanban
    );
}
