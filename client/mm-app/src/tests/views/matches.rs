use crate::tests::{logged_in_app, offline_app};
use crate::views::{MatchList, MatchesView};
use crate::{App, AppSettings};

use mm_api::ApiClient;
use mm_config::MatchesMode;
use mm_core::{Candidate, Gender, Role};
use mm_session::{MemoryStore, SessionStore};

use std::time::Duration;

fn pending_app() -> App<MemoryStore> {
    let mut app = App::new(
        SessionStore::new(MemoryStore::new()),
        ApiClient::new(crate::tests::UNROUTABLE, Duration::from_secs(1)).unwrap(),
        AppSettings {
            capacity: 3,
            matches_mode: MatchesMode::Pending,
        },
    );
    app.session
        .login(crate::tests::identity(Role::Member))
        .unwrap();
    app
}

#[tokio::test]
async fn given_pending_mode_when_load_then_lists_recorded_likes() {
    let mut app = pending_app();
    app.session
        .record_pending_likes(&[Candidate::new(2, "bob").with_gender(Gender::Male)]);
    let mut view = MatchesView::new();

    assert!(view.load(&app).await.is_none());

    match view.state().data() {
        Some(MatchList::Pending(likes)) => assert_eq!(likes.len(), 1),
        other => panic!("unexpected state {other:?}"),
    }
}

#[tokio::test]
async fn given_member_when_generate_then_refused() {
    let app = logged_in_app(Role::Member);
    let mut view = MatchesView::new();

    let notice = view.generate(&app).await;

    assert!(notice.is_failure());
    assert!(notice.message.contains("admins and developers"));
}

#[tokio::test]
async fn given_developer_when_clear_unconfirmed_then_nothing_sent() {
    let mut app = logged_in_app(Role::Developer);
    let mut view = MatchesView::new();

    let notice = view.clear(&mut app, false).await;

    assert!(notice.is_failure());
    assert!(notice.message.contains("--yes"));
}

#[tokio::test]
async fn given_no_identity_when_clear_then_refused() {
    let mut app = offline_app();
    let mut view = MatchesView::new();

    assert!(view.clear(&mut app, true).await.is_failure());
}

#[tokio::test]
async fn given_member_in_mutual_mode_when_clear_then_refused() {
    let mut app = logged_in_app(Role::Member);
    let mut view = MatchesView::new();

    let notice = view.clear(&mut app, true).await;

    assert!(notice.is_failure());
    assert!(notice.message.contains("admins and developers"));
}

#[tokio::test]
async fn given_member_in_pending_mode_when_clear_confirmed_then_local_likes_removed() {
    let mut app = pending_app();
    app.session
        .record_pending_likes(&[Candidate::new(2, "bob").with_gender(Gender::Male)]);
    let mut view = MatchesView::new();
    view.load(&app).await;

    let notice = view.clear(&mut app, true).await;

    assert!(!notice.is_failure());
    assert!(app.session.pending_likes().is_empty());
    assert_eq!(view.state().data().map(MatchList::is_empty), Some(true));

    let mut reopened = MatchesView::new();
    reopened.load(&app).await;
    assert_eq!(reopened.state().data().map(MatchList::len), Some(0));
}

#[tokio::test]
async fn given_member_in_pending_mode_when_clear_unconfirmed_then_likes_kept() {
    let mut app = pending_app();
    app.session.record_pending_likes(&[Candidate::new(2, "bob")]);
    let mut view = MatchesView::new();

    let notice = view.clear(&mut app, false).await;

    assert!(notice.message.contains("--yes"));
    assert_eq!(app.session.pending_likes().len(), 1);
}

#[test]
fn given_view_left_when_load_finishes_then_dropped() {
    let mut view = MatchesView::new();
    let ticket = view.begin_load();
    view.leave();

    assert!(view.finish_load(ticket, Ok(MatchList::Mutual(Vec::new()))).is_none());
    assert!(view.state().is_loading());
}

#[test]
fn test_match_list_serializes_with_mode_tag() {
    let list = MatchList::Pending(vec![Candidate::new(2, "bob")]);
    let json = serde_json::to_value(&list).unwrap();

    assert_eq!(json["mode"], "pending");
    assert_eq!(json["entries"][0]["username"], "bob");
    assert_eq!(list.len(), 1);
}
