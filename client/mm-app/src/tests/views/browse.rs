use crate::tests::{logged_in_app, offline_app};
use crate::views::BrowseView;
use crate::{NoticeLevel, Route};

use mm_core::{Candidate, Gender, RequestState, Role, Selection, UserId};

use std::str::FromStr;

fn directory() -> Vec<Candidate> {
    vec![
        Candidate::new(10, "root").with_role(Role::Admin),
        Candidate::new(2, "bob").with_gender(Gender::Male),
        Candidate::new(3, "carol").with_gender(Gender::Female),
        Candidate::new(4, "dan").with_gender(Gender::Male),
        Candidate::new(5, "ed").with_gender(Gender::Male),
    ]
}

fn loaded_view(app: &crate::App<mm_session::MemoryStore>) -> BrowseView {
    let mut view = BrowseView::open(app);
    let ticket = view.begin_load();
    assert!(view.finish_load(ticket, Ok(directory())).is_none());
    view
}

#[test]
fn given_female_member_when_loaded_then_only_non_admin_males_visible() {
    let app = logged_in_app(Role::Member);
    let view = loaded_view(&app);

    let ids: Vec<UserId> = view.visible(&app).into_iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![UserId::from(2), UserId::from(4), UserId::from(5)]);
}

#[test]
fn given_no_identity_when_loaded_then_nothing_visible() {
    let app = offline_app();
    let view = loaded_view(&app);
    assert!(view.visible(&app).is_empty());
}

#[test]
fn given_full_selection_when_toggle_third_then_capacity_notice() {
    let mut app = logged_in_app(Role::Member);
    let mut view = loaded_view(&app);

    view.toggle(&mut app, &UserId::from(2));
    view.toggle(&mut app, &UserId::from(4));
    let notice = view.toggle(&mut app, &UserId::from(5));

    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "You can only select up to 2 people.");
    assert_eq!(view.selection().ids(), vec![UserId::from(2), UserId::from(4)]);
}

#[test]
fn given_invisible_candidate_when_toggle_then_rejected() {
    let mut app = logged_in_app(Role::Member);
    let mut view = loaded_view(&app);

    let admin = view.toggle(&mut app, &UserId::from(10));
    let same_gender = view.toggle(&mut app, &UserId::from(3));

    assert!(admin.is_failure());
    assert!(same_gender.is_failure());
    assert!(view.selection().is_empty());
}

#[test]
fn given_toggled_twice_when_reopened_then_selection_empty() {
    let mut app = logged_in_app(Role::Member);
    let mut view = loaded_view(&app);

    view.toggle(&mut app, &UserId::from(2));
    view.toggle(&mut app, &UserId::from(2));

    assert!(BrowseView::open(&app).selection().is_empty());
}

#[test]
fn given_selection_when_reopened_then_restored_from_session() {
    let mut app = logged_in_app(Role::Member);
    let mut view = loaded_view(&app);
    view.toggle(&mut app, &UserId::from(4));

    let reopened = BrowseView::open(&app);

    assert_eq!(reopened.selection().ids(), vec![UserId::from(4)]);
}

#[test]
fn given_saved_selection_over_capacity_when_opened_then_truncation_reported_once() {
    let mut app = logged_in_app(Role::Member);
    let (oversized, _) = Selection::from_members(directory()[1..].to_vec(), 4);
    app.session.save_selection(&oversized);

    let mut view = BrowseView::open(&app);

    assert_eq!(view.selection().ids(), vec![UserId::from(2), UserId::from(3)]);
    let notice = view.take_notice().unwrap();
    assert!(!notice.is_failure());
    assert!(notice.message.contains("limit of 2"));
    assert!(notice.message.contains("2 people were dropped"));
    assert!(view.take_notice().is_none());
}

#[test]
fn given_saved_selection_within_capacity_when_opened_then_no_notice() {
    let mut app = logged_in_app(Role::Member);
    let mut view = loaded_view(&app);
    view.toggle(&mut app, &UserId::from(2));

    assert!(BrowseView::open(&app).take_notice().is_none());
}

#[test]
fn given_text_ids_from_api_when_toggle_with_parsed_number_then_selected() {
    let mut app = logged_in_app(Role::Member);
    let mut view = BrowseView::open(&app);
    let ticket = view.begin_load();
    let directory = vec![Candidate::new("2", "bob").with_gender(Gender::Male)];
    view.finish_load(ticket, Ok(directory));

    let cli_id = UserId::from_str("2").unwrap();
    let notice = view.toggle(&mut app, &cli_id);

    assert!(!notice.is_failure());
    assert_eq!(view.selection().ids(), vec![UserId::Text("2".into())]);
}

#[test]
fn given_view_left_when_load_completes_then_result_dropped() {
    let app = logged_in_app(Role::Member);
    let mut view = BrowseView::open(&app);

    let ticket = view.begin_load();
    view.leave();
    let notice = view.finish_load(ticket, Err("boom".into()));

    assert!(notice.is_none());
    assert_eq!(view.state(), &RequestState::Loading);
}

#[test]
fn given_newer_request_when_older_completes_then_dropped() {
    let app = logged_in_app(Role::Member);
    let mut view = BrowseView::open(&app);

    let first = view.begin_load();
    let second = view.begin_load();
    assert!(view.finish_load(first, Ok(Vec::new())).is_none());
    assert!(view.state().is_loading());

    view.finish_load(second, Ok(directory()));
    assert_eq!(view.state().data().map(Vec::len), Some(5));
}

#[test]
fn given_failed_load_when_finished_then_error_notice() {
    let app = logged_in_app(Role::Member);
    let mut view = BrowseView::open(&app);

    let ticket = view.begin_load();
    let notice = view.finish_load(ticket, Err("Server unavailable".into()));

    assert_eq!(notice.map(|n| n.message), Some("Server unavailable".to_string()));
    assert_eq!(view.state().error(), Some("Server unavailable"));
}

#[tokio::test]
async fn given_empty_selection_when_submit_then_no_op() {
    let mut app = logged_in_app(Role::Member);
    let mut view = loaded_view(&app);

    assert!(view.submit(&mut app).await.is_none());
    assert_ne!(app.route(), &Route::Matches);
}

#[tokio::test]
async fn given_no_identity_when_submit_then_no_op() {
    let mut app = logged_in_app(Role::Member);
    let mut view = loaded_view(&app);
    view.toggle(&mut app, &UserId::from(2));
    app.session.logout();

    assert!(view.submit(&mut app).await.is_none());
    assert_eq!(view.selection().len(), 1);
}
