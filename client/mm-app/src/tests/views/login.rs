use crate::tests::offline_app;
use crate::views::LoginView;

use mm_core::RequestState;

#[tokio::test]
async fn given_blank_password_when_submit_then_warning_without_request() {
    let mut app = offline_app();
    let mut view = LoginView::new();

    let notice = view.submit(&mut app, "alice", "   ").await.unwrap();

    assert!(notice.is_failure());
    assert_eq!(notice.message, "Please enter username and password");
    assert_eq!(view.state(), &RequestState::Idle);
    assert!(!app.session.is_authenticated());
}

#[tokio::test]
async fn given_blank_username_when_submit_then_warning() {
    let mut app = offline_app();
    let mut view = LoginView::new();

    let notice = view.submit(&mut app, "", "pw").await.unwrap();

    assert!(notice.is_failure());
}
