mod views;

use crate::{App, AppSettings};

use mm_api::ApiClient;
use mm_config::MatchesMode;
use mm_core::{Gender, Identity, Role};
use mm_session::{MemoryStore, SessionStore};

use std::time::Duration;

/// Nothing listens here; tests using it must not reach the network.
pub(crate) const UNROUTABLE: &str = "http://127.0.0.1:9";

pub(crate) fn offline_app() -> App<MemoryStore> {
    App::new(
        SessionStore::new(MemoryStore::new()),
        ApiClient::new(UNROUTABLE, Duration::from_secs(1)).unwrap(),
        AppSettings {
            capacity: 2,
            matches_mode: MatchesMode::Mutual,
        },
    )
}

pub(crate) fn identity(role: Role) -> Identity {
    Identity::new(1, "alice", role).with_gender(Gender::Female)
}

pub(crate) fn logged_in_app(role: Role) -> App<MemoryStore> {
    let mut app = offline_app();
    app.session.login(identity(role)).unwrap();
    app
}
