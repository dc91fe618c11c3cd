use crate::routes::landing_for;
use crate::{App, Notice};

use mm_core::{Identity, RequestState, ViewState};
use mm_session::KeyValueStore;

use log::{debug, warn};

const MISSING_CREDENTIALS: &str = "Please enter username and password";

#[derive(Debug, Default)]
pub struct LoginView {
    state: ViewState<Identity>,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<Identity> {
        self.state.state()
    }

    pub fn leave(&mut self) {
        self.state.leave();
    }

    /// Authenticates against the API and starts a session on success.
    ///
    /// Blank credentials are rejected before any request is made. A result
    /// arriving after the view was left is discarded and returns `None`.
    pub async fn submit<S: KeyValueStore>(
        &mut self,
        app: &mut App<S>,
        username: &str,
        password: &str,
    ) -> Option<Notice> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Some(Notice::warning(MISSING_CREDENTIALS));
        }

        let ticket = self.state.begin();
        let result = app.api().login(username, password).await;

        let identity = match result {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Login failed for {}: {e}", username.trim());
                let message = e.user_message();
                if !self.state.complete(ticket, Err(message.clone())) {
                    debug!("Login view left before the response arrived");
                    return None;
                }
                return Some(Notice::error(message));
            }
        };

        if !self.state.is_active() {
            debug!("Login view left before the response arrived");
            return None;
        }

        if let Err(e) = app.session.login(identity.clone()) {
            warn!("Rejected login payload: {e}");
            let message = mm_api::GENERIC_FAILURE_MESSAGE.to_string();
            self.state.complete(ticket, Err(message.clone()));
            return Some(Notice::error(message));
        }

        let greeting = format!("Welcome, {}!", identity.display_name());
        let landing = landing_for(identity.role);
        self.state.complete(ticket, Ok(identity));
        app.navigate(landing);

        Some(Notice::success(greeting))
    }
}
