use crate::AppErrorResult;
use crate::routes::{Route, guard, landing_for};

use mm_api::ApiClient;
use mm_config::{Config, MatchesMode};
use mm_core::{Identity, Role};
use mm_session::{KeyValueStore, SessionStore};

use log::debug;

/// Settings the views read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub capacity: usize,
    pub matches_mode: MatchesMode,
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            capacity: config.selection.capacity,
            matches_mode: config.matches.mode,
        }
    }
}

/// Everything a view needs: the session, the API and the current route.
///
/// Views borrow the app for the duration of one action; the app itself is
/// driven from a single task.
pub struct App<S: KeyValueStore> {
    pub session: SessionStore<S>,
    api: ApiClient,
    settings: AppSettings,
    route: Route,
}

impl<S: KeyValueStore> App<S> {
    /// Builds the app and restores any persisted session. A restored viewer
    /// starts on their landing route.
    pub fn new(mut session: SessionStore<S>, api: ApiClient, settings: AppSettings) -> Self {
        let restored = session.restore();
        let route = restored
            .as_ref()
            .map_or(Route::Login, |identity| landing_for(identity.role));

        Self {
            session,
            api,
            settings,
            route,
        }
    }

    pub fn from_config(config: &Config, storage: S) -> AppErrorResult<Self> {
        let api = ApiClient::new(&config.api.base_url, config.api.timeout())?;
        Ok(Self::new(
            SessionStore::new(storage),
            api,
            AppSettings::from(config),
        ))
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Moves to `requested`, subject to the route guard. Returns true when the
    /// viewer ends up on the requested route.
    pub fn navigate(&mut self, requested: Route) -> bool {
        let resolved = guard(&requested, self.session.current().as_ref());
        if resolved != requested {
            debug!("Redirected from {requested} to {resolved}");
        }
        let granted = resolved == requested;
        self.route = resolved;
        granted
    }

    /// API client acting as the current user, anonymous when logged out.
    pub fn api(&self) -> ApiClient {
        match self.session.current() {
            Some(identity) => self.api.for_user(&identity.id),
            None => self.api.clone(),
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.current()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.current().map(|identity| identity.role)
    }

    pub fn capacity(&self) -> usize {
        self.settings.capacity
    }

    pub fn matches_mode(&self) -> MatchesMode {
        self.settings.matches_mode
    }
}
