use crate::{App, Notice};

use mm_config::MatchesMode;
use mm_core::{Candidate, MatchRecord, RequestState, RequestTicket, ViewState};
use mm_session::KeyValueStore;

use log::{debug, info, warn};
use serde::Serialize;

const ELEVATED_ONLY: &str = "Only admins and developers can manage matches.";

/// What the matches screen shows, depending on the configured mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "entries", rename_all = "lowercase")]
pub enum MatchList {
    /// Server-confirmed pairs
    Mutual(Vec<MatchRecord>),
    /// Likes this client has sent and not yet seen answered
    Pending(Vec<Candidate>),
}

impl MatchList {
    pub fn len(&self) -> usize {
        match self {
            Self::Mutual(records) => records.len(),
            Self::Pending(candidates) => candidates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct MatchesView {
    state: ViewState<MatchList>,
}

impl MatchesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<MatchList> {
        self.state.state()
    }

    pub fn leave(&mut self) {
        self.state.leave();
    }

    pub fn begin_load(&mut self) -> RequestTicket {
        self.state.begin()
    }

    /// Applies a load result. Stale or after-leave results are dropped.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<MatchList, String>,
    ) -> Option<Notice> {
        let failure = result.as_ref().err().cloned();
        if !self.state.complete(ticket, result) {
            debug!("Dropped matches that arrived for an inactive request");
            return None;
        }
        failure.map(Notice::error)
    }

    /// Loads the list for the configured mode.
    ///
    /// In mutual mode a plain member only sees pairs they are part of; elevated
    /// roles see every pair.
    pub async fn load<S: KeyValueStore>(&mut self, app: &App<S>) -> Option<Notice> {
        let ticket = self.begin_load();

        let result = match app.matches_mode() {
            MatchesMode::Pending => Ok(MatchList::Pending(app.session.pending_likes())),
            MatchesMode::Mutual => match app.api().list_matches().await {
                Ok(records) => Ok(MatchList::Mutual(own_matches(app, records))),
                Err(e) => {
                    warn!("Failed to load matches: {e}");
                    Err(e.user_message())
                }
            },
        };

        self.finish_load(ticket, result)
    }

    /// Asks the server to recompute matches, then reloads the list.
    pub async fn generate<S: KeyValueStore>(&mut self, app: &App<S>) -> Notice {
        if !may_manage(app) {
            return Notice::warning(ELEVATED_ONLY);
        }

        if let Err(e) = app.api().generate_matches().await {
            warn!("Generating matches failed: {e}");
            return Notice::error(e.user_message());
        }

        info!("Matches generated");
        match self.load(app).await {
            Some(failure) => failure,
            None => Notice::success("Matches generated."),
        }
    }

    /// Deletes every match and every like on the server, then the locally kept
    /// pending likes.
    ///
    /// In pending mode any signed-in viewer may clear their own local list;
    /// only elevated roles also wipe the server.
    pub async fn clear<S: KeyValueStore>(&mut self, app: &mut App<S>, confirmed: bool) -> Notice {
        if app.identity().is_none() {
            return Notice::warning("Please log in first.");
        }

        let wipe_server = may_manage(app);
        if !wipe_server && app.matches_mode() != MatchesMode::Pending {
            return Notice::warning(ELEVATED_ONLY);
        }
        if !confirmed {
            return Notice::warning(if wipe_server {
                "This deletes every match and like for everyone. Re-run with --yes to confirm."
            } else {
                "This clears your pending likes. Re-run with --yes to confirm."
            });
        }

        if wipe_server {
            let api = app.api();
            if let Err(e) = api.delete_all_matches().await {
                warn!("Deleting matches failed: {e}");
                return Notice::error(e.user_message());
            }
            if let Err(e) = api.delete_all_likes().await {
                warn!("Deleting likes failed: {e}");
                return Notice::error(e.user_message());
            }
            info!("All matches and likes deleted");
        }

        app.session.clear_pending_likes();
        if let Some(list) = self.state.data_mut() {
            *list = match list {
                MatchList::Mutual(_) => MatchList::Mutual(Vec::new()),
                MatchList::Pending(_) => MatchList::Pending(Vec::new()),
            };
        }

        if wipe_server {
            Notice::success("All matches and likes were deleted.")
        } else {
            Notice::success("Your pending likes were cleared.")
        }
    }
}

fn may_manage<S: KeyValueStore>(app: &App<S>) -> bool {
    app.role().is_some_and(|role| role.can_manage_matches())
}

fn own_matches<S: KeyValueStore>(app: &App<S>, records: Vec<MatchRecord>) -> Vec<MatchRecord> {
    match app.identity() {
        Some(identity) if !identity.role.can_manage_matches() => records
            .into_iter()
            .filter(|record| record.involves(&identity.id))
            .collect(),
        _ => records,
    }
}
