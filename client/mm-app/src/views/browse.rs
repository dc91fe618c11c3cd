use crate::routes::Route;
use crate::{App, Notice};

use mm_core::{
    Candidate, LikeBatch, LikeRecord, RequestState, RequestTicket, Selection, ToggleOutcome,
    UserId, ViewState, visible_candidates,
};
use mm_session::KeyValueStore;

use log::{debug, info, warn};

/// The match-making screen: browse visible candidates, pick up to the
/// configured number and send them as likes.
#[derive(Debug)]
pub struct BrowseView {
    candidates: ViewState<Vec<Candidate>>,
    selection: Selection,
    restored: Option<Notice>,
}

impl BrowseView {
    /// Opens the view with the selection persisted by an earlier visit.
    ///
    /// A stored selection larger than the current capacity is cut down to
    /// its first entries; [`BrowseView::take_notice`] then tells the user.
    pub fn open<S: KeyValueStore>(app: &App<S>) -> Self {
        let capacity = app.capacity();
        let (selection, dropped) = app.session.load_selection_bounded(capacity);
        let restored = (dropped > 0).then(|| {
            Notice::info(format!(
                "Your saved selection was over the limit of {capacity}; {dropped} {} dropped.",
                if dropped == 1 { "person was" } else { "people were" }
            ))
        });

        Self {
            candidates: ViewState::new(),
            selection,
            restored,
        }
    }

    /// The notice raised while opening the view, if any. Given out once.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.restored.take()
    }

    pub fn state(&self) -> &RequestState<Vec<Candidate>> {
        self.candidates.state()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn leave(&mut self) {
        self.candidates.leave();
    }

    /// Fetches the directory. Returns a notice only when the fetch failed.
    pub async fn load<S: KeyValueStore>(&mut self, app: &App<S>) -> Option<Notice> {
        let ticket = self.begin_load();
        let result = app.api().list_users().await.map_err(|e| {
            warn!("Failed to load people: {e}");
            e.user_message()
        });
        self.finish_load(ticket, result)
    }

    pub fn begin_load(&mut self) -> RequestTicket {
        self.candidates.begin()
    }

    /// Applies a directory fetch. Stale or after-leave results are dropped.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Candidate>, String>,
    ) -> Option<Notice> {
        let failure = result.as_ref().err().cloned();
        if !self.candidates.complete(ticket, result) {
            debug!("Dropped a people list that arrived for an inactive request");
            return None;
        }
        failure.map(Notice::error)
    }

    /// Candidates the current viewer may pick from, in directory order.
    pub fn visible<S: KeyValueStore>(&self, app: &App<S>) -> Vec<Candidate> {
        let all = self.candidates.data().map(Vec::as_slice).unwrap_or_default();
        visible_candidates(app.identity().as_ref(), all)
    }

    /// Adds or removes a candidate by id and persists the result.
    ///
    /// Members already in the selection can always be removed, even if they
    /// are no longer listed.
    pub fn toggle<S: KeyValueStore>(&mut self, app: &mut App<S>, id: &UserId) -> Notice {
        let candidate = self
            .selection
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .or_else(|| self.visible(app).into_iter().find(|c| &c.id == id));

        let Some(candidate) = candidate else {
            return Notice::warning(format!("No one with id {id} is available to select."));
        };

        let outcome = self.selection.toggle(&candidate);
        match outcome {
            ToggleOutcome::Added => {
                app.session.save_selection(&self.selection);
                Notice::info(format!("Selected {}.", candidate.display_name()))
            }
            ToggleOutcome::Removed => {
                app.session.save_selection(&self.selection);
                Notice::info(format!("Removed {}.", candidate.display_name()))
            }
            ToggleOutcome::Rejected { .. } => {
                Notice::warning(outcome.notice().unwrap_or_default())
            }
        }
    }

    /// Sends the selection as one like batch.
    ///
    /// Returns `None` without touching the network when nobody is logged in
    /// or nothing is selected. On failure the selection is kept as it was.
    pub async fn submit<S: KeyValueStore>(&mut self, app: &mut App<S>) -> Option<Notice> {
        let identity = app.identity()?;
        let records = LikeRecord::from_selection(&identity.id, &self.selection);
        let batch = LikeBatch::from_records(&records)?;

        if let Err(e) = app.api().submit_likes(&batch).await {
            warn!("Submitting {} likes failed: {e}", batch.len());
            return Some(Notice::error(e.user_message()));
        }

        info!("Submitted {} likes for {}", batch.len(), identity.username);
        app.session.record_pending_likes(self.selection.members());
        self.selection.clear();
        app.session.clear_selection();
        app.navigate(Route::Matches);

        Some(Notice::success(format!(
            "Sent {} {}.",
            batch.len(),
            if batch.len() == 1 { "like" } else { "likes" }
        )))
    }
}
