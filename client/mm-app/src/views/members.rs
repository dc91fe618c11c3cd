use crate::routes::Route;
use crate::{App, Notice};

use mm_api::MemberForm;
use mm_core::{Candidate, RequestState, UserId, ViewState};
use mm_session::KeyValueStore;

use log::{info, warn};

const ADMIN_ONLY: &str = "Only admins can manage members.";

/// Admin screen for the member directory.
#[derive(Debug, Default)]
pub struct MembersView {
    members: ViewState<Vec<Candidate>>,
}

impl MembersView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<Vec<Candidate>> {
        self.members.state()
    }

    pub fn leave(&mut self) {
        self.members.leave();
    }

    pub async fn load<S: KeyValueStore>(&mut self, app: &App<S>) -> Option<Notice> {
        if !is_admin(app) {
            return Some(Notice::warning(ADMIN_ONLY));
        }

        let ticket = self.members.begin();
        let result = app.api().list_users().await.map_err(|e| {
            warn!("Failed to load members: {e}");
            e.user_message()
        });
        let failure = result.as_ref().err().cloned();
        if !self.members.complete(ticket, result) {
            return None;
        }
        failure.map(Notice::error)
    }

    /// Fetches one member record.
    pub async fn info<S: KeyValueStore>(
        &self,
        app: &App<S>,
        id: &UserId,
    ) -> Result<Candidate, Notice> {
        if !is_admin(app) {
            return Err(Notice::warning(ADMIN_ONLY));
        }
        app.api().get_user(id).await.map_err(|e| {
            warn!("Failed to load member {id}: {e}");
            Notice::error(e.user_message())
        })
    }

    /// The edit form prefilled from the stored record.
    pub async fn edit_form<S: KeyValueStore>(
        &self,
        app: &App<S>,
        id: &UserId,
    ) -> Result<MemberForm, Notice> {
        self.info(app, id)
            .await
            .map(|candidate| MemberForm::from_candidate(&candidate))
    }

    pub async fn add<S: KeyValueStore>(&mut self, app: &mut App<S>, form: &MemberForm) -> Notice {
        if !is_admin(app) {
            return Notice::warning(ADMIN_ONLY);
        }

        match app.api().create_user(form).await {
            Ok(()) => {
                info!("Member {} added", form.username.trim());
                app.navigate(Route::Members);
                Notice::success("Member added successfully!")
            }
            Err(e) => {
                warn!("Adding member failed: {e}");
                Notice::error(e.user_message())
            }
        }
    }

    pub async fn update<S: KeyValueStore>(
        &mut self,
        app: &mut App<S>,
        id: &UserId,
        form: &MemberForm,
        confirmed: bool,
    ) -> Notice {
        if !is_admin(app) {
            return Notice::warning(ADMIN_ONLY);
        }
        if !confirmed {
            return Notice::warning("Save changes to this member? Re-run with --yes to confirm.");
        }

        match app.api().update_user(id, form).await {
            Ok(()) => {
                info!("Member {id} updated");
                app.navigate(Route::Members);
                Notice::success("Member data has been updated.")
            }
            Err(e) => {
                warn!("Updating member {id} failed: {e}");
                Notice::error(e.user_message())
            }
        }
    }

    pub async fn delete<S: KeyValueStore>(
        &mut self,
        app: &App<S>,
        id: &UserId,
        confirmed: bool,
    ) -> Notice {
        if !is_admin(app) {
            return Notice::warning(ADMIN_ONLY);
        }
        if !confirmed {
            return Notice::warning("Deleting a member cannot be undone. Re-run with --yes to confirm.");
        }

        match app.api().delete_user(id).await {
            Ok(()) => {
                info!("Member {id} deleted");
                if let Some(members) = self.members.data_mut() {
                    members.retain(|member| &member.id != id);
                }
                Notice::success("Member deleted.")
            }
            Err(e) => {
                warn!("Deleting member {id} failed: {e}");
                Notice::error(e.user_message())
            }
        }
    }
}

fn is_admin<S: KeyValueStore>(app: &App<S>) -> bool {
    app.role().is_some_and(|role| role.can_manage_members())
}
