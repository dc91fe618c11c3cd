use crate::cli::{Commands, MatchesCommands, MemberArgs, MembersCommands};
use crate::routes::Route;
use crate::views::{BrowseView, LoginView, MatchesView, MembersView};
use crate::{App, AppErrorResult, Notice};

use mm_api::MemberForm;
use mm_core::UserId;
use mm_session::KeyValueStore;

use std::process::ExitCode;

use serde::Serialize;
use serde_json::{Value, json};

/// Result of one command: an optional notice for the user and optional data.
#[derive(Debug, Default, Serialize)]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Output {
    pub fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            data: None,
        }
    }

    pub fn data(data: impl Serialize) -> AppErrorResult<Self> {
        Ok(Self {
            notice: None,
            data: Some(serde_json::to_value(data)?),
        })
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }

    /// Notices go to stderr, data to stdout as JSON.
    pub fn print(&self, pretty: bool) -> AppErrorResult<ExitCode> {
        if let Some(ref notice) = self.notice {
            eprintln!("{notice}");
        }

        if let Some(ref data) = self.data {
            let json = if pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            println!("{json}");
        }

        Ok(if self.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }

    pub fn is_failure(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_failure)
    }
}

/// Runs one command against the app.
pub async fn execute<S: KeyValueStore>(
    command: Commands,
    app: &mut App<S>,
) -> AppErrorResult<Output> {
    match command {
        Commands::Login { username, password } => login(app, &username, &password).await,
        Commands::Logout => {
            app.session.logout();
            app.navigate(Route::Login);
            Ok(Output::notice(Notice::info("Logged out.")))
        }
        Commands::Whoami => match app.identity() {
            Some(identity) => Output::data(json!({
                "identity": identity,
                "route": app.route(),
            })),
            None => Ok(Output::notice(Notice::info("Not logged in."))),
        },
        Commands::People => people(app).await,
        Commands::Select { id } => select(app, &id).await,
        Commands::Selection => {
            if let Err(denied) = enter(app, Route::MatchMaking) {
                return Ok(denied);
            }
            let mut view = BrowseView::open(app);
            Ok(Output::data(view.selection())?.with_notice(view.take_notice()))
        }
        Commands::Submit => submit(app).await,
        Commands::Matches { action } => matches(app, action).await,
        Commands::Members { action } => members(app, action).await,
    }
}

/// Navigates to `route`, or explains why the viewer was turned away.
fn enter<S: KeyValueStore>(app: &mut App<S>, route: Route) -> Result<(), Output> {
    if app.navigate(route) {
        return Ok(());
    }
    let notice = match app.route() {
        Route::Login => Notice::warning("Please log in first."),
        _ => Notice::warning("You don't have access to that page."),
    };
    Err(Output::notice(notice))
}

async fn login<S: KeyValueStore>(
    app: &mut App<S>,
    username: &str,
    password: &str,
) -> AppErrorResult<Output> {
    let mut view = LoginView::new();
    let notice = view.submit(app, username, password).await;

    match app.identity() {
        Some(identity) if notice.as_ref().is_some_and(|n| !n.is_failure()) => {
            Ok(Output::data(json!({
                "identity": identity,
                "route": app.route(),
            }))?
            .with_notice(notice))
        }
        _ => Ok(Output::default().with_notice(notice)),
    }
}

async fn people<S: KeyValueStore>(app: &mut App<S>) -> AppErrorResult<Output> {
    if let Err(denied) = enter(app, Route::MatchMaking) {
        return Ok(denied);
    }

    let mut view = BrowseView::open(app);
    if let Some(failure) = view.load(app).await {
        return Ok(Output::notice(failure));
    }

    Ok(Output::data(json!({
        "people": view.visible(app),
        "selected": view.selection().ids(),
        "capacity": view.selection().capacity(),
    }))?
    .with_notice(view.take_notice()))
}

async fn select<S: KeyValueStore>(app: &mut App<S>, id: &UserId) -> AppErrorResult<Output> {
    if let Err(denied) = enter(app, Route::MatchMaking) {
        return Ok(denied);
    }

    let mut view = BrowseView::open(app);
    if let Some(failure) = view.load(app).await {
        return Ok(Output::notice(failure));
    }

    let toggled = view.toggle(app, id);
    let notice = match view.take_notice() {
        Some(restored) => Notice::new(
            toggled.level,
            format!("{} {}", restored.message, toggled.message),
        ),
        None => toggled,
    };
    Ok(Output::data(view.selection())?.with_notice(Some(notice)))
}

async fn submit<S: KeyValueStore>(app: &mut App<S>) -> AppErrorResult<Output> {
    if let Err(denied) = enter(app, Route::MatchMaking) {
        return Ok(denied);
    }

    let mut view = BrowseView::open(app);
    match view.submit(app).await {
        Some(notice) if notice.is_failure() => Ok(Output::notice(notice)),
        Some(notice) => Ok(Output::data(json!({ "route": app.route() }))?.with_notice(Some(notice))),
        None => Ok(Output::notice(Notice::info("Nothing selected yet."))),
    }
}

async fn matches<S: KeyValueStore>(
    app: &mut App<S>,
    action: MatchesCommands,
) -> AppErrorResult<Output> {
    if let Err(denied) = enter(app, Route::Matches) {
        return Ok(denied);
    }

    let mut view = MatchesView::new();
    let notice = match action {
        MatchesCommands::List => {
            if let Some(failure) = view.load(app).await {
                return Ok(Output::notice(failure));
            }
            None
        }
        MatchesCommands::Generate => Some(view.generate(app).await),
        MatchesCommands::Clear { yes } => return Ok(Output::notice(view.clear(app, yes).await)),
    };

    match view.state().data() {
        Some(list) => Ok(Output::data(list)?.with_notice(notice)),
        None => Ok(Output::default().with_notice(notice)),
    }
}

async fn members<S: KeyValueStore>(
    app: &mut App<S>,
    action: MembersCommands,
) -> AppErrorResult<Output> {
    let route = match action {
        MembersCommands::Add { .. } => Route::AddMember,
        MembersCommands::Edit { ref id, .. } => Route::EditMember(id.clone()),
        MembersCommands::List | MembersCommands::Info { .. } | MembersCommands::Delete { .. } => {
            Route::Members
        }
    };
    if let Err(denied) = enter(app, route) {
        return Ok(denied);
    }

    let mut view = MembersView::new();
    match action {
        MembersCommands::List => {
            if let Some(failure) = view.load(app).await {
                return Ok(Output::notice(failure));
            }
            match view.state().data() {
                Some(members) => Output::data(members),
                None => Ok(Output::default()),
            }
        }
        MembersCommands::Info { id } => match view.info(app, &id).await {
            Ok(member) => Output::data(member),
            Err(notice) => Ok(Output::notice(notice)),
        },
        MembersCommands::Add { fields } => {
            let form = match filled_form(MemberForm::default(), fields) {
                Ok(form) => form,
                Err(notice) => return Ok(Output::notice(notice)),
            };
            Ok(Output::notice(view.add(app, &form).await))
        }
        MembersCommands::Edit { id, fields, yes } => {
            let stored = match view.edit_form(app, &id).await {
                Ok(form) => form,
                Err(notice) => return Ok(Output::notice(notice)),
            };
            let form = match filled_form(stored, fields) {
                Ok(form) => form,
                Err(notice) => return Ok(Output::notice(notice)),
            };
            Ok(Output::notice(view.update(app, &id, &form, yes).await))
        }
        MembersCommands::Delete { id, yes } => {
            Ok(Output::notice(view.delete(app, &id, yes).await))
        }
    }
}

fn filled_form(mut form: MemberForm, fields: MemberArgs) -> Result<MemberForm, Notice> {
    fields.apply(&mut form)?;
    Ok(form)
}
