use crate::Notice;

use mm_api::MemberForm;
use mm_core::{Gender, Role, UserId};

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "matchmaker")]
#[command(about = "Browse people, send likes and see your matches")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and start a session
    Login {
        username: String,

        #[arg(long, short)]
        password: String,
    },

    /// End the session and remove every trace of it
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List the people you can pick from
    People,

    /// Add a person to, or remove them from, your selection
    Select { id: UserId },

    /// Show your current selection
    Selection,

    /// Send your selection as likes
    Submit,

    /// Match operations
    Matches {
        #[command(subcommand)]
        action: MatchesCommands,
    },

    /// Member administration (admins only)
    Members {
        #[command(subcommand)]
        action: MembersCommands,
    },
}

#[derive(Subcommand)]
pub enum MatchesCommands {
    /// List matches
    List,

    /// Recompute matches from everyone's likes
    Generate,

    /// Delete every match and like, or just your own pending likes in pending mode
    Clear {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum MembersCommands {
    /// List every member
    List,

    /// Show one member
    Info { id: UserId },

    /// Add a member
    Add {
        #[command(flatten)]
        fields: MemberArgs,
    },

    /// Edit a member; omitted fields keep their stored value
    Edit {
        id: UserId,

        #[command(flatten)]
        fields: MemberArgs,

        #[arg(long)]
        yes: bool,
    },

    /// Delete a member
    Delete {
        id: UserId,

        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Default)]
pub struct MemberArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub fullname: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub religion: Option<String>,
    /// Male or Female
    #[arg(long)]
    pub gender: Option<String>,
    /// Admin, Member or Developer
    #[arg(long)]
    pub role: Option<String>,
    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl MemberArgs {
    /// Overlays the given fields on `form`.
    pub fn apply(self, form: &mut MemberForm) -> Result<(), Notice> {
        let text_fields = [
            (self.username, &mut form.username),
            (self.password, &mut form.password),
            (self.fullname, &mut form.fullname),
            (self.address, &mut form.address),
            (self.age, &mut form.age),
            (self.religion, &mut form.religion),
            (self.image, &mut form.image),
        ];
        for (value, field) in text_fields {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(gender) = self.gender {
            form.gender = Some(
                gender
                    .parse::<Gender>()
                    .map_err(|_| Notice::warning(format!("Unknown gender '{gender}'.")))?,
            );
        }
        if let Some(role) = self.role {
            form.role = Some(
                role.parse::<Role>()
                    .map_err(|_| Notice::warning(format!("Unknown role '{role}'.")))?,
            );
        }
        Ok(())
    }
}
