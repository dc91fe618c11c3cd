//! Screen controllers. Each view owns its transient request state and acts on
//! the shared [`App`](crate::App) one user action at a time.

pub mod browse;
pub mod login;
pub mod matches;
pub mod members;

pub use browse::BrowseView;
pub use login::LoginView;
pub use matches::{MatchList, MatchesView};
pub use members::MembersView;
