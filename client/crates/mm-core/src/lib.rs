pub mod error;
pub mod models;
pub mod request_state;
pub mod selection;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreErrorResult};
pub use models::candidate::Candidate;
pub use models::gender::Gender;
pub use models::identity::{Identity, SECRET_FIELDS};
pub use models::like_record::{LikeBatch, LikeRecord};
pub use models::match_record::{MatchParty, MatchRecord};
pub use models::role::Role;
pub use models::user_id::UserId;
pub use request_state::{RequestState, RequestTicket, ViewState};
pub use selection::{Selection, ToggleOutcome};
pub use visibility::visible_candidates;
