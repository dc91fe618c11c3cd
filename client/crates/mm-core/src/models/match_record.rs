use crate::{Candidate, UserId};

use serde::{Deserialize, Serialize};

/// A mutual pairing computed by the server from reciprocal likes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "userA", alias = "user_a")]
    pub user_a: MatchParty,
    #[serde(rename = "userB", alias = "user_b")]
    pub user_b: MatchParty,
}

/// One side of a match. Depending on the endpoint the server either embeds the
/// user record or returns only its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchParty {
    Profile(Box<Candidate>),
    Id(UserId),
}

impl MatchParty {
    pub fn id(&self) -> &UserId {
        match self {
            Self::Profile(candidate) => &candidate.id,
            Self::Id(id) => id,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Profile(candidate) => candidate.display_name().to_string(),
            Self::Id(id) => format!("#{id}"),
        }
    }
}

impl MatchRecord {
    /// Whether the given user is one of the two parties.
    pub fn involves(&self, id: &UserId) -> bool {
        self.user_a.id() == id || self.user_b.id() == id
    }
}
