//! Navigation targets and the guard that decides who may open them.

use mm_core::{Identity, Role, UserId};

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    MatchMaking,
    Matches,
    Members,
    AddMember,
    EditMember(UserId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::MatchMaking => "/matchmaking".to_string(),
            Self::Matches => "/matches".to_string(),
            Self::Members => "/members".to_string(),
            Self::AddMember => "/members/add".to_string(),
            Self::EditMember(id) => format!("/members/{id}/edit"),
        }
    }

    /// Whether a viewer with `role` may open this route.
    pub fn allows(&self, role: Role) -> bool {
        match self {
            Self::Login | Self::MatchMaking | Self::Matches => true,
            Self::Members | Self::AddMember | Self::EditMember(_) => role.can_manage_members(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

/// Where a freshly logged-in user lands.
pub fn landing_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::Members,
        Role::Member | Role::Developer => Route::MatchMaking,
    }
}

/// Resolves the route the viewer actually ends up on when asking for `requested`.
///
/// Anonymous viewers always end up on `Login`. Logged-in viewers asking for
/// `Login`, or for a route their role may not open, are sent to their landing
/// route.
pub fn guard(requested: &Route, identity: Option<&Identity>) -> Route {
    let Some(identity) = identity else {
        return Route::Login;
    };

    if *requested == Route::Login || !requested.allows(identity.role) {
        return landing_for(identity.role);
    }

    requested.clone()
}
