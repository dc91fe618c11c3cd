mod models;

use crate::{Candidate, Gender, Identity, Role};

pub(crate) fn candidate(id: i64, gender: Option<Gender>, role: Option<Role>) -> Candidate {
    Candidate {
        gender,
        role,
        ..Candidate::new(id, format!("user{id}"))
    }
}

pub(crate) fn viewer(role: Role, gender: Option<Gender>) -> Identity {
    Identity {
        gender,
        ..Identity::new(100, "viewer", role)
    }
}
