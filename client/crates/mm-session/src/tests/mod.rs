
use mm_core::{Candidate, Gender, Identity, Role};

pub(crate) fn alice() -> Identity {
    let mut identity = Identity::new(1, "alice", Role::Member).with_gender(Gender::Female);
    identity.fullname = Some("Alice Liddell".into());
    identity
        .extra
        .insert("image".into(), serde_json::json!("https://placehold.co/300/png"));
    identity
}

pub(crate) fn candidate(id: i64) -> Candidate {
    Candidate::new(id, format!("user{id}")).with_gender(Gender::Male)
}
