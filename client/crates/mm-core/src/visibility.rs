//! Which candidates a viewer is allowed to browse.

use crate::{Candidate, Identity, Role};

/// Filters `candidates` for `viewer`.
///
/// - no viewer: nothing is visible
/// - admins are never listed, whoever is looking
/// - members only see the complementary gender; a member without a declared
///   gender has no complement and sees nobody
/// - other roles see every non-admin candidate
///
/// Input order is preserved and the input is left untouched.
pub fn visible_candidates(viewer: Option<&Identity>, candidates: &[Candidate]) -> Vec<Candidate> {
    let Some(viewer) = viewer else {
        return Vec::new();
    };

    let non_admin = candidates.iter().filter(|candidate| !candidate.is_admin());

    match viewer.role {
        Role::Member => {
            let Some(target) = viewer.gender.map(|gender| gender.complement()) else {
                return Vec::new();
            };
            non_admin
                .filter(|candidate| candidate.gender == Some(target))
                .cloned()
                .collect()
        }
        Role::Admin | Role::Developer => non_admin.cloned().collect(),
    }
}
