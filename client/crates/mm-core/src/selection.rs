//! Bounded, duplicate-free set of candidates picked for a like submission.

use crate::{Candidate, UserId};

use serde::Serialize;

/// Result of toggling a candidate in a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The selection is full; nothing changed and the user must be told.
    Rejected { capacity: usize },
}

impl ToggleOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// User-facing notice for a rejected toggle.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Rejected { capacity } => Some(format!(
                "You can only select up to {capacity} {}.",
                if *capacity == 1 { "person" } else { "people" }
            )),
            Self::Added | Self::Removed => None,
        }
    }
}

/// Ordered selection of candidates, unique by id and never above capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    capacity: usize,
    members: Vec<Candidate>,
}

impl Selection {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
        }
    }

    /// Rebuilds a selection from previously stored members.
    ///
    /// Duplicates are dropped and the list is cut to `capacity`, keeping the
    /// earliest picks. Returns the selection and how many members were dropped.
    pub fn from_members(members: Vec<Candidate>, capacity: usize) -> (Self, usize) {
        let total = members.len();
        let mut selection = Self::new(capacity);
        for candidate in members {
            if selection.is_full() {
                break;
            }
            if !selection.contains(&candidate.id) {
                selection.members.push(candidate);
            }
        }
        let dropped = total - selection.len();
        (selection, dropped)
    }

    /// Adds the candidate if absent, removes it if present.
    ///
    /// Presence is decided by id. A full selection rejects additions and is
    /// left unchanged.
    pub fn toggle(&mut self, candidate: &Candidate) -> ToggleOutcome {
        if let Some(index) = self.position(&candidate.id) {
            self.members.remove(index);
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            return ToggleOutcome::Rejected {
                capacity: self.capacity,
            };
        }

        self.members.push(candidate.clone());
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &UserId) -> Option<usize> {
        self.members.iter().position(|member| &member.id == id)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.members.iter()
    }

    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    pub fn ids(&self) -> Vec<UserId> {
        self.members.iter().map(|m| m.id.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
