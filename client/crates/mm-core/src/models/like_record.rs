use crate::{Selection, UserId};

use serde::{Deserialize, Serialize};

/// One-directional expression of interest from the requester toward a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub requester_id: UserId,
    pub liked_id: UserId,
}

impl LikeRecord {
    /// One record per selected candidate, in selection order.
    pub fn from_selection(requester_id: &UserId, selection: &Selection) -> Vec<LikeRecord> {
        selection
            .iter()
            .map(|candidate| LikeRecord {
                requester_id: requester_id.clone(),
                liked_id: candidate.id.clone(),
            })
            .collect()
    }
}

/// Wire body for a batch like submission.
///
/// The requester travels in the `x-user` header, so only the liked ids are
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeBatch {
    #[serde(skip)]
    pub requester_id: UserId,
    pub matches: Vec<UserId>,
}

impl LikeBatch {
    /// Returns `None` for an empty record list; there is nothing to submit.
    pub fn from_records(records: &[LikeRecord]) -> Option<Self> {
        let first = records.first()?;
        Some(Self {
            requester_id: first.requester_id.clone(),
            matches: records.iter().map(|r| r.liked_id.clone()).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
