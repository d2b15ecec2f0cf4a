//! User record.
//!
//! # Invariants
//! - `joined_communities` has set semantics: no duplicates, insertion order
//!   kept for display.
//! - Every id in `joined_communities` mirrors a `members` entry on the
//!   matching community.

use crate::model::ids::{CommunityId, UserId};
use serde::{Deserialize, Serialize};

/// A platform user. Users are created by the seed and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub display_name: String,
    /// Contact handle, either `@handle` or an email address.
    pub handle: String,
    /// Avatar image reference (URL or asset path).
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Unix epoch milliseconds the account was created.
    pub joined_at: i64,
    #[serde(default)]
    pub joined_communities: Vec<CommunityId>,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        display_name: impl Into<String>,
        handle: impl Into<String>,
        joined_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            handle: handle.into(),
            avatar: None,
            bio: None,
            location: None,
            joined_at,
            joined_communities: Vec::new(),
        }
    }

    pub fn has_joined(&self, community_id: &CommunityId) -> bool {
        self.joined_communities.contains(community_id)
    }

    /// Records a joined community. Returns `false` when already present.
    pub fn record_join(&mut self, community_id: &CommunityId) -> bool {
        if self.has_joined(community_id) {
            return false;
        }
        self.joined_communities.push(community_id.clone());
        true
    }
}
