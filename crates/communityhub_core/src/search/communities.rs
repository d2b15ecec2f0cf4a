//! Community browse search and summaries.

use crate::model::community::Community;
use crate::model::ids::CommunityId;
use crate::model::snapshot::Snapshot;
use serde::Serialize;

/// Shown when a community has no description of its own.
pub const DEFAULT_DESCRIPTION: &str = "Join our community today!";

/// Listing-card projection of one community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunitySummary {
    pub id: CommunityId,
    pub name: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub member_count: usize,
    pub event_count: usize,
    pub post_count: usize,
}

impl From<&Community> for CommunitySummary {
    fn from(community: &Community) -> Self {
        let description = if community.description.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            community.description.clone()
        };
        Self {
            id: community.id.clone(),
            name: community.name.clone(),
            description,
            cover_image: community.cover_image.clone(),
            member_count: community.members.len(),
            event_count: community.events.len(),
            post_count: community.posts.len(),
        }
    }
}

/// Case-insensitive substring match on community names.
///
/// A blank query matches every community.
pub fn search_communities(snapshot: &Snapshot, query: &str) -> Vec<CommunitySummary> {
    let needle = query.trim().to_lowercase();
    snapshot
        .communities
        .iter()
        .filter(|community| needle.is_empty() || community.name.to_lowercase().contains(&needle))
        .map(|community| CommunitySummary::from(community.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{search_communities, CommunitySummary, DEFAULT_DESCRIPTION};
    use crate::model::community::Community;
    use crate::model::snapshot::Snapshot;
    use std::sync::Arc;

    fn snapshot() -> Snapshot {
        let mut react = Community::new("comm1", "React Developers");
        react.description = "Hooks and more".to_string();
        Snapshot {
            current_user: None,
            users: Vec::new(),
            communities: vec![
                Arc::new(react),
                Arc::new(Community::new("comm2", "Music Lovers")),
            ],
        }
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let hits = search_communities(&snapshot(), "  REACT ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "comm1");
    }

    #[test]
    fn blank_query_lists_everything_in_order() {
        let hits = search_communities(&snapshot(), "");
        let ids: Vec<&str> = hits.iter().map(|hit| hit.id.as_str()).collect();
        assert_eq!(ids, vec!["comm1", "comm2"]);
    }

    #[test]
    fn summary_falls_back_to_default_description() {
        let summary = CommunitySummary::from(&Community::new("comm9", "Empty"));
        assert_eq!(summary.description, DEFAULT_DESCRIPTION);
        assert_eq!(summary.member_count, 0);
    }
}
