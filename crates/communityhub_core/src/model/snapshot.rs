//! Read-only view of the whole domain graph.
//!
//! # Responsibility
//! - Hold users, communities and the current session user.
//! - Resolve id-based links (author, organizer, joined community) on demand.
//!
//! # Invariants
//! - A published snapshot is never mutated; the store clones-on-write.
//! - Unresolvable ids yield `None` instead of panicking.

use crate::model::community::{Community, Post};
use crate::model::ids::{CommunityId, PostId, UserId};
use crate::model::user::User;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Complete domain state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session user acting on create/comment/event intents.
    pub current_user: Option<UserId>,
    pub users: Vec<Arc<User>>,
    pub communities: Vec<Arc<Community>>,
}

impl Snapshot {
    pub fn user(&self, user_id: &UserId) -> Option<&User> {
        self.users
            .iter()
            .find(|user| &user.id == user_id)
            .map(Arc::as_ref)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user
            .as_ref()
            .and_then(|user_id| self.user(user_id))
    }

    pub fn community(&self, community_id: &CommunityId) -> Option<&Community> {
        self.communities
            .iter()
            .find(|community| &community.id == community_id)
            .map(Arc::as_ref)
    }

    pub fn post(&self, community_id: &CommunityId, post_id: &PostId) -> Option<&Post> {
        self.community(community_id)
            .and_then(|community| community.post(post_id))
    }

    /// Display name for an author/organizer id, if the user is still known.
    pub fn author_name(&self, user_id: &UserId) -> Option<&str> {
        self.user(user_id).map(|user| user.display_name.as_str())
    }

    /// Communities the user has joined, in join order. Stale ids are skipped.
    pub fn joined_communities(&self, user_id: &UserId) -> Vec<&Community> {
        self.user(user_id)
            .map(|user| {
                user.joined_communities
                    .iter()
                    .filter_map(|community_id| self.community(community_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn community_index(&self, community_id: &CommunityId) -> Option<usize> {
        self.communities
            .iter()
            .position(|community| &community.id == community_id)
    }

    pub(crate) fn user_index(&self, user_id: &UserId) -> Option<usize> {
        self.users.iter().position(|user| &user.id == user_id)
    }

    pub(crate) fn contains_post_id(&self, candidate: &str) -> bool {
        self.communities
            .iter()
            .flat_map(|community| community.posts.iter())
            .any(|post| post.id == candidate)
    }

    pub(crate) fn contains_comment_id(&self, candidate: &str) -> bool {
        self.communities
            .iter()
            .flat_map(|community| community.posts.iter())
            .flat_map(|post| post.comments.iter())
            .any(|comment| comment.id == candidate)
    }

    pub(crate) fn contains_event_id(&self, candidate: &str) -> bool {
        self.communities
            .iter()
            .flat_map(|community| community.events.iter())
            .any(|event| event.id == candidate)
    }
}
