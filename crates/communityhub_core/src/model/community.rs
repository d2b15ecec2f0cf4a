//! Community, post, comment and event records.
//!
//! # Responsibility
//! - Define the nested community graph held by a snapshot.
//! - Provide the in-place mutation helpers the store applies after
//!   copy-on-write.
//!
//! # Invariants
//! - `members`, `Post::likes` and `Event::attendees` have set semantics.
//! - `posts`, `events` and `Post::comments` keep insertion order (oldest
//!   first) and only grow.
//! - Posts and events sit behind `Arc` so untouched siblings are shared
//!   between snapshots.

use crate::model::ids::{CommentId, CommunityId, EventId, PostId, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of flipping a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}

/// Immutable comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub content: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// A post inside one community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub content: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Users currently liking this post.
    #[serde(default)]
    pub likes: Vec<UserId>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Creates a post with no likes and no comments.
    pub fn new(
        id: PostId,
        author_id: UserId,
        content: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            author_id,
            content: content.into(),
            created_at,
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.contains(user_id)
    }

    /// Flips `user_id` in the liker set.
    pub fn toggle_like(&mut self, user_id: &UserId) -> LikeState {
        match self.likes.iter().position(|liker| liker == user_id) {
            Some(index) => {
                self.likes.remove(index);
                LikeState::Unliked
            }
            None => {
                self.likes.push(user_id.clone());
                LikeState::Liked
            }
        }
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// A scheduled community event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Unix epoch milliseconds, UTC.
    pub scheduled_at: i64,
    #[serde(default)]
    pub location: Option<String>,
    pub organizer_id: UserId,
    #[serde(default)]
    pub attendees: Vec<UserId>,
}

impl Event {
    /// Creates an event whose organizer is its first attendee.
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        description: impl Into<String>,
        scheduled_at: i64,
        organizer_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            scheduled_at,
            location: None,
            attendees: vec![organizer_id.clone()],
            organizer_id,
        }
    }

    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }
}

/// A community and its nested content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub members: Vec<UserId>,
    #[serde(default)]
    pub posts: Vec<Arc<Post>>,
    #[serde(default)]
    pub events: Vec<Arc<Event>>,
}

impl Community {
    pub fn new(id: impl Into<CommunityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cover_image: None,
            members: Vec::new(),
            posts: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn has_member(&self, user_id: &UserId) -> bool {
        self.members.contains(user_id)
    }

    /// Adds a member. Returns `false` when already present.
    pub fn add_member(&mut self, user_id: &UserId) -> bool {
        if self.has_member(user_id) {
            return false;
        }
        self.members.push(user_id.clone());
        true
    }

    pub fn post(&self, post_id: &PostId) -> Option<&Post> {
        self.posts
            .iter()
            .find(|post| &post.id == post_id)
            .map(Arc::as_ref)
    }

    pub fn event(&self, event_id: &EventId) -> Option<&Event> {
        self.events
            .iter()
            .find(|event| &event.id == event_id)
            .map(Arc::as_ref)
    }

    /// Most recently created post.
    pub fn latest_post(&self) -> Option<&Post> {
        self.posts.last().map(Arc::as_ref)
    }

    /// Feed order used by the single-view layout.
    pub fn posts_newest_first(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().rev().map(Arc::as_ref)
    }

    pub(crate) fn post_index(&self, post_id: &PostId) -> Option<usize> {
        self.posts.iter().position(|post| &post.id == post_id)
    }
}
