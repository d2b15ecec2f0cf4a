//! Domain store: the single owner of the community graph.
//!
//! # Responsibility
//! - Load and validate seed data into the first snapshot.
//! - Apply create-post, toggle-like, add-comment, create-event,
//!   join-community and profile-update intents.
//! - Publish each result as a new `Arc<Snapshot>` sharing untouched branches.
//!
//! # Invariants
//! - Every intent validates fully before the first write, so a rejected
//!   intent never leaves a partial change.
//! - Join keeps `Community::members` and `User::joined_communities` in sync.
//! - Author/organizer ids come from the current session user, who always
//!   exists in the user directory.

use crate::config::StoreConfig;
use crate::model::community::{Comment, Community, Event, LikeState, Post};
use crate::model::ids::{CommentId, CommunityId, EventId, PostId, UserId};
use crate::model::snapshot::Snapshot;
use crate::model::user::User;
use crate::seed::{validate_seed, SeedError, SeedSource};
use crate::store::clock::{Clock, SystemClock};
use crate::store::id_gen::{IdGenerator, IdKind};
use crate::store::input::{
    is_valid_handle, normalize_optional_text, normalize_required_text, parse_event_date,
    TextRejection,
};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type StoreResult<T> = Result<T, StoreError>;

/// Why an intent was rejected. The snapshot is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Post or comment text is blank after trim.
    EmptyContent,
    /// Event title is blank after trim.
    EmptyTitle,
    /// Profile display name is blank after trim.
    EmptyDisplayName,
    /// Contact handle is neither `@name` nor an email address.
    InvalidHandle(String),
    /// Text exceeds the configured character limit.
    TextTooLong { max_chars: usize },
    /// Event date matches none of the accepted formats.
    InvalidDate(String),
    /// Intent needs an acting user but nobody is signed in.
    NoCurrentUser,
    CommunityNotFound(CommunityId),
    PostNotFound {
        community_id: CommunityId,
        post_id: PostId,
    },
    UserNotFound(UserId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "content must not be blank"),
            Self::EmptyTitle => write!(f, "event title must not be blank"),
            Self::EmptyDisplayName => write!(f, "display name must not be blank"),
            Self::InvalidHandle(value) => write!(f, "invalid contact handle: `{value}`"),
            Self::TextTooLong { max_chars } => {
                write!(f, "text exceeds the {max_chars} character limit")
            }
            Self::InvalidDate(value) => write!(f, "unrecognized event date: `{value}`"),
            Self::NoCurrentUser => write!(f, "no current user is signed in"),
            Self::CommunityNotFound(id) => write!(f, "community not found: {id}"),
            Self::PostNotFound {
                community_id,
                post_id,
            } => write!(f, "post {post_id} not found in community {community_id}"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Outcome of a join intent. Joining twice is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyMember,
}

/// Request model for creating a community event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    /// Raw date input, see [`crate::store::input::parse_event_date`].
    pub date: String,
    pub location: Option<String>,
}

impl CreateEventRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Request model for replacing the current user's editable profile fields.
///
/// Blank `bio`/`location` clear the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateProfileRequest {
    pub display_name: String,
    pub handle: String,
    pub bio: String,
    pub location: String,
}

impl UpdateProfileRequest {
    /// Prefills the form from an existing profile.
    pub fn from_user(user: &User) -> Self {
        Self {
            display_name: user.display_name.clone(),
            handle: user.handle.clone(),
            bio: user.bio.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
        }
    }
}

/// In-memory store owning the current snapshot.
pub struct DomainStore<C: Clock = SystemClock> {
    snapshot: Arc<Snapshot>,
    config: StoreConfig,
    ids: IdGenerator,
    clock: C,
}

impl DomainStore<SystemClock> {
    /// Builds a store from a seed source using the wall clock.
    pub fn from_seed<S: SeedSource + ?Sized>(
        source: &S,
        config: StoreConfig,
    ) -> Result<Self, SeedError> {
        Self::from_seed_with_clock(source, config, SystemClock)
    }
}

impl<C: Clock> DomainStore<C> {
    /// Builds a store from a seed source and an explicit clock.
    ///
    /// # Errors
    /// - Returns the source's load error unchanged.
    /// - Returns a validation error when the seed breaks graph invariants.
    pub fn from_seed_with_clock<S: SeedSource + ?Sized>(
        source: &S,
        config: StoreConfig,
        clock: C,
    ) -> Result<Self, SeedError> {
        let seed = source.load()?;
        validate_seed(&seed)?;
        let snapshot = seed.into_snapshot();

        info!(
            "event=seed_load module=store status=ok source={} users={} communities={}",
            source.name(),
            snapshot.users.len(),
            snapshot.communities.len()
        );

        Ok(Self {
            snapshot: Arc::new(snapshot),
            ids: IdGenerator::new(config.id_strategy),
            config,
            clock,
        })
    }

    /// Current snapshot. Holding it does not block later mutations.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Switches the session user.
    pub fn sign_in(&mut self, user_id: &UserId) -> StoreResult<()> {
        if self.snapshot.user_index(user_id).is_none() {
            return Err(StoreError::UserNotFound(user_id.clone()));
        }
        Arc::make_mut(&mut self.snapshot).current_user = Some(user_id.clone());
        debug!("event=session_switch module=store status=ok user_id={user_id}");
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if self.snapshot.current_user.is_some() {
            Arc::make_mut(&mut self.snapshot).current_user = None;
            debug!("event=session_clear module=store status=ok");
        }
    }

    /// Appends a post by the current user to a community.
    pub fn create_post(
        &mut self,
        community_id: &CommunityId,
        content: &str,
    ) -> StoreResult<Arc<Post>> {
        let content = self.required_text(content, StoreError::EmptyContent)?;
        let author_id = self.current_user_id()?;
        let index = self.community_index(community_id)?;

        let snapshot = &self.snapshot;
        let id = self
            .ids
            .next(IdKind::Post, |candidate| snapshot.contains_post_id(candidate));
        let post = Arc::new(Post::new(
            PostId::new(id),
            author_id,
            content,
            self.clock.now_epoch_ms(),
        ));

        self.community_mut(index).posts.push(Arc::clone(&post));
        info!(
            "event=post_create module=store status=ok community_id={} post_id={}",
            community_id, post.id
        );
        Ok(post)
    }

    /// Flips `user_id`'s like on a post.
    pub fn toggle_like(
        &mut self,
        community_id: &CommunityId,
        post_id: &PostId,
        user_id: &UserId,
    ) -> StoreResult<LikeState> {
        let (community_index, post_index) = self.post_index(community_id, post_id)?;
        if self.snapshot.user_index(user_id).is_none() {
            return Err(StoreError::UserNotFound(user_id.clone()));
        }

        let community = self.community_mut(community_index);
        let state = Arc::make_mut(&mut community.posts[post_index]).toggle_like(user_id);
        info!(
            "event=post_like module=store status=ok community_id={} post_id={} state={:?}",
            community_id, post_id, state
        );
        Ok(state)
    }

    /// Appends a comment by the current user to a post.
    pub fn add_comment(
        &mut self,
        community_id: &CommunityId,
        post_id: &PostId,
        content: &str,
    ) -> StoreResult<Comment> {
        let content = self.required_text(content, StoreError::EmptyContent)?;
        let author_id = self.current_user_id()?;
        let (community_index, post_index) = self.post_index(community_id, post_id)?;

        let snapshot = &self.snapshot;
        let id = self.ids.next(IdKind::Comment, |candidate| {
            snapshot.contains_comment_id(candidate)
        });
        let comment = Comment {
            id: CommentId::new(id),
            author_id,
            content,
            created_at: self.clock.now_epoch_ms(),
        };

        let community = self.community_mut(community_index);
        Arc::make_mut(&mut community.posts[post_index])
            .comments
            .push(comment.clone());
        info!(
            "event=comment_create module=store status=ok community_id={} post_id={} comment_id={}",
            community_id, post_id, comment.id
        );
        Ok(comment)
    }

    /// Appends an event organized (and attended) by the current user.
    pub fn create_event(
        &mut self,
        community_id: &CommunityId,
        request: &CreateEventRequest,
    ) -> StoreResult<Arc<Event>> {
        let title = self.required_text(&request.title, StoreError::EmptyTitle)?;
        let description = normalize_optional_text(&request.description, self.config.max_text_chars)
            .map_err(|rejection| text_error(rejection, StoreError::EmptyContent))?;
        let scheduled_at = parse_event_date(&request.date)
            .ok_or_else(|| StoreError::InvalidDate(request.date.trim().to_string()))?;
        let location = match request.location.as_deref() {
            Some(raw) => self.optional_text(raw)?,
            None => None,
        };
        let organizer_id = self.current_user_id()?;
        let index = self.community_index(community_id)?;

        let snapshot = &self.snapshot;
        let id = self
            .ids
            .next(IdKind::Event, |candidate| snapshot.contains_event_id(candidate));
        let mut event = Event::new(
            EventId::new(id),
            title,
            description,
            scheduled_at,
            organizer_id,
        );
        event.location = location;
        let event = Arc::new(event);

        self.community_mut(index).events.push(Arc::clone(&event));
        info!(
            "event=event_create module=store status=ok community_id={} event_id={} scheduled_at={}",
            community_id, event.id, event.scheduled_at
        );
        Ok(event)
    }

    /// Adds the membership edge between a user and a community.
    ///
    /// Both directions are written together; a half-present edge is
    /// completed rather than reported as already joined.
    pub fn join_community(
        &mut self,
        community_id: &CommunityId,
        user_id: &UserId,
    ) -> StoreResult<JoinOutcome> {
        let community_index = self.community_index(community_id)?;
        let user_index = self
            .snapshot
            .user_index(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.clone()))?;

        let is_member = self.snapshot.communities[community_index].has_member(user_id);
        let has_joined = self.snapshot.users[user_index].has_joined(community_id);
        if is_member && has_joined {
            return Ok(JoinOutcome::AlreadyMember);
        }

        let snapshot = Arc::make_mut(&mut self.snapshot);
        if !is_member {
            Arc::make_mut(&mut snapshot.communities[community_index]).add_member(user_id);
        }
        if !has_joined {
            Arc::make_mut(&mut snapshot.users[user_index]).record_join(community_id);
        }

        info!(
            "event=community_join module=store status=ok community_id={} user_id={}",
            community_id, user_id
        );
        Ok(JoinOutcome::Joined)
    }

    /// Replaces the current user's display name, handle, bio and location.
    pub fn update_profile(&mut self, request: &UpdateProfileRequest) -> StoreResult<Arc<User>> {
        let display_name =
            self.required_text(&request.display_name, StoreError::EmptyDisplayName)?;
        let handle = request.handle.trim();
        if !is_valid_handle(handle) {
            return Err(StoreError::InvalidHandle(handle.to_string()));
        }
        let bio = self.optional_text(&request.bio)?;
        let location = self.optional_text(&request.location)?;
        let user_id = self.current_user_id()?;
        let index = self
            .snapshot
            .user_index(&user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.clone()))?;

        let snapshot = Arc::make_mut(&mut self.snapshot);
        let user = Arc::make_mut(&mut snapshot.users[index]);
        user.display_name = display_name;
        user.handle = handle.to_string();
        user.bio = bio;
        user.location = location;

        info!("event=profile_update module=store status=ok user_id={user_id}");
        Ok(Arc::clone(&snapshot.users[index]))
    }

    fn required_text(&self, value: &str, empty: StoreError) -> StoreResult<String> {
        normalize_required_text(value, self.config.max_text_chars)
            .map_err(|rejection| text_error(rejection, empty))
    }

    /// Trimmed text, or `None` when blank.
    fn optional_text(&self, value: &str) -> StoreResult<Option<String>> {
        let normalized = normalize_optional_text(value, self.config.max_text_chars)
            .map_err(|rejection| text_error(rejection, StoreError::EmptyContent))?;
        Ok(Some(normalized).filter(|value| !value.is_empty()))
    }

    fn current_user_id(&self) -> StoreResult<UserId> {
        self.snapshot
            .current_user
            .clone()
            .ok_or(StoreError::NoCurrentUser)
    }

    fn community_index(&self, community_id: &CommunityId) -> StoreResult<usize> {
        self.snapshot
            .community_index(community_id)
            .ok_or_else(|| StoreError::CommunityNotFound(community_id.clone()))
    }

    fn post_index(
        &self,
        community_id: &CommunityId,
        post_id: &PostId,
    ) -> StoreResult<(usize, usize)> {
        let community_index = self.community_index(community_id)?;
        let post_index = self.snapshot.communities[community_index]
            .post_index(post_id)
            .ok_or_else(|| StoreError::PostNotFound {
                community_id: community_id.clone(),
                post_id: post_id.clone(),
            })?;
        Ok((community_index, post_index))
    }

    /// Copy-on-write access to one community of the live snapshot.
    fn community_mut(&mut self, index: usize) -> &mut Community {
        let snapshot = Arc::make_mut(&mut self.snapshot);
        Arc::make_mut(&mut snapshot.communities[index])
    }
}

fn text_error(rejection: TextRejection, empty: StoreError) -> StoreError {
    match rejection {
        TextRejection::Empty => empty,
        TextRejection::TooLong { max_chars } => StoreError::TextTooLong { max_chars },
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateEventRequest, DomainStore, JoinOutcome, StoreError};
    use crate::config::{IdStrategy, StoreConfig};
    use crate::model::ids::{CommunityId, UserId};
    use crate::seed::MockSeed;
    use crate::store::clock::FixedClock;
    use std::sync::Arc;

    fn store() -> DomainStore<FixedClock> {
        let config = StoreConfig {
            id_strategy: IdStrategy::Sequential,
            max_text_chars: 20,
        };
        DomainStore::from_seed_with_clock(&MockSeed, config, FixedClock::new(42))
            .expect("mock seed should load")
    }

    #[test]
    fn text_limit_comes_from_config() {
        let mut store = store();
        let err = store
            .create_post(&CommunityId::new("comm1"), "this sentence is far too long")
            .expect_err("over-long post must be rejected");
        assert_eq!(err, StoreError::TextTooLong { max_chars: 20 });
    }

    #[test]
    fn created_entities_use_clock_time() {
        let mut store = store();
        let post = store
            .create_post(&CommunityId::new("comm1"), "hi")
            .expect("post should be created");
        assert_eq!(post.created_at, 42);
    }

    #[test]
    fn blank_location_is_dropped() {
        let mut store = store();
        let event = store
            .create_event(
                &CommunityId::new("comm1"),
                &CreateEventRequest::new("Meetup", "", "2030-01-01").with_location("   "),
            )
            .expect("event should be created");
        assert_eq!(event.location, None);
    }

    #[test]
    fn join_completes_edge_missing_on_community_side() {
        let mut store = store();
        let (comm1, user1) = (CommunityId::new("comm1"), UserId::new("user1"));
        {
            let snapshot = Arc::make_mut(&mut store.snapshot);
            Arc::make_mut(&mut snapshot.communities[0])
                .members
                .retain(|member| member != &user1);
        }

        let outcome = store
            .join_community(&comm1, &user1)
            .expect("join should succeed");

        assert_eq!(outcome, JoinOutcome::Joined);
        let snapshot = store.snapshot();
        let react = snapshot.community(&comm1).expect("comm1 exists");
        let jordan = snapshot.user(&user1).expect("user1 exists");
        assert_eq!(react.members.iter().filter(|m| *m == &user1).count(), 1);
        assert_eq!(
            jordan.joined_communities.iter().filter(|c| *c == &comm1).count(),
            1
        );
    }

    #[test]
    fn join_completes_edge_missing_on_user_side() {
        let mut store = store();
        let (comm1, user1) = (CommunityId::new("comm1"), UserId::new("user1"));
        {
            let snapshot = Arc::make_mut(&mut store.snapshot);
            Arc::make_mut(&mut snapshot.users[0]).joined_communities.clear();
        }

        let outcome = store
            .join_community(&comm1, &user1)
            .expect("join should succeed");

        assert_eq!(outcome, JoinOutcome::Joined);
        let snapshot = store.snapshot();
        let react = snapshot.community(&comm1).expect("comm1 exists");
        let jordan = snapshot.user(&user1).expect("user1 exists");
        assert_eq!(react.members.iter().filter(|m| *m == &user1).count(), 1);
        assert_eq!(jordan.joined_communities, vec![comm1.clone()]);
    }
}
