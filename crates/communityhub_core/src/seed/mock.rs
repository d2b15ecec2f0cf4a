//! Built-in sample data for demos and tests.

use crate::model::community::{Comment, Community, Event, Post};
use crate::model::ids::{CommentId, CommunityId, EventId, PostId, UserId};
use crate::model::user::User;
use crate::seed::{SeedData, SeedError, SeedSource};
use std::sync::Arc;

const HOUR_MS: i64 = 60 * 60 * 1_000;
const DAY_MS: i64 = 24 * HOUR_MS;
/// 2025-05-01T00:00:00Z
const SEED_EPOCH_MS: i64 = 1_746_057_600_000;
/// 2025-01-01T00:00:00Z
const SIGNUP_EPOCH_MS: i64 = 1_735_689_600_000;

/// Fixed sample graph: three users and three communities.
///
/// `user1` is signed in, belongs to `comm1` ("React Developers") only, and
/// `comm1` holds exactly one post (`post1`) nobody has liked yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSeed;

impl SeedSource for MockSeed {
    fn name(&self) -> &str {
        "mock"
    }

    fn load(&self) -> Result<SeedData, SeedError> {
        Ok(mock_seed_data())
    }
}

fn mock_seed_data() -> SeedData {
    let mut jordan = user("user1", "Jordan Lee", "@jordanlee", SIGNUP_EPOCH_MS, &["comm1"]);
    jordan.bio = Some("Tech enthusiast and community builder".to_string());
    jordan.location = Some("San Francisco, CA".to_string());
    let users = vec![
        jordan,
        user(
            "user2",
            "Priya Shah",
            "priya@example.com",
            SIGNUP_EPOCH_MS + 3 * DAY_MS,
            &["comm1", "comm2"],
        ),
        user(
            "user3",
            "Marcus Chen",
            "@marcus",
            SIGNUP_EPOCH_MS + 10 * DAY_MS,
            &["comm2", "comm3"],
        ),
    ];

    let mut react = Community::new("comm1", "React Developers");
    react.description =
        "Hooks, server components and everything else in the React ecosystem.".to_string();
    react.members = ids(&["user1", "user2"]);
    react.posts.push(Arc::new(post(
        "post1",
        "user2",
        "React 19 is out. Has anyone migrated a production app yet?",
        SEED_EPOCH_MS,
        &[],
        vec![comment(
            "comment1",
            "user1",
            "Started last week, the new form actions are great.",
            SEED_EPOCH_MS + HOUR_MS,
        )],
    )));
    react.events.push(Arc::new(event(
        "event1",
        "Next.js Workshop",
        "Hands-on session on the app router.",
        // 2025-05-10T00:00:00Z
        1_746_835_200_000,
        Some("Tech Hub Downtown"),
        "user2",
        &["user2", "user1"],
    )));

    let mut music = Community::new("comm2", "Music Lovers");
    music.description =
        "Share your passion for music, discover new artists, and discuss your favorite albums."
            .to_string();
    music.members = ids(&["user2", "user3"]);
    music.posts.push(Arc::new(post(
        "post2",
        "user3",
        "What's your go-to playlist for productive work sessions?",
        SEED_EPOCH_MS + 2 * HOUR_MS,
        &["user2"],
        vec![comment(
            "comment2",
            "user2",
            "Lo-fi beats never fail!",
            SEED_EPOCH_MS + 3 * HOUR_MS,
        )],
    )));
    music.events.push(Arc::new(event(
        "event2",
        "Summer Music Festival",
        "Open-air afternoon with local bands.",
        // 2025-06-15T00:00:00Z
        1_749_945_600_000,
        Some("Central Park"),
        "user3",
        &["user3", "user2"],
    )));

    let mut tech = Community::new("comm3", "Tech Enthusiasts");
    tech.description =
        "A community for tech lovers to discuss the latest innovations and developments."
            .to_string();
    tech.members = ids(&["user3"]);
    tech.posts.push(Arc::new(post(
        "post3",
        "user3",
        "Which code editor do you folks prefer?",
        SEED_EPOCH_MS + 4 * HOUR_MS,
        &["user3"],
        Vec::new(),
    )));
    tech.posts.push(Arc::new(post(
        "post4",
        "user3",
        "Anyone going to the performance seminar later this month?",
        SEED_EPOCH_MS + 5 * HOUR_MS,
        &[],
        Vec::new(),
    )));
    tech.events.push(Arc::new(event(
        "event3",
        "Web Performance Optimization Seminar",
        "",
        // 2025-05-22T00:00:00Z
        1_747_872_000_000,
        None,
        "user3",
        &["user3"],
    )));

    SeedData {
        current_user: Some(UserId::new("user1")),
        users,
        communities: vec![react, music, tech],
    }
}

fn ids(raw: &[&str]) -> Vec<UserId> {
    raw.iter().map(|id| UserId::new(*id)).collect()
}

fn user(id: &str, display_name: &str, handle: &str, joined_at: i64, joined: &[&str]) -> User {
    let mut user = User::new(id, display_name, handle, joined_at);
    user.avatar = Some(format!("/avatars/{id}.png"));
    user.joined_communities = joined.iter().map(|id| CommunityId::new(*id)).collect();
    user
}

fn post(
    id: &str,
    author: &str,
    content: &str,
    created_at: i64,
    likes: &[&str],
    comments: Vec<Comment>,
) -> Post {
    let mut post = Post::new(PostId::new(id), UserId::new(author), content, created_at);
    post.likes = ids(likes);
    post.comments = comments;
    post
}

fn comment(id: &str, author: &str, content: &str, created_at: i64) -> Comment {
    Comment {
        id: CommentId::new(id),
        author_id: UserId::new(author),
        content: content.to_string(),
        created_at,
    }
}

fn event(
    id: &str,
    title: &str,
    description: &str,
    scheduled_at: i64,
    location: Option<&str>,
    organizer: &str,
    attendees: &[&str],
) -> Event {
    let mut event = Event::new(
        EventId::new(id),
        title,
        description,
        scheduled_at,
        UserId::new(organizer),
    );
    event.location = location.map(str::to_string);
    event.attendees = ids(attendees);
    event
}

#[cfg(test)]
mod tests {
    use super::MockSeed;
    use crate::seed::{validate_seed, SeedSource};

    #[test]
    fn mock_seed_is_valid() {
        let seed = MockSeed.load().unwrap();
        validate_seed(&seed).unwrap();
    }
}
