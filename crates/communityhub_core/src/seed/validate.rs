//! Structural validation of seed data.

use crate::model::ids::UserId;
use crate::seed::{SeedData, SeedError};
use crate::store::input::is_valid_handle;
use std::collections::HashSet;

/// Checks every invariant a store relies on.
///
/// # Errors
/// Returns the first violation found, in this order: blank ids/names,
/// duplicate ids, bad handles, unknown current user, dangling user links,
/// unknown joined communities, one-sided membership edges.
pub fn validate_seed(seed: &SeedData) -> Result<(), SeedError> {
    let mut user_ids = HashSet::new();
    for user in &seed.users {
        if user.id.as_str().trim().is_empty() {
            return Err(SeedError::InvalidData("user id must not be blank".to_string()));
        }
        if !user_ids.insert(&user.id) {
            return Err(SeedError::DuplicateId {
                collection: "users",
                id: user.id.to_string(),
            });
        }
        if !is_valid_handle(&user.handle) {
            return Err(SeedError::InvalidHandle {
                user_id: user.id.clone(),
                handle: user.handle.clone(),
            });
        }
    }

    let known_user = |context: &'static str, user_id: &UserId| {
        if user_ids.contains(user_id) {
            Ok(())
        } else {
            Err(SeedError::UnknownUser {
                context,
                user_id: user_id.clone(),
            })
        }
    };

    if let Some(current) = &seed.current_user {
        known_user("current_user", current)?;
    }

    let mut community_ids = HashSet::new();
    let mut post_ids = HashSet::new();
    let mut comment_ids = HashSet::new();
    let mut event_ids = HashSet::new();

    for community in &seed.communities {
        if community.id.as_str().trim().is_empty() || community.name.trim().is_empty() {
            return Err(SeedError::InvalidData(
                "community id and name must not be blank".to_string(),
            ));
        }
        unique("communities", &mut community_ids, community.id.as_str())?;

        let mut members = HashSet::new();
        for member in &community.members {
            known_user("community member", member)?;
            unique("community members", &mut members, member.as_str())?;
        }

        for post in &community.posts {
            unique("posts", &mut post_ids, post.id.as_str())?;
            known_user("post author", &post.author_id)?;

            let mut likers = HashSet::new();
            for liker in &post.likes {
                known_user("post like", liker)?;
                unique("post likes", &mut likers, liker.as_str())?;
            }

            for comment in &post.comments {
                unique("comments", &mut comment_ids, comment.id.as_str())?;
                known_user("comment author", &comment.author_id)?;
            }
        }

        for event in &community.events {
            unique("events", &mut event_ids, event.id.as_str())?;
            known_user("event organizer", &event.organizer_id)?;

            let mut attendees = HashSet::new();
            for attendee in &event.attendees {
                known_user("event attendee", attendee)?;
                unique("event attendees", &mut attendees, attendee.as_str())?;
            }
        }
    }

    for user in &seed.users {
        let mut joined = HashSet::new();
        for community_id in &user.joined_communities {
            unique("joined communities", &mut joined, community_id.as_str())?;
            let community = seed
                .communities
                .iter()
                .find(|community| &community.id == community_id)
                .ok_or_else(|| SeedError::UnknownCommunity {
                    user_id: user.id.clone(),
                    community_id: community_id.clone(),
                })?;
            if !community.has_member(&user.id) {
                return Err(SeedError::InconsistentMembership {
                    user_id: user.id.clone(),
                    community_id: community_id.clone(),
                });
            }
        }
    }

    for community in &seed.communities {
        for member in &community.members {
            let joined = seed
                .users
                .iter()
                .find(|user| &user.id == member)
                .is_some_and(|user| user.has_joined(&community.id));
            if !joined {
                return Err(SeedError::InconsistentMembership {
                    user_id: member.clone(),
                    community_id: community.id.clone(),
                });
            }
        }
    }

    Ok(())
}

fn unique<'a>(
    collection: &'static str,
    seen: &mut HashSet<&'a str>,
    id: &'a str,
) -> Result<(), SeedError> {
    if seen.insert(id) {
        Ok(())
    } else {
        Err(SeedError::DuplicateId {
            collection,
            id: id.to_string(),
        })
    }
}
