//! Seed data sources.
//!
//! # Responsibility
//! - Define the data shape a store starts from.
//! - Abstract where that data comes from (built-in mock, JSON document).
//! - Reject seeds that break graph invariants before a store accepts them.
//!
//! # Invariants
//! - A seed that passed `validate_seed` yields a snapshot where every id is
//!   unique, every link resolves and membership edges agree both ways.

mod json;
mod mock;
mod validate;

pub use json::JsonSeed;
pub use mock::MockSeed;
pub use validate::validate_seed;

use crate::model::community::Community;
use crate::model::ids::{CommunityId, UserId};
use crate::model::snapshot::Snapshot;
use crate::model::user::User;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

/// Initial domain graph handed to a store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub current_user: Option<UserId>,
    pub users: Vec<User>,
    pub communities: Vec<Community>,
}

impl SeedData {
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            current_user: self.current_user,
            users: self.users.into_iter().map(Arc::new).collect(),
            communities: self.communities.into_iter().map(Arc::new).collect(),
        }
    }
}

/// Anything able to produce seed data.
pub trait SeedSource {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;
    fn load(&self) -> Result<SeedData, SeedError>;
}

/// Seed loading or validation failure.
#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    /// Two entities of one collection share an id.
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    /// A user reference does not resolve.
    UnknownUser {
        context: &'static str,
        user_id: UserId,
    },
    /// A user lists a community that does not exist.
    UnknownCommunity {
        user_id: UserId,
        community_id: CommunityId,
    },
    /// Only one side of a membership edge is present.
    InconsistentMembership {
        user_id: UserId,
        community_id: CommunityId,
    },
    InvalidHandle {
        user_id: UserId,
        handle: String,
    },
    InvalidData(String),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid seed document: {err}"),
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id `{id}` in {collection}")
            }
            Self::UnknownUser { context, user_id } => {
                write!(f, "unknown user `{user_id}` referenced by {context}")
            }
            Self::UnknownCommunity {
                user_id,
                community_id,
            } => write!(
                f,
                "user `{user_id}` joined unknown community `{community_id}`"
            ),
            Self::InconsistentMembership {
                user_id,
                community_id,
            } => write!(
                f,
                "membership of `{user_id}` in `{community_id}` is recorded on one side only"
            ),
            Self::InvalidHandle { user_id, handle } => {
                write!(f, "user `{user_id}` has invalid handle `{handle}`")
            }
            Self::InvalidData(message) => write!(f, "invalid seed data: {message}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
