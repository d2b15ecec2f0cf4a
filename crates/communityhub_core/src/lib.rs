//! Core domain logic for CommunityHub.
//! This crate owns the in-memory community graph and every rule that
//! mutates it; presentation layers only read snapshots and send intents.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod seed;
pub mod store;

pub use config::{IdStrategy, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::community::{Comment, Community, Event, LikeState, Post};
pub use model::ids::{CommentId, CommunityId, EventId, PostId, UserId};
pub use model::snapshot::Snapshot;
pub use model::user::User;
pub use search::communities::{search_communities, CommunitySummary};
pub use seed::{validate_seed, JsonSeed, MockSeed, SeedData, SeedError, SeedSource};
pub use store::{
    Clock, CreateEventRequest, DomainStore, FixedClock, JoinOutcome, StoreError, StoreResult,
    SystemClock, UpdateProfileRequest,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
