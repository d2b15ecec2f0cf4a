//! Domain model for communities and everything nested under them.
//!
//! # Responsibility
//! - Define the canonical records shared by the store, seed and read helpers.
//! - Keep lifecycle helpers (like toggle, membership edges) next to the data.
//!
//! # Invariants
//! - Every entity is identified by a string id unique within its collection.
//! - Cross-entity links (author, organizer, member) are plain ids, never
//!   owned references.
//! - Nothing is ever deleted; collections only grow, except post likes.

pub mod community;
pub mod ids;
pub mod snapshot;
pub mod user;
