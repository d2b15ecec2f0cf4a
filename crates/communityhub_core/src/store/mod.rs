//! In-memory domain store.
//!
//! # Responsibility
//! - Own the authoritative snapshot and apply the five mutation intents.
//! - Re-validate view-layer input before touching state.
//!
//! # Invariants
//! - A rejected intent leaves the snapshot untouched.
//! - A mutation only replaces the touched community/post; siblings are
//!   shared with the previous snapshot.
//! - New ids are never derived from the clock.

pub mod clock;
pub mod domain_store;
mod id_gen;
pub mod input;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain_store::{
    CreateEventRequest, DomainStore, JoinOutcome, StoreError, StoreResult, UpdateProfileRequest,
};
