//! Read-side directory helpers.
//!
//! # Responsibility
//! - Filter communities for the browse page.
//! - Project communities into count-only summaries for listing cards.
//!
//! # Invariants
//! - Helpers only read snapshots; they never mutate.
//! - Result order follows snapshot order.

pub mod communities;
