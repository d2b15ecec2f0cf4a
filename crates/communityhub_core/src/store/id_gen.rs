//! Identifier minting for store-created entities.
//!
//! # Invariants
//! - A returned id is never already taken in its collection.
//! - Ids do not depend on wall-clock time.

use crate::config::IdStrategy;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdKind {
    Post,
    Comment,
    Event,
}

impl IdKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Event => "event",
        }
    }
}

#[derive(Debug)]
pub(crate) struct IdGenerator {
    strategy: IdStrategy,
    post_seq: u64,
    comment_seq: u64,
    event_seq: u64,
}

impl IdGenerator {
    pub(crate) fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            post_seq: 0,
            comment_seq: 0,
            event_seq: 0,
        }
    }

    /// Mints the next id of `kind`, skipping candidates `is_taken` reports.
    pub(crate) fn next(&mut self, kind: IdKind, is_taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Random => format!("{}-{}", kind.prefix(), Uuid::new_v4().simple()),
                IdStrategy::Sequential => {
                    let seq = self.counter(kind);
                    *seq += 1;
                    format!("{}{}", kind.prefix(), seq)
                }
            };
            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }

    fn counter(&mut self, kind: IdKind) -> &mut u64 {
        match kind {
            IdKind::Post => &mut self.post_seq,
            IdKind::Comment => &mut self.comment_seq,
            IdKind::Event => &mut self.event_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, IdKind};
    use crate::config::IdStrategy;
    use std::collections::HashSet;

    #[test]
    fn sequential_skips_taken_ids() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        let taken = ["post1", "post2"];
        let next = ids.next(IdKind::Post, |candidate| taken.contains(&candidate));
        assert_eq!(next, "post3");
        assert_eq!(ids.next(IdKind::Post, |_| false), "post4");
    }

    #[test]
    fn sequential_counters_are_per_kind() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        assert_eq!(ids.next(IdKind::Post, |_| false), "post1");
        assert_eq!(ids.next(IdKind::Event, |_| false), "event1");
        assert_eq!(ids.next(IdKind::Comment, |_| false), "comment1");
    }

    #[test]
    fn random_ids_do_not_collide_in_a_burst() {
        let mut ids = IdGenerator::new(IdStrategy::Random);
        let minted: HashSet<String> = (0..1_000)
            .map(|_| ids.next(IdKind::Comment, |_| false))
            .collect();
        assert_eq!(minted.len(), 1_000);
        assert!(minted.iter().all(|id| id.starts_with("comment-")));
    }
}
