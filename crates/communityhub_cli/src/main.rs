//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `communityhub_core` linkage and that the mock seed loads.
//! - Keep output deterministic for quick local sanity checks.

use communityhub_core::{search_communities, DomainStore, MockSeed, StoreConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("communityhub_core version={}", communityhub_core::core_version());

    let store = match DomainStore::from_seed(&MockSeed, StoreConfig::default()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("communityhub_core seed=error message={err}");
            return ExitCode::FAILURE;
        }
    };

    let snapshot = store.snapshot();
    println!(
        "communityhub_core seed=mock users={} communities={}",
        snapshot.users.len(),
        snapshot.communities.len()
    );
    for summary in search_communities(&snapshot, "") {
        println!(
            "community id={} members={} posts={} events={}",
            summary.id, summary.member_count, summary.post_count, summary.event_count
        );
    }
    ExitCode::SUCCESS
}
