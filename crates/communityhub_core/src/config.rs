//! Store configuration.
//!
//! # Invariants
//! - Every field has a default, so an empty JSON object is a valid config.
//! - `max_text_chars` counts Unicode scalar values, not bytes.

use serde::{Deserialize, Serialize};

/// Default upper bound for user-entered text.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 5_000;

/// How the store mints ids for new posts, comments and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Prefixed UUID v4 tokens, e.g. `post-3f2c...`.
    #[default]
    Random,
    /// Prefixed per-collection counter, e.g. `post3`.
    Sequential,
}

/// Tunables for a [`crate::DomainStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub id_strategy: IdStrategy,
    pub max_text_chars: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Random,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl StoreConfig {
    /// Parses a config document; missing fields fall back to defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
