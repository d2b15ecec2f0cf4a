//! JSON seed loader.
//!
//! The document mirrors [`SeedData`]: `current_user`, `users` and
//! `communities` with posts, comments and events nested inline.

use crate::seed::{SeedData, SeedError, SeedSource};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum JsonOrigin {
    Inline(String),
    File(PathBuf),
}

/// Seed read from a JSON string or file.
#[derive(Debug, Clone)]
pub struct JsonSeed {
    origin: JsonOrigin,
}

impl JsonSeed {
    pub fn from_json_str(raw: impl Into<String>) -> Self {
        Self {
            origin: JsonOrigin::Inline(raw.into()),
        }
    }

    /// The file is read lazily on `load`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: JsonOrigin::File(path.as_ref().to_path_buf()),
        }
    }
}

impl SeedSource for JsonSeed {
    fn name(&self) -> &str {
        match &self.origin {
            JsonOrigin::Inline(_) => "json_inline",
            JsonOrigin::File(_) => "json_file",
        }
    }

    fn load(&self) -> Result<SeedData, SeedError> {
        match &self.origin {
            JsonOrigin::Inline(raw) => Ok(serde_json::from_str(raw)?),
            JsonOrigin::File(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(serde_json::from_str(&raw)?)
            }
        }
    }
}
