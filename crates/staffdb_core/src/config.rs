//! Store configuration consumed by `db::open_db_with`.
//!
//! Hosts usually deserialize this from their own settings file; every field
//! has a default so partial documents are accepted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Where the SQLite database lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbLocation {
    /// Private in-memory database, discarded when the connection closes.
    #[default]
    Memory,
    /// On-disk database file, created on first open.
    File(PathBuf),
}

impl DbLocation {
    pub(crate) fn mode_label(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File(_) => "file",
        }
    }
}

/// Connection settings for the mapping layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub location: DbLocation,
    /// Turns on SQLite `foreign_keys` enforcement. Off by default; assignment
    /// time existence checks are the primary referential guard.
    pub enforce_foreign_keys: bool,
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            location: DbLocation::Memory,
            enforce_foreign_keys: false,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Default settings pointed at a database file.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            location: DbLocation::File(path.as_ref().to_path_buf()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DbLocation, StoreConfig};
    use std::path::PathBuf;

    #[test]
    fn partial_document_falls_back_to_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{ "enforce_foreign_keys": true }"#).unwrap();

        assert_eq!(config.location, DbLocation::Memory);
        assert!(config.enforce_foreign_keys);
        assert_eq!(config.busy_timeout_ms, 5_000);
    }

    #[test]
    fn file_location_uses_snake_case_tag() {
        let config: StoreConfig =
            serde_json::from_str(r#"{ "location": { "file": "/tmp/staff.db" } }"#).unwrap();

        assert_eq!(
            config.location,
            DbLocation::File(PathBuf::from("/tmp/staff.db"))
        );
        assert!(!config.enforce_foreign_keys);
    }
}
