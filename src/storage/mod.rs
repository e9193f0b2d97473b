//! Storage layer for quit-tracker
//!
//! JSON file storage with atomic writes. The history file is the only
//! aggregate the application writes; the audit log sits next to it.

pub mod entries;
pub mod file_io;

pub use entries::EntryStore;
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Storage coordinator that owns the entry store and the audit log
pub struct Storage {
    paths: TrackerPaths,
    pub entries: EntryStore,
    audit: AuditLogger,
}

impl Storage {
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryStore::new(paths.history_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record that something was saved for the first time
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), TrackerError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity))
    }

    /// Record that something was overwritten
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
    ) -> Result<(), TrackerError> {
        self.audit
            .log(&AuditEntry::update(entity_type, entity_id, before, after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("tracker");
        let paths = TrackerPaths::with_base_dir(base.clone());
        let storage = Storage::new(paths).unwrap();

        assert!(base.exists());
        assert_eq!(storage.entries.path(), base.join("progress.json"));
        assert!(storage.entries.load().unwrap().is_empty());
    }

    #[test]
    fn test_log_helpers() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(EntityType::Entry, "2024-01-01", &json!({"stress": 3}))
            .unwrap();
        storage
            .log_update(
                EntityType::Entry,
                "2024-01-01",
                &json!({"stress": 3}),
                &json!({"stress": 1}),
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Update);
    }
}
