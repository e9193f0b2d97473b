//! Entry service
//!
//! Records daily entries through the entry store and writes an audit line
//! for every save.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{DailyEntry, History};
use crate::storage::Storage;

/// What saving an entry did to the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The date had no entry before
    Created,
    /// An existing entry for the date was replaced
    Replaced,
    /// The same entry was saved again
    Unchanged,
}

/// Service for daily entries
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Save the entry for `date`, replacing any entry already recorded
    ///
    /// Every save appends one audit line: `Create` for a new date, `Update`
    /// for a re-save (with no diff when nothing changed).
    ///
    /// The history file is written before the audit line. If the audit
    /// append fails, the entry is already saved and the error is
    /// `AuditFailed`.
    pub fn record(&self, date: NaiveDate, entry: DailyEntry) -> TrackerResult<SaveOutcome> {
        let previous = self.storage.entries.upsert(date, entry.clone())?;
        let id = date.format("%Y-%m-%d").to_string();

        let (outcome, logged) = match previous {
            None => (
                SaveOutcome::Created,
                self.storage.log_create(EntityType::Entry, id, &entry),
            ),
            Some(before) => {
                let outcome = if before == entry {
                    SaveOutcome::Unchanged
                } else {
                    SaveOutcome::Replaced
                };
                (
                    outcome,
                    self.storage
                        .log_update(EntityType::Entry, id, &before, &entry),
                )
            }
        };

        logged.map_err(|e| TrackerError::AuditFailed {
            saved: format!("Entry for {}", date),
            source: Box::new(e),
        })?;

        Ok(outcome)
    }

    /// Full history snapshot
    pub fn history(&self) -> TrackerResult<History> {
        self.storage.entries.load()
    }

    /// The entry for one date
    pub fn get(&self, date: NaiveDate) -> TrackerResult<DailyEntry> {
        self.storage
            .entries
            .get(date)?
            .ok_or_else(|| TrackerError::entry_not_found(date.format("%Y-%m-%d").to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::TrackerPaths;
    use crate::models::{ChecklistItem, StressLevel};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_record_new_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let entry = DailyEntry::new([ChecklistItem::NoSmoke], StressLevel::default(), "");
        let outcome = service.record(date(1), entry.clone()).unwrap();

        assert_eq!(outcome, SaveOutcome::Created);
        assert_eq!(service.get(date(1)).unwrap(), entry);

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].operation, Operation::Create);
        assert_eq!(audit[0].entity_id, "2024-01-01");
    }

    #[test]
    fn test_record_replaces_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        service
            .record(date(2), DailyEntry::new([], StressLevel::new(4).unwrap(), "tough day"))
            .unwrap();
        let outcome = service
            .record(
                date(2),
                DailyEntry::new([ChecklistItem::NoSmoke], StressLevel::new(4).unwrap(), "tough day"),
            )
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Replaced);
        assert_eq!(service.history().unwrap().len(), 1);

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 2);
        assert_eq!(audit[1].operation, Operation::Update);
        assert_eq!(audit[1].diff_summary.as_deref(), Some("no_smoke: 0 -> 1"));
    }

    #[test]
    fn test_record_same_entry_is_audited_without_diff() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);
        let entry = DailyEntry::new([ChecklistItem::Walk], StressLevel::default(), "walked");

        service.record(date(3), entry.clone()).unwrap();
        assert_eq!(service.record(date(3), entry).unwrap(), SaveOutcome::Unchanged);

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 2);
        assert_eq!(audit[1].operation, Operation::Update);
        assert_eq!(audit[1].entity_id, "2024-01-03");
        assert!(audit[1].diff_summary.is_none());
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let err = service.get(date(9)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_audit_failure_after_save() {
        let (temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        // A directory where the log file should be makes the append fail
        std::fs::create_dir(temp_dir.path().join("audit.log")).unwrap();

        let entry = DailyEntry::new([ChecklistItem::NoSmoke], StressLevel::default(), "");
        let err = service.record(date(4), entry.clone()).unwrap_err();

        assert!(matches!(err, TrackerError::AuditFailed { .. }));
        assert!(err.to_string().contains("2024-01-04"));
        assert_eq!(storage.entries.get(date(4)).unwrap(), Some(entry));
    }
}
