//! Settings service
//!
//! Validates and saves user settings, auditing each save.

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::storage::Storage;

const SETTINGS_ID: &str = "settings";

/// Service for user settings
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Currently saved settings, if any
    pub fn current(&self) -> TrackerResult<Option<Settings>> {
        Settings::load(self.storage.paths())
    }

    /// Validate and persist settings
    ///
    /// The settings file is written before the audit line, so an audit
    /// failure is reported as `AuditFailed` after a successful save.
    pub fn save(&self, settings: &Settings) -> TrackerResult<()> {
        settings.validate()?;

        // A previous file that no longer parses is simply overwritten
        let previous = self.current().ok().flatten();
        settings.save(self.storage.paths())?;

        let logged = match previous {
            None => self
                .storage
                .log_create(EntityType::Settings, SETTINGS_ID, settings),
            Some(before) => {
                self.storage
                    .log_update(EntityType::Settings, SETTINGS_ID, &before, settings)
            }
        };

        logged.map_err(|e| TrackerError::AuditFailed {
            saved: "Settings".into(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::TrackerPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);
        assert!(service.current().unwrap().is_none());

        let settings = Settings::with_defaults("RSD");
        service.save(&settings).unwrap();

        assert_eq!(service.current().unwrap(), Some(settings));
    }

    #[test]
    fn test_invalid_settings_are_not_saved() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        let mut settings = Settings::with_defaults("$");
        settings.pack_price = Money::zero();

        assert!(service.save(&settings).unwrap_err().is_validation());
        assert!(service.current().unwrap().is_none());
    }

    #[test]
    fn test_changes_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        let mut settings = Settings::with_defaults("$");
        service.save(&settings).unwrap();
        settings.cigarettes_per_day = 10;
        service.save(&settings).unwrap();
        service.save(&settings).unwrap();

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 3);
        assert_eq!(audit[0].operation, Operation::Create);
        assert_eq!(audit[1].operation, Operation::Update);
        assert_eq!(
            audit[1].diff_summary.as_deref(),
            Some("cigarettes_per_day: 30 -> 10")
        );
        assert_eq!(audit[2].operation, Operation::Update);
        assert!(audit[2].diff_summary.is_none());
    }
}
