//! Entry store for the daily history file
//!
//! Every operation goes to disk: `load` reads the whole file and `upsert`
//! reads it, replaces one date and rewrites the whole file. There is no
//! locking, so two processes saving at once would race (last write wins).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::TrackerError;
use crate::models::{DailyEntry, History};

use super::file_io::{read_json, write_json_atomic};

/// Repository for the date-keyed entry history
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full history; a missing file is an empty history
    pub fn load(&self) -> Result<History, TrackerError> {
        read_json(&self.path)
    }

    /// Get the entry recorded for one date
    pub fn get(&self, date: NaiveDate) -> Result<Option<DailyEntry>, TrackerError> {
        Ok(self.load()?.get(date).cloned())
    }

    /// Set or replace the entry for `date` and persist the full history
    ///
    /// Returns the entry that was replaced, if the date was already recorded.
    pub fn upsert(
        &self,
        date: NaiveDate,
        entry: DailyEntry,
    ) -> Result<Option<DailyEntry>, TrackerError> {
        let mut history = self.load()?;
        let previous = history.insert(date, entry);
        write_json_atomic(&self.path, &history)?;
        Ok(previous)
    }
}
