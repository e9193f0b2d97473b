//! History model
//!
//! The full date-ordered collection of daily entries. On disk this is a
//! single JSON object keyed by `YYYY-MM-DD`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::DailyEntry;

/// All recorded entries, keyed and ordered by date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: BTreeMap<NaiveDate, DailyEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct recorded days
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.entries.get(&date)
    }

    /// Set or replace the entry for `date`, returning the replaced one
    pub fn insert(&mut self, date: NaiveDate, entry: DailyEntry) -> Option<DailyEntry> {
        self.entries.insert(date, entry)
    }

    /// Entries in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &DailyEntry)> {
        self.entries.iter().map(|(date, entry)| (*date, entry))
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }
}

impl FromIterator<(NaiveDate, DailyEntry)> for History {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DailyEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
