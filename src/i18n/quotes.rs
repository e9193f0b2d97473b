//! Quote of the day

use chrono::{Datelike, NaiveDate};

use super::table::LanguageTable;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Shown when no quotes are available for any language
pub const DEFAULT_QUOTE: &str = "Stay strong. You're doing great!";

/// Quotes resolved for one language
#[derive(Debug, Clone, Default)]
pub struct Quotes {
    quotes: Vec<String>,
}

impl Quotes {
    pub fn new(quotes: Vec<String>) -> Self {
        Self { quotes }
    }

    /// Load `quotes.json` and resolve it for `language`
    pub fn load(paths: &TrackerPaths, language: &str) -> TrackerResult<Self> {
        let table: LanguageTable<Vec<String>> = LanguageTable::load(paths.quotes_file())?;
        Ok(Self::new(table.resolve(language)))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// The same quote all day, a different one the next
    pub fn quote_of_the_day(&self, date: NaiveDate) -> &str {
        if self.quotes.is_empty() {
            return DEFAULT_QUOTE;
        }
        let index = date.ordinal0() as usize % self.quotes.len();
        &self.quotes[index]
    }
}
