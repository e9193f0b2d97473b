//! Translated UI labels

use std::collections::HashMap;

use super::table::LanguageTable;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Labels resolved for one language
#[derive(Debug, Clone, Default)]
pub struct Translations {
    labels: HashMap<String, String>,
}

impl Translations {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }

    /// Load `translations.json` and resolve it for `language`
    pub fn load(paths: &TrackerPaths, language: &str) -> TrackerResult<Self> {
        let table: LanguageTable<HashMap<String, String>> =
            LanguageTable::load(paths.translations_file())?;
        Ok(Self::new(table.resolve(language)))
    }

    /// Translated label for `key`, or `default`
    pub fn text<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(default)
    }
}
