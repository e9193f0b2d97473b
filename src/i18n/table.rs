//! Generic language-keyed table with fallback lookup

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::storage::read_json;

/// Language used when the requested one has no entry
pub const FALLBACK_LANGUAGE: &str = "en";

/// A mapping from language code to a value of `T`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable<T> {
    by_language: HashMap<String, T>,
}

impl<T> LanguageTable<T> {
    /// Value for `language`, then for English, or `None`
    pub fn lookup(&self, language: &str) -> Option<&T> {
        self.by_language
            .get(language)
            .or_else(|| self.by_language.get(FALLBACK_LANGUAGE))
    }

    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty()
    }
}

impl<T: Clone + Default> LanguageTable<T> {
    /// Value for `language`, then for English, then `T::default()`
    pub fn resolve(&self, language: &str) -> T {
        self.lookup(language).cloned().unwrap_or_default()
    }
}

impl<T: DeserializeOwned + Default> LanguageTable<T> {
    /// Load a table from disk; a missing file is an empty table
    pub fn load(path: impl AsRef<Path>) -> TrackerResult<Self> {
        read_json(path)
    }
}

impl<T> FromIterator<(String, T)> for LanguageTable<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            by_language: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table() -> LanguageTable<Vec<String>> {
        [
            ("en".to_string(), vec!["Keep going".to_string()]),
            ("sr".to_string(), vec!["Samo napred".to_string()]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_primary_language() {
        assert_eq!(table().resolve("sr"), vec!["Samo napred".to_string()]);
    }

    #[test]
    fn test_falls_back_to_english() {
        assert_eq!(table().resolve("de"), vec!["Keep going".to_string()]);
    }

    #[test]
    fn test_falls_back_to_empty() {
        let only_german: LanguageTable<Vec<String>> =
            [("de".to_string(), vec!["Weiter so".to_string()])]
                .into_iter()
                .collect();
        assert!(only_german.lookup("fr").is_none());
        assert!(only_german.resolve("fr").is_empty());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: LanguageTable<Vec<String>> =
            LanguageTable::load(temp_dir.path().join("quotes.json")).unwrap();
        assert!(loaded.is_empty());
        assert!(loaded.resolve("en").is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("translations.json");
        std::fs::write(&path, r#"{"en": {"title": "Tracker"}, "sr": {"title": "Praćenje"}}"#)
            .unwrap();

        let loaded: LanguageTable<HashMap<String, String>> = LanguageTable::load(&path).unwrap();
        assert_eq!(loaded.resolve("sr")["title"], "Praćenje");
        assert_eq!(loaded.resolve("de")["title"], "Tracker");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.json");
        std::fs::write(&path, r#"{"en": "not a list"}"#).unwrap();

        assert!(LanguageTable::<Vec<String>>::load(&path).is_err());
    }
}
