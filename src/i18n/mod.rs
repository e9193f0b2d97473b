//! Language-keyed lookup tables
//!
//! Quotes and UI labels live in small JSON files keyed by two-letter
//! language code. Lookups fall back from the requested language to
//! English, and from English to an empty table.

pub mod locale;
pub mod quotes;
pub mod table;
pub mod translations;

pub use locale::{detect_locale, language_code, resolve_language};
pub use quotes::Quotes;
pub use table::{LanguageTable, FALLBACK_LANGUAGE};
pub use translations::Translations;
