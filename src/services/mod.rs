//! Service layer for quit-tracker
//!
//! Business logic on top of the storage layer: recording entries, saving
//! settings, and turning a history into savings figures.

pub mod entry;
pub mod savings;
pub mod settings;

pub use entry::{EntryService, SaveOutcome};
pub use savings::{DailySavings, SavingsAggregator, SavingsSummary, UNITS_PER_PACK};
pub use settings::SettingsService;
