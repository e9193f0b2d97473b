//! Core data models for quit-tracker
//!
//! - `DailyEntry`: one day's checklist, stress rating and comment
//! - `History`: every recorded entry, keyed by date
//! - `Money`: cent-precise currency amounts

pub mod entry;
pub mod history;
pub mod money;

pub use entry::{humanize_key, ChecklistItem, DailyEntry, StressLevel, StressLevelError};
pub use history::History;
pub use money::{Money, MoneyParseError};
