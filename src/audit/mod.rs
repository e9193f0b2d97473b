//! Audit logging for quit-tracker
//!
//! Every saved entry and every settings change is appended to `audit.log`
//! as one JSON object per line (JSONL), with the before/after values and a
//! short field-level diff for overwrites.
//!
//! ```rust,ignore
//! use quit_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Entry, "2024-01-01", &entry))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
