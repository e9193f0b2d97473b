//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod audit;
pub mod entry;
pub mod init;
pub mod quote;
pub mod report;

pub use audit::handle_audit_command;
pub use entry::{handle_history_command, handle_log_command, LogArgs};
pub use init::{handle_init_command, InitArgs};
pub use quote::handle_quote_command;
pub use report::handle_summary_command;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};

/// Parse a `YYYY-MM-DD` argument, defaulting to `today`
pub fn parse_date_arg(date: Option<&str>, today: NaiveDate) -> TrackerResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            TrackerError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(parse_date_arg(None, today).unwrap(), today);
        assert_eq!(
            parse_date_arg(Some("2024-01-02"), today).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert!(parse_date_arg(Some("02.01.2024"), today)
            .unwrap_err()
            .is_validation());
        assert!(parse_date_arg(Some("2024-02-30"), today).is_err());
    }
}
