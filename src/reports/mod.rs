//! Reports module for quit-tracker
//!
//! The savings report stands in for the summary and trend charts.

pub mod savings;

pub use savings::SavingsReport;
