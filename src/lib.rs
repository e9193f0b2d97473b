//! quit-tracker - daily quit-smoking tracker
//!
//! Records a per-day checklist (smoke-free, soda rinses, walks and so on)
//! with a stress rating and a comment, and estimates the money saved on
//! smoke-free days from the pack price and former consumption.
//!
//! # Architecture
//!
//! - `config`: data paths and user settings
//! - `error`: custom error types
//! - `models`: daily entries, history and money
//! - `storage`: JSON file storage layer
//! - `services`: recording entries and the savings aggregation
//! - `audit`: JSONL audit log of every saved change
//! - `i18n`: quotes, translated labels and locale detection
//! - `display`, `reports`: terminal and CSV output
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use quit_tracker::config::{Settings, TrackerPaths};
//! use quit_tracker::services::SavingsAggregator;
//! use quit_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let storage = Storage::new(paths.clone())?;
//! let settings = Settings::load_required(&paths)?;
//! let summary = SavingsAggregator::new(&settings).summary(&storage.entries.load()?);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod i18n;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TrackerError;
