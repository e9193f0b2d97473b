//! Display formatting for terminal output

pub mod history;
pub mod report;

pub use history::format_history;
pub use report::{double_separator, format_bar, format_signed_bar, separator};
