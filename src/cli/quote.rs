//! Quote CLI command

use chrono::NaiveDate;

use crate::config::TrackerPaths;
use crate::error::TrackerResult;
use crate::i18n::Quotes;

/// Handle `quit quote`: print the quote for `date`
pub fn handle_quote_command(
    paths: &TrackerPaths,
    language: &str,
    date: NaiveDate,
) -> TrackerResult<()> {
    let quotes = Quotes::load(paths, language)?;
    println!("{}", quotes.quote_of_the_day(date));
    Ok(())
}
