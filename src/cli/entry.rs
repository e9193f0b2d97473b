//! Entry CLI commands
//!
//! `quit log` records a day; `quit history` lists recorded days.

use chrono::NaiveDate;
use clap::Args;

use super::parse_date_arg;
use crate::display::format_history;
use crate::error::{TrackerError, TrackerResult};
use crate::i18n::Translations;
use crate::models::{ChecklistItem, DailyEntry, History, StressLevel};
use crate::services::{EntryService, SaveOutcome};
use crate::storage::Storage;

/// Arguments for `quit log`
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Date of the entry (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Checklist item done that day; repeat for several
    /// (no_smoke, no_soda, soda_rinse_1, soda_rinse_2, soda_rinse_3,
    /// pastila_or_ice, herbal_tea, walk)
    #[arg(short = 'x', long = "check", value_name = "ITEM")]
    pub checks: Vec<ChecklistItem>,

    /// Stress level, 1 (calm) to 5 (high)
    #[arg(short, long, default_value_t = 3)]
    pub stress: u8,

    /// How the day felt
    #[arg(short = 'm', long, default_value = "")]
    pub comment: String,
}

/// Handle `quit log`
pub fn handle_log_command(
    storage: &Storage,
    t: &Translations,
    args: LogArgs,
    today: NaiveDate,
) -> TrackerResult<SaveOutcome> {
    let date = parse_date_arg(args.date.as_deref(), today)?;
    let stress =
        StressLevel::new(args.stress).map_err(|e| TrackerError::Validation(e.to_string()))?;
    let entry = DailyEntry::new(args.checks, stress, args.comment);
    let checked: Vec<String> = entry
        .checked_items()
        .iter()
        .map(ChecklistItem::label)
        .collect();

    let outcome = EntryService::new(storage).record(date, entry)?;

    let saved = t.text("entry_saved", "Entry saved for");
    match outcome {
        SaveOutcome::Created => println!("{} {}", saved, date),
        SaveOutcome::Replaced => println!(
            "{} {} ({})",
            saved,
            date,
            t.text("entry_replaced", "replaced the previous entry")
        ),
        SaveOutcome::Unchanged => println!(
            "{} {} ({})",
            saved,
            date,
            t.text("entry_unchanged", "no changes")
        ),
    }
    if !checked.is_empty() {
        println!("  {}: {}", t.text("checked", "Checked"), checked.join(", "));
    }

    Ok(outcome)
}

/// Handle `quit history`: every recorded day, or only `date`
pub fn handle_history_command(
    storage: &Storage,
    t: &Translations,
    date: Option<NaiveDate>,
) -> TrackerResult<()> {
    let service = EntryService::new(storage);
    let history: History = match date {
        Some(date) => std::iter::once((date, service.get(date)?)).collect(),
        None => service.history()?,
    };
    print!("{}", format_history(&history, t));
    Ok(())
}
