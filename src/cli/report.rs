//! Summary CLI command
//!
//! Prints the savings totals and daily chart, or exports the series to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::i18n::Translations;
use crate::reports::SavingsReport;
use crate::services::EntryService;
use crate::storage::Storage;

/// Handle `quit summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    t: &Translations,
    output: Option<PathBuf>,
) -> TrackerResult<()> {
    let history = EntryService::new(storage).history()?;
    let report = SavingsReport::generate(&history, settings);

    if report.is_empty() {
        println!(
            "{}",
            t.text("no_graph_data", "Not enough data to display the chart.")
        );
        return Ok(());
    }

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Daily savings exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(t));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use crate::models::{ChecklistItem, DailyEntry, StressLevel};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_summary_exports_csv() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings::with_defaults("RSD");

        storage
            .entries
            .upsert(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                DailyEntry::new([ChecklistItem::NoSmoke], StressLevel::default(), ""),
            )
            .unwrap();

        let out = temp_dir.path().join("series.csv");
        handle_summary_command(&storage, &settings, &Translations::default(), Some(out.clone()))
            .unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        // 30 * 460 / 20 - 100
        assert!(text.contains("2024-01-01,01.01,1,590.00"));
    }

    #[test]
    fn test_summary_with_no_history_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let out = temp_dir.path().join("series.csv");
        handle_summary_command(
            &storage,
            &Settings::with_defaults("$"),
            &Translations::default(),
            Some(out.clone()),
        )
        .unwrap();

        assert!(!out.exists());
    }
}
