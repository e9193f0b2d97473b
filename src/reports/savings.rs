//! Savings Report
//!
//! Totals plus the day-by-day net savings series, rendered as terminal bar
//! charts or exported to CSV for charting elsewhere.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::display::{double_separator, format_bar, format_signed_bar};
use crate::error::TrackerResult;
use crate::i18n::Translations;
use crate::models::History;
use crate::services::{DailySavings, SavingsAggregator, SavingsSummary};

const CHART_WIDTH: usize = 30;
const SERIES_BAR_WIDTH: usize = 20;

/// Savings Report
#[derive(Debug, Clone)]
pub struct SavingsReport {
    pub summary: SavingsSummary,
    pub series: Vec<DailySavings>,
    /// First and last recorded date
    pub period: Option<(NaiveDate, NaiveDate)>,
    /// Currency marker used when printing amounts
    pub currency: String,
}

/// One CSV row of the daily series
#[derive(Debug, Serialize)]
struct SeriesRecord<'a> {
    date: NaiveDate,
    label: &'a str,
    no_smoke: u8,
    net_savings: String,
}

impl SavingsReport {
    /// Build the report from a history snapshot
    pub fn generate(history: &History, settings: &Settings) -> Self {
        let aggregator = SavingsAggregator::new(settings);

        Self {
            summary: aggregator.summary(history),
            series: aggregator.daily_series(history),
            period: history.first_date().zip(history.last_date()),
            currency: settings.currency.clone(),
        }
    }

    /// Whether there is anything to chart
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, t: &Translations) -> String {
        let mut output = String::new();

        // Totals chart
        output.push_str(t.text("progress_title", "Smoke-free progress"));
        output.push('\n');
        output.push_str(&double_separator(60));
        output.push('\n');

        let avoided = self.summary.habits_avoided as f64;
        let savings = self.summary.net_savings.as_units_f64();
        let scale = avoided.max(savings.abs());

        output.push_str(&format!(
            "{:<20} {} {}\n",
            t.text("cigarettes_avoided", "Cigarettes avoided"),
            format_bar(avoided, scale, CHART_WIDTH),
            self.summary.habits_avoided
        ));
        output.push_str(&format!(
            "{:<20} {} {}\n",
            t.text("net_savings", "Savings (net)"),
            format_bar(savings, scale, CHART_WIDTH),
            self.summary.net_savings.format_with_currency(&self.currency)
        ));
        output.push_str(&format!(
            "{:<20} {} ({} {})\n",
            t.text("days_recorded", "Days recorded"),
            self.summary.days_recorded,
            self.summary.days_avoided,
            t.text("days_smoke_free", "smoke-free")
        ));
        if let Some((first, last)) = self.period {
            output.push_str(&format!(
                "{:<20} {} - {}\n",
                t.text("period", "Period"),
                first.format("%Y-%m-%d"),
                last.format("%Y-%m-%d")
            ));
        }
        output.push('\n');

        // Daily series chart
        output.push_str(t.text("daily_progress_title", "Daily net savings"));
        output.push('\n');

        let max_abs = self
            .series
            .iter()
            .map(|d| d.net.as_units_f64().abs())
            .fold(0.0_f64, f64::max);

        let mut builder = Builder::default();
        builder.push_record([
            t.text("day", "Day"),
            t.text("date", "Date"),
            t.text("net_savings", "Savings (net)"),
            "",
        ]);
        for day in &self.series {
            builder.push_record([
                day.label.clone(),
                day.date.format("%Y-%m-%d").to_string(),
                day.net.format_with_currency(&self.currency),
                format_signed_bar(day.net.as_units_f64(), max_abs, SERIES_BAR_WIDTH),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        output.push_str(&table.to_string());
        output.push('\n');

        output
    }

    /// Export the daily series to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for day in &self.series {
            csv_writer.serialize(SeriesRecord {
                date: day.date,
                label: &day.label,
                no_smoke: u8::from(day.avoided),
                net_savings: day.net.to_string(),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
