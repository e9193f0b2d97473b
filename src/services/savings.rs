//! Savings aggregation
//!
//! Pure arithmetic over a history snapshot and the user's settings. Amounts
//! are computed in cents, multiplying before dividing by the pack size so
//! whole-cent results stay exact.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{History, Money};

/// Cigarettes in one pack
pub const UNITS_PER_PACK: i64 = 20;

/// Cumulative totals over the whole history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsSummary {
    /// Number of distinct recorded days
    pub days_recorded: usize,
    /// Days with the "no smoke" flag set
    pub days_avoided: usize,
    /// Cigarettes counted as not smoked
    pub habits_avoided: u64,
    /// Money saved on cigarettes minus money spent on the substitute
    pub net_savings: Money,
}

/// Net savings for one recorded day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySavings {
    pub date: NaiveDate,
    /// Chart label, `DD.MM`
    pub label: String,
    pub avoided: bool,
    pub net: Money,
}

/// Computes totals and the per-day series for one set of settings
pub struct SavingsAggregator<'a> {
    settings: &'a Settings,
}

impl<'a> SavingsAggregator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Totals over the whole history
    ///
    /// `habits_avoided` counts every recorded day at the full daily amount,
    /// whether or not that day's "no smoke" flag was set. The daily series
    /// does distinguish the two.
    pub fn summary(&self, history: &History) -> SavingsSummary {
        let days_recorded = history.len();
        let days = days_recorded as i64;
        let habits_avoided = days * i64::from(self.settings.cigarettes_per_day);

        let net_savings = self.settings.pack_price.mul_div(habits_avoided, UNITS_PER_PACK)
            - self.settings.candy_price * days;

        SavingsSummary {
            days_recorded,
            days_avoided: history.iter().filter(|(_, e)| e.avoided()).count(),
            habits_avoided: habits_avoided as u64,
            net_savings,
        }
    }

    /// Net savings per recorded day, in ascending date order
    ///
    /// A day without the "no smoke" flag still paid for the substitute, so
    /// it shows as a loss of the candy price.
    pub fn daily_series(&self, history: &History) -> Vec<DailySavings> {
        let avoided_value = self.settings.pack_price.mul_div(
            i64::from(self.settings.cigarettes_per_day),
            UNITS_PER_PACK,
        );
        let candy = self.settings.candy_price;

        history
            .iter()
            .map(|(date, entry)| {
                let net = if entry.avoided() {
                    avoided_value - candy
                } else {
                    -candy
                };
                DailySavings {
                    date,
                    label: date.format("%d.%m").to_string(),
                    avoided: entry.avoided(),
                    net,
                }
            })
            .collect()
    }
}
