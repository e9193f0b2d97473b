//! Init CLI command
//!
//! Saves the settings the savings estimate runs on.

use clap::Args;

use crate::config::settings::{
    default_currency_for_locale, Settings, DEFAULT_CANDY_PRICE, DEFAULT_CIGARETTES_PER_DAY,
    DEFAULT_PACK_PRICE,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::services::SettingsService;
use crate::storage::Storage;

/// Arguments for `quit init`
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Cigarettes smoked per day before quitting
    #[arg(long, default_value_t = DEFAULT_CIGARETTES_PER_DAY)]
    pub cigarettes_per_day: u32,

    /// Price of one pack (e.g., "460" or "4.99")
    #[arg(long, default_value_t = DEFAULT_PACK_PRICE.to_string())]
    pub pack_price: String,

    /// Daily spend on candy or another substitute
    #[arg(long, default_value_t = DEFAULT_CANDY_PRICE.to_string())]
    pub candy_price: String,

    /// Currency symbol or code (derived from the system locale if omitted)
    #[arg(long)]
    pub currency: Option<String>,

    /// Overwrite existing settings
    #[arg(long)]
    pub force: bool,
}

/// Handle `quit init`
pub fn handle_init_command(
    storage: &Storage,
    args: InitArgs,
    locale: Option<&str>,
) -> TrackerResult<Settings> {
    let service = SettingsService::new(storage);

    if !args.force && storage.paths().is_initialized() {
        return Err(TrackerError::Config(format!(
            "Settings already exist at {}. Use --force to overwrite them.",
            storage.paths().settings_file().display()
        )));
    }

    let settings = Settings {
        cigarettes_per_day: args.cigarettes_per_day,
        pack_price: parse_price("pack price", &args.pack_price)?,
        candy_price: parse_price("candy price", &args.candy_price)?,
        currency: args
            .currency
            .unwrap_or_else(|| default_currency_for_locale(locale).to_string()),
    };

    service.save(&settings)?;

    println!("Settings saved to {}", storage.paths().settings_file().display());
    println!("  Cigarettes per day: {}", settings.cigarettes_per_day);
    println!(
        "  Pack price:         {}",
        settings.pack_price.format_with_currency(&settings.currency)
    );
    println!(
        "  Candy price:        {}",
        settings.candy_price.format_with_currency(&settings.currency)
    );

    Ok(settings)
}

fn parse_price(field: &str, raw: &str) -> TrackerResult<Money> {
    Money::parse(raw).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid {}: '{}'. Use a format like '460' or '4.99'. Error: {}",
            field, raw, e
        ))
    })
}
