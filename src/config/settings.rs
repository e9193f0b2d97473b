//! User settings for quit-tracker
//!
//! Holds the constants the savings computation runs on: how many cigarettes
//! a day the user used to smoke, what a pack costs, what the daily
//! substitute (candy) costs, and which currency to print amounts in.
//!
//! Older settings files store every number as a JSON string (`"30"`,
//! `"460"`), so numeric fields accept either a number or a numeric string.
//! Settings are always written back with real JSON numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// On-boarding default for cigarettes per day
pub const DEFAULT_CIGARETTES_PER_DAY: u32 = 30;

/// On-boarding default pack price, in whole currency units
pub const DEFAULT_PACK_PRICE: i64 = 460;

/// On-boarding default daily candy price, in whole currency units
pub const DEFAULT_CANDY_PRICE: i64 = 100;

/// Largest accepted daily cigarette count
pub const MAX_CIGARETTES_PER_DAY: u32 = 1_000;

/// Largest accepted pack or candy price, in whole currency units
pub const MAX_PRICE: i64 = 1_000_000_000;

/// User settings for quit-tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Cigarettes smoked per day before quitting
    #[serde(deserialize_with = "de_count")]
    pub cigarettes_per_day: u32,

    /// Price of one pack
    #[serde(with = "decimal_money")]
    pub pack_price: Money,

    /// Daily spend on candy or another substitute
    #[serde(default, with = "decimal_money")]
    pub candy_price: Money,

    /// Currency symbol or code used when printing amounts
    pub currency: String,
}

impl Settings {
    /// Settings pre-filled with the on-boarding defaults
    pub fn with_defaults(currency: impl Into<String>) -> Self {
        Self {
            cigarettes_per_day: DEFAULT_CIGARETTES_PER_DAY,
            pack_price: Money::from_units(DEFAULT_PACK_PRICE),
            candy_price: Money::from_units(DEFAULT_CANDY_PRICE),
            currency: currency.into(),
        }
    }

    /// Check that the values make sense for a savings estimate
    pub fn validate(&self) -> TrackerResult<()> {
        if self.cigarettes_per_day == 0 {
            return Err(TrackerError::Validation(
                "Cigarettes per day must be positive".into(),
            ));
        }
        if self.cigarettes_per_day > MAX_CIGARETTES_PER_DAY {
            return Err(TrackerError::Validation(format!(
                "Cigarettes per day cannot exceed {}",
                MAX_CIGARETTES_PER_DAY
            )));
        }
        let max_price = Money::from_units(MAX_PRICE);
        if self.pack_price > max_price || self.candy_price > max_price {
            return Err(TrackerError::Validation(format!(
                "Prices cannot exceed {}",
                max_price
            )));
        }
        if !self.pack_price.is_positive() {
            return Err(TrackerError::Validation(
                "Pack price must be positive".into(),
            ));
        }
        if self.candy_price.is_negative() {
            return Err(TrackerError::Validation(
                "Candy price cannot be negative".into(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(TrackerError::Validation("Currency cannot be empty".into()));
        }
        Ok(())
    }

    /// Load settings from disk, or `None` if they were never saved
    ///
    /// Values that parse but fail validation are a `Config` error.
    pub fn load(paths: &TrackerPaths) -> TrackerResult<Option<Self>> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate().map_err(|e| {
            TrackerError::Config(format!(
                "Invalid settings in {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        Ok(Some(settings))
    }

    /// Load settings, failing if they were never saved
    pub fn load_required(paths: &TrackerPaths) -> TrackerResult<Self> {
        Self::load(paths)?.ok_or_else(TrackerError::not_initialized)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> TrackerResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Pick a currency from a locale string such as `sr_RS.UTF-8`
pub fn default_currency_for_locale(locale: Option<&str>) -> &'static str {
    match locale {
        Some(l) if l.starts_with("sr") => "RSD",
        Some(l) if l.starts_with("en_US") => "$",
        Some(l) if l.starts_with("de") || l.contains("EU") => "€",
        _ => "$",
    }
}

/// A JSON number or a string holding one
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    fn into_text(self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }
    }
}

fn parse_count(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if let Ok(count) = raw.parse::<u32>() {
        return Ok(count);
    }
    // "30.0" is still a whole count
    match raw.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Ok(f as u32),
        _ => Err(format!("'{}' is not a whole number", raw)),
    }
}

fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let text = NumberOrText::deserialize(deserializer)?.into_text();
    parse_count(&text).map_err(serde::de::Error::custom)
}

/// Money persisted as a decimal number of currency units
mod decimal_money {
    use super::*;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.as_units_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = NumberOrText::deserialize(deserializer)?.into_text();
        Money::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Settings {
        Settings {
            cigarettes_per_day: 20,
            pack_price: Money::from_units(300),
            candy_price: Money::from_units(50),
            currency: "$".into(),
        }
    }

    #[test]
    fn test_with_defaults() {
        let settings = Settings::with_defaults("RSD");
        assert_eq!(settings.cigarettes_per_day, 30);
        assert_eq!(settings.pack_price, Money::from_units(460));
        assert_eq!(settings.candy_price, Money::from_units(100));
        assert_eq!(settings.currency, "RSD");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parses_string_numbers() {
        let json = r#"{
            "cigarettes_per_day": "30",
            "pack_price": "460",
            "candy_price": "100",
            "currency": "RSD"
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.cigarettes_per_day, 30);
        assert_eq!(settings.pack_price.cents(), 46000);
        assert_eq!(settings.candy_price.cents(), 10000);
    }

    #[test]
    fn test_parses_real_numbers() {
        let json = r#"{"cigarettes_per_day": 20, "pack_price": 4.99, "currency": "$"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.cigarettes_per_day, 20);
        assert_eq!(settings.pack_price.cents(), 499);
    }

    #[test]
    fn test_candy_price_defaults_to_zero() {
        let json = r#"{"cigarettes_per_day": "20", "pack_price": "300", "currency": "$"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.candy_price.is_zero());
    }

    #[test]
    fn test_rejects_non_numeric() {
        let json = r#"{"cigarettes_per_day": "lots", "pack_price": "300", "currency": "$"}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());

        let json = r#"{"cigarettes_per_day": 20, "pack_price": "cheap", "currency": "$"}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }

    #[test]
    fn test_validate() {
        let mut settings = sample();
        assert!(settings.validate().is_ok());

        settings.cigarettes_per_day = 0;
        assert!(settings.validate().unwrap_err().is_validation());

        let mut settings = sample();
        settings.pack_price = Money::zero();
        assert!(settings.validate().is_err());

        let mut settings = sample();
        settings.candy_price = Money::from_cents(-1);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(Settings::load(&paths).unwrap().is_none());
        assert!(Settings::load_required(&paths).is_err());

        let settings = sample();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_required(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_validate_bounds() {
        let mut settings = sample();
        settings.cigarettes_per_day = MAX_CIGARETTES_PER_DAY + 1;
        assert!(settings.validate().unwrap_err().is_validation());

        let mut settings = sample();
        settings.pack_price = Money::from_units(MAX_PRICE);
        assert!(settings.validate().is_ok());
        settings.candy_price = Money::from_units(MAX_PRICE + 1);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_out_of_range_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"cigarettes_per_day": "20", "pack_price": "300",
                "candy_price": "90000000000000000", "currency": "$"}"#,
        )
        .unwrap();

        let err = Settings::load_required(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
        assert!(err.to_string().contains("Prices cannot exceed"));
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings {
            cigarettes_per_day: 15,
            pack_price: Money::from_cents(1299),
            candy_price: Money::from_cents(175),
            currency: "€".into(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_default_currency_for_locale() {
        assert_eq!(default_currency_for_locale(Some("sr_RS.UTF-8")), "RSD");
        assert_eq!(default_currency_for_locale(Some("en_US.UTF-8")), "$");
        assert_eq!(default_currency_for_locale(Some("de_DE")), "€");
        assert_eq!(default_currency_for_locale(Some("xx_EU")), "€");
        assert_eq!(default_currency_for_locale(Some("en_GB")), "$");
        assert_eq!(default_currency_for_locale(None), "$");
    }
}
