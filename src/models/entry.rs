//! Daily entry model
//!
//! One day's self-reported checklist, stress rating and comment. Checklist
//! flags are persisted as `0`/`1` integers; booleans are accepted on read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of checklist items, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChecklistItem {
    /// Did not smoke today (the habit-avoidance indicator)
    NoSmoke,
    NoSoda,
    SodaRinse1,
    SodaRinse2,
    SodaRinse3,
    PastilaOrIce,
    HerbalTea,
    Walk,
}

impl ChecklistItem {
    pub const ALL: [ChecklistItem; 8] = [
        ChecklistItem::NoSmoke,
        ChecklistItem::NoSoda,
        ChecklistItem::SodaRinse1,
        ChecklistItem::SodaRinse2,
        ChecklistItem::SodaRinse3,
        ChecklistItem::PastilaOrIce,
        ChecklistItem::HerbalTea,
        ChecklistItem::Walk,
    ];

    /// Key used in the history file
    pub fn key(&self) -> &'static str {
        match self {
            ChecklistItem::NoSmoke => "no_smoke",
            ChecklistItem::NoSoda => "no_soda",
            ChecklistItem::SodaRinse1 => "soda_rinse_1",
            ChecklistItem::SodaRinse2 => "soda_rinse_2",
            ChecklistItem::SodaRinse3 => "soda_rinse_3",
            ChecklistItem::PastilaOrIce => "pastila_or_ice",
            ChecklistItem::HerbalTea => "herbal_tea",
            ChecklistItem::Walk => "walk",
        }
    }

    /// Checkbox label; the three rinses share one label
    pub fn label(&self) -> String {
        if self.key().starts_with("soda_rinse") {
            "Soda rinse".to_string()
        } else {
            humanize_key(self.key())
        }
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChecklistItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        ChecklistItem::ALL
            .into_iter()
            .find(|item| item.key() == normalized)
            .ok_or_else(|| {
                let valid: Vec<_> = ChecklistItem::ALL.iter().map(|i| i.key()).collect();
                format!(
                    "Unknown checklist item '{}'. Valid items: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// Turn a storage key into a display label: `no_smoke` -> `No smoke`
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Stress rating, 1 (calm) to 5 (high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StressLevel(u8);

impl StressLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, StressLevelError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(StressLevelError(level))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for StressLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for StressLevel {
    type Error = StressLevelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<StressLevel> for u8 {
    fn from(level: StressLevel) -> Self {
        level.0
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stress rating outside 1..=5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressLevelError(pub u8);

impl fmt::Display for StressLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stress level must be between {} and {}, got {}",
            StressLevel::MIN,
            StressLevel::MAX,
            self.0
        )
    }
}

impl std::error::Error for StressLevelError {}

/// One day's recorded checklist, stress and comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    #[serde(default, with = "flag")]
    pub no_smoke: bool,
    #[serde(default, with = "flag")]
    pub no_soda: bool,
    #[serde(default, with = "flag")]
    pub soda_rinse_1: bool,
    #[serde(default, with = "flag")]
    pub soda_rinse_2: bool,
    #[serde(default, with = "flag")]
    pub soda_rinse_3: bool,
    #[serde(default, with = "flag")]
    pub pastila_or_ice: bool,
    #[serde(default, with = "flag")]
    pub herbal_tea: bool,
    #[serde(default, with = "flag")]
    pub walk: bool,
    #[serde(default)]
    pub stress: StressLevel,
    #[serde(default)]
    pub comment: String,
}

impl DailyEntry {
    /// Build an entry with the given items checked
    pub fn new(
        checked: impl IntoIterator<Item = ChecklistItem>,
        stress: StressLevel,
        comment: impl Into<String>,
    ) -> Self {
        let mut entry = Self {
            stress,
            comment: comment.into().trim().to_string(),
            ..Self::default()
        };
        for item in checked {
            entry.set(item, true);
        }
        entry
    }

    /// Whether the habit was avoided on this day
    pub fn avoided(&self) -> bool {
        self.no_smoke
    }

    pub fn is_checked(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::NoSmoke => self.no_smoke,
            ChecklistItem::NoSoda => self.no_soda,
            ChecklistItem::SodaRinse1 => self.soda_rinse_1,
            ChecklistItem::SodaRinse2 => self.soda_rinse_2,
            ChecklistItem::SodaRinse3 => self.soda_rinse_3,
            ChecklistItem::PastilaOrIce => self.pastila_or_ice,
            ChecklistItem::HerbalTea => self.herbal_tea,
            ChecklistItem::Walk => self.walk,
        }
    }

    pub fn set(&mut self, item: ChecklistItem, checked: bool) {
        let slot = match item {
            ChecklistItem::NoSmoke => &mut self.no_smoke,
            ChecklistItem::NoSoda => &mut self.no_soda,
            ChecklistItem::SodaRinse1 => &mut self.soda_rinse_1,
            ChecklistItem::SodaRinse2 => &mut self.soda_rinse_2,
            ChecklistItem::SodaRinse3 => &mut self.soda_rinse_3,
            ChecklistItem::PastilaOrIce => &mut self.pastila_or_ice,
            ChecklistItem::HerbalTea => &mut self.herbal_tea,
            ChecklistItem::Walk => &mut self.walk,
        };
        *slot = checked;
    }

    /// Items checked on this day, in display order
    pub fn checked_items(&self) -> Vec<ChecklistItem> {
        ChecklistItem::ALL
            .into_iter()
            .filter(|item| self.is_checked(*item))
            .collect()
    }
}

/// Checklist flags stored as 0/1, read from 0/1 or true/false
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagValue {
        Bool(bool),
        Int(i64),
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match FlagValue::deserialize(deserializer)? {
            FlagValue::Bool(b) => b,
            FlagValue::Int(i) => i != 0,
        })
    }
}
