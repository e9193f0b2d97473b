//! History display formatting
//!
//! Lists every entry in date order with one labeled line per stored field.

use crate::i18n::Translations;
use crate::models::{humanize_key, ChecklistItem, History};

/// Format the whole history, or the "no data" placeholder when empty
pub fn format_history(history: &History, translations: &Translations) -> String {
    if history.is_empty() {
        return format!("{}\n", translations.text("no_data", "No data to display."));
    }

    let date_label = translations.text("date", "Date");
    let mut output = String::new();

    for (date, entry) in history.iter() {
        output.push_str(&format!("{}: {}\n", date_label, date.format("%Y-%m-%d")));

        for item in ChecklistItem::ALL {
            output.push_str(&format!(
                "  {}: {}\n",
                humanize_key(item.key()),
                u8::from(entry.is_checked(item))
            ));
        }
        output.push_str(&format!("  {}: {}\n", humanize_key("stress"), entry.stress));
        output.push_str(&format!("  {}: {}\n", humanize_key("comment"), entry.comment));

        output.push('\n');
    }

    output
}
