//! Chart and layout helpers for terminal reports

/// Horizontal bar proportional to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a value that may be negative: losses are drawn with `▒`
pub fn format_signed_bar(value: f64, max_abs: f64, width: usize) -> String {
    if max_abs <= 0.0 || value == 0.0 {
        return String::new();
    }

    let filled = ((value.abs() / max_abs) * width as f64).round() as usize;
    let filled = filled.clamp(1, width);

    if value < 0.0 {
        "▒".repeat(filled)
    } else {
        "█".repeat(filled)
    }
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
