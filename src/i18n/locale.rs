//! Locale and language detection

/// Variables consulted for the user's locale, most specific first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// The user's locale from the environment, such as `sr_RS.UTF-8`
pub fn detect_locale() -> Option<String> {
    locale_from(|name| std::env::var(name).ok())
}

fn locale_from(var: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|name| var(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

/// Two-letter language code of a locale: `sr_RS.UTF-8` -> `sr`
pub fn language_code(locale: &str) -> String {
    locale
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .take(2)
        .collect::<String>()
        .to_lowercase()
}

/// Language to look labels up in: the explicit choice, the locale, or English
pub fn resolve_language(explicit: Option<&str>, locale: Option<&str>) -> String {
    explicit
        .or(locale)
        .map(language_code)
        .filter(|code| code.len() == 2)
        .unwrap_or_else(|| super::FALLBACK_LANGUAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_locale_precedence() {
        let vars = env(&[("LANG", "en_US.UTF-8"), ("LC_ALL", "sr_RS.UTF-8")]);
        assert_eq!(locale_from(vars), Some("sr_RS.UTF-8".to_string()));
    }

    #[test]
    fn test_locale_skips_c_and_empty() {
        let vars = env(&[("LC_ALL", ""), ("LC_MESSAGES", "C"), ("LANG", "de_DE")]);
        assert_eq!(locale_from(vars), Some("de_DE".to_string()));
        assert_eq!(locale_from(env(&[])), None);
    }

    #[test]
    fn test_language_code() {
        assert_eq!(language_code("sr_RS.UTF-8"), "sr");
        assert_eq!(language_code("EN"), "en");
        assert_eq!(language_code("de"), "de");
        assert_eq!(language_code("x"), "x");
    }

    #[test]
    fn test_resolve_language() {
        assert_eq!(resolve_language(Some("sr"), Some("de_DE")), "sr");
        assert_eq!(resolve_language(None, Some("de_DE.UTF-8")), "de");
        assert_eq!(resolve_language(None, None), "en");
        assert_eq!(resolve_language(Some("?"), None), "en");
    }
}
