//! UI language selection. The chosen locale is persisted, restored at
//! startup, and drives both the translated strings and the
//! `Accept-Language` header the HTTP layer sends.

use crate::utils::storage;

pub const LOCALE_KEY: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";

/// Locale codes with their selector labels.
pub const SUPPORTED: &[(&str, &str)] = &[("en", "English"), ("tr", "Türkçe")];

/// Maps arbitrary stored or user input onto a supported code.
pub fn normalize(raw: &str) -> &'static str {
    SUPPORTED
        .iter()
        .map(|(code, _)| *code)
        .find(|code| raw.eq_ignore_ascii_case(code))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Applies the persisted choice, called once at startup. A missing or
/// unrecognized value falls back to the default.
pub fn restore() {
    let stored = storage::get_item(LOCALE_KEY);
    rust_i18n::set_locale(normalize(stored.as_deref().unwrap_or(DEFAULT_LOCALE)));
}

/// Persists and activates a new locale. The language selector follows
/// this with a document reload so every view re-renders translated.
pub fn change(raw: &str) {
    let locale = normalize(raw);
    storage::set_item(LOCALE_KEY, locale);
    rust_i18n::set_locale(locale);
}

pub fn current() -> String {
    rust_i18n::locale().to_string()
}

/// Translation key for a backend category name: lowercased, spaces to
/// underscores, under a `category_` prefix.
pub fn category_key(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("category_{}", slug)
}

/// Best-effort translation of a category name. Categories come from the
/// backend, so the catalog only covers the well-known ones; anything
/// without a key renders as-is.
pub fn translated_category(name: &str) -> String {
    let key = category_key(name);
    let translated = rust_i18n::t!(&key).to_string();
    if translated == key || translated.ends_with(&format!(".{}", key)) {
        name.to_string()
    } else {
        translated
    }
}

pub fn label(code: &str) -> &'static str {
    SUPPORTED
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
        .unwrap_or("English")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_supported_codes() {
        assert_eq!(normalize("en"), "en");
        assert_eq!(normalize("tr"), "tr");
        assert_eq!(normalize("TR"), "tr");
    }

    #[test]
    fn normalize_falls_back_to_default() {
        assert_eq!(normalize(""), "en");
        assert_eq!(normalize("de"), "en");
        assert_eq!(normalize("garbage"), "en");
    }

    #[test]
    fn category_key_slugifies_the_name() {
        assert_eq!(category_key("Cakes"), "category_cakes");
        assert_eq!(category_key("Home & Garden"), "category_home___garden");
    }

    #[test]
    fn unknown_category_falls_back_to_the_raw_name() {
        assert_eq!(translated_category("Seasonal Specials"), "Seasonal Specials");
    }

    #[test]
    fn labels_cover_every_supported_locale() {
        for (code, label_text) in SUPPORTED {
            assert_eq!(label(code), *label_text);
        }
        assert_eq!(label("xx"), "English");
    }
}
