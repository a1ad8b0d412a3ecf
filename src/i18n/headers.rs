//! Locale detection from HTTP request headers.

use crate::i18n::Locale;
use axum::http::HeaderMap;

/// Custom header that pins the locale explicitly.
pub const LOCALE_HEADER: &str = "x-locale";

/// Extract the request locale.
///
/// `X-Locale` wins when it names a supported locale. Otherwise the
/// `Accept-Language` list is walked in order (quality values are ignored, only
/// the primary subtag is compared) and the first supported language is used.
/// Falls back to the default locale.
pub fn locale_from_headers(headers: &HeaderMap) -> Locale {
    if let Some(custom) = header_str(headers, LOCALE_HEADER) {
        if let Ok(locale) = Locale::from_code(custom.trim()) {
            return locale;
        }
    }

    if let Some(accept_language) = header_str(headers, axum::http::header::ACCEPT_LANGUAGE.as_str())
    {
        if let Some(locale) = parse_accept_language(accept_language) {
            return locale;
        }
    }

    Locale::default_locale()
}

/// First supported locale in an `Accept-Language` value, if any.
pub fn parse_accept_language(value: &str) -> Option<Locale> {
    value
        .split(',')
        .filter_map(|entry| {
            let tag = entry.trim().split(';').next()?.trim();
            let primary = tag.split('-').next()?.trim();
            (!primary.is_empty()).then(|| primary.to_ascii_lowercase())
        })
        .find_map(|primary| Locale::from_code(&primary).ok())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
