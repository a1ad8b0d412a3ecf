//! Canonical URL and hreflang alternates.
//!
//! The default locale lives at the site root (`/pricing`), every other locale
//! under its code (`/fr/pricing`). `x-default` always points at the default
//! locale's URL. Both public entry points go through [`locale_alternates`] so
//! they cannot drift apart.

use crate::i18n::Locale;
use serde::Serialize;
use std::collections::BTreeMap;

/// hreflang key for the fallback page.
pub const X_DEFAULT: &str = "x-default";

/// Locale code (plus `x-default`) to absolute URL.
pub type LanguageAlternates = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleAlternates {
    pub canonical: String,
    pub languages: LanguageAlternates,
}

/// Strip leading and trailing slashes; the root path becomes empty.
pub fn normalize_path(path: &str) -> &str {
    path.trim().trim_matches('/')
}

/// Absolute URL of `path` in `locale`.
pub fn localized_url(base_url: &str, path: &str, locale: Locale) -> String {
    let base = base_url.trim_end_matches('/');
    let path = normalize_path(path);

    let url = match (locale.is_default(), path.is_empty()) {
        (true, true) => base.to_string(),
        (true, false) => format!("{}/{}", base, path),
        (false, true) => format!("{}/{}", base, locale.code()),
        (false, false) => format!("{}/{}/{}", base, locale.code(), path),
    };

    let url = url.trim_end_matches('/');
    if url.is_empty() {
        base.to_string()
    } else {
        url.to_string()
    }
}

/// Canonical URL for `(path, locale)` plus the URL of every locale and `x-default`.
pub fn locale_alternates(path: &str, locale: Locale, base_url: &str) -> LocaleAlternates {
    let mut languages: LanguageAlternates = Locale::all()
        .into_iter()
        .map(|l| (l.code().to_string(), localized_url(base_url, path, l)))
        .collect();

    let default_url = localized_url(base_url, path, Locale::default_locale());
    languages.insert(X_DEFAULT.to_string(), default_url);

    LocaleAlternates {
        canonical: localized_url(base_url, path, locale),
        languages,
    }
}

/// Per-locale URL map for metadata `alternates.languages`.
pub fn generate_language_alternates(path: &str, locale: Locale, base_url: &str) -> LanguageAlternates {
    locale_alternates(path, locale, base_url).languages
}

/// Canonical plus per-locale URL map, for page-level metadata helpers.
pub fn generate_alternates(path: &str, locale: Locale, base_url: &str) -> LocaleAlternates {
    locale_alternates(path, locale, base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.aiseoturbo.com";

    // ==================== Normalization Tests ====================

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/pricing///"), "pricing");
        assert_eq!(normalize_path("features/seo-audit/"), "features/seo-audit");
    }

    // ==================== URL Tests ====================

    #[test]
    fn test_default_locale_root() {
        assert_eq!(localized_url(BASE, "", Locale::EN), BASE);
        assert_eq!(localized_url(BASE, "/", Locale::EN), BASE);
    }

    #[test]
    fn test_default_locale_path() {
        assert_eq!(
            localized_url(BASE, "/pricing", Locale::EN),
            "https://www.aiseoturbo.com/pricing"
        );
    }

    #[test]
    fn test_prefixed_locale() {
        assert_eq!(
            localized_url(BASE, "", Locale::FR),
            "https://www.aiseoturbo.com/fr"
        );
        assert_eq!(
            localized_url(BASE, "features/seo-audit//", Locale::DE),
            "https://www.aiseoturbo.com/de/features/seo-audit"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_ignored() {
        assert_eq!(
            localized_url("https://example.com/", "blog", Locale::IT),
            "https://example.com/it/blog"
        );
    }

    // ==================== Alternates Tests ====================

    #[test]
    fn test_alternates_cover_every_locale_and_x_default() {
        let alternates = locale_alternates("pricing", Locale::ES, BASE);

        assert_eq!(alternates.languages.len(), 7);
        for code in ["en", "fr", "it", "es", "id", "de", X_DEFAULT] {
            assert!(alternates.languages.contains_key(code), "missing {}", code);
        }
        assert_eq!(alternates.canonical, "https://www.aiseoturbo.com/es/pricing");
        assert_eq!(
            alternates.languages["id"],
            "https://www.aiseoturbo.com/id/pricing"
        );
    }

    #[test]
    fn test_x_default_mirrors_english() {
        let alternates = locale_alternates("", Locale::DE, BASE);
        assert_eq!(alternates.languages[X_DEFAULT], alternates.languages["en"]);
        assert_eq!(alternates.languages[X_DEFAULT], BASE);
    }

    #[test]
    fn test_wrappers_agree() {
        for locale in Locale::all() {
            let full = generate_alternates("/about/", locale, BASE);
            let languages = generate_language_alternates("/about/", locale, BASE);
            assert_eq!(full.languages, languages);
            assert_eq!(full, locale_alternates("about", locale, BASE));
        }
    }
}
