//! Locale registry: Single source of truth for all supported site locales.
//!
//! The site ships six locales. English is the default locale and lives at the
//! URL root; every other locale is served under a `/{code}` path prefix. The
//! registry is initialized once with `OnceLock` and is immutable afterwards.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code, also the URL prefix (e.g., "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "fr_FR")
    pub og_locale: &'static str,

    /// Whether this is the default locale served without a path prefix
    /// (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,

    /// Decimal separator used when formatting numbers
    pub decimal_separator: char,

    /// Thousands grouping separator used when formatting numbers
    pub group_separator: char,

    /// Integer digits required before grouping kicks in (4 means "1234" stays ungrouped)
    pub min_grouping_digits: usize,

    /// Whether the currency symbol goes before the amount
    pub currency_prefix: bool,

    /// strftime pattern for long dates, rendered with `chrono_locale`
    pub date_pattern: &'static str,

    /// Locale used for month names
    pub chrono_locale: chrono::Locale,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations: en (default), fr, it, es, id, de.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: true,
            enabled: true,
            decimal_separator: '.',
            group_separator: ',',
            min_grouping_digits: 4,
            currency_prefix: true,
            date_pattern: "%B %-d, %Y",
            chrono_locale: chrono::Locale::en_US,
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            og_locale: "fr_FR",
            is_default: false,
            enabled: true,
            decimal_separator: ',',
            group_separator: '\u{202f}',
            min_grouping_digits: 4,
            currency_prefix: false,
            date_pattern: "%-d %B %Y",
            chrono_locale: chrono::Locale::fr_FR,
        },
        LocaleConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            og_locale: "it_IT",
            is_default: false,
            enabled: true,
            decimal_separator: ',',
            group_separator: '.',
            min_grouping_digits: 4,
            currency_prefix: false,
            date_pattern: "%-d %B %Y",
            chrono_locale: chrono::Locale::it_IT,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            og_locale: "es_ES",
            is_default: false,
            enabled: true,
            decimal_separator: ',',
            group_separator: '.',
            min_grouping_digits: 5,
            currency_prefix: false,
            date_pattern: "%-d de %B de %Y",
            chrono_locale: chrono::Locale::es_ES,
        },
        LocaleConfig {
            code: "id",
            name: "Indonesian",
            native_name: "Bahasa Indonesia",
            og_locale: "id_ID",
            is_default: false,
            enabled: true,
            decimal_separator: ',',
            group_separator: '.',
            min_grouping_digits: 4,
            currency_prefix: true,
            date_pattern: "%-d %B %Y",
            chrono_locale: chrono::Locale::id_ID,
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            og_locale: "de_DE",
            is_default: false,
            enabled: true,
            decimal_separator: ',',
            group_separator: '.',
            min_grouping_digits: 4,
            currency_prefix: false,
            date_pattern: "%-d. %B %Y",
            chrono_locale: chrono::Locale::de_DE,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get().get_by_code("en").unwrap();
        assert_eq!(config.name, "English");
        assert_eq!(config.og_locale, "en_US");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_indonesian() {
        let config = LocaleRegistry::get().get_by_code("id").unwrap();
        assert_eq!(config.native_name, "Bahasa Indonesia");
        assert_eq!(config.og_locale, "id_ID");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("pt").is_none());
        assert!(LocaleRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_list_enabled_has_six_locales_in_order() {
        let codes: Vec<_> = LocaleRegistry::get()
            .list_enabled()
            .iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(codes, vec!["en", "fr", "it", "es", "id", "de"]);
    }

    #[test]
    fn test_list_all_matches_enabled() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.list_all().len(), registry.list_enabled().len());
    }

    #[test]
    fn test_default_locale_is_english() {
        let default = LocaleRegistry::get().default_locale();
        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("de"));
        assert!(!registry.is_enabled("pt"));
    }

    #[test]
    fn test_og_locales_are_xx_xx() {
        for config in LocaleRegistry::get().list_all() {
            let (lang, region) = config.og_locale.split_once('_').unwrap();
            assert_eq!(lang, config.code);
            assert_eq!(region.len(), 2);
            assert!(region.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
