//! Translation helpers for API routes, background jobs and exports.
//!
//! None of these fail. A key missing in the requested locale resolves from
//! English, and a key missing everywhere resolves to a synthesized value. Both
//! cases are logged and flagged through [`Resolved::used_fallback`].

use crate::i18n::{FallbackMetrics, Locale, MessageCatalog};
use crate::Resolved;
use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::OnceLock;
use tracing::warn;

/// Translated audit check name and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditCheckText {
    pub name: String,
    pub description: String,
}

/// Translated notification title and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationText {
    pub title: String,
    pub message: String,
}

static WORD_START_REGEX: OnceLock<Regex> = OnceLock::new();

/// Translate an audit check id (e.g. `meta_title`) into a name and description.
pub fn translate_audit_check(
    catalog: &MessageCatalog,
    check_id: &str,
    locale: Locale,
) -> Resolved<AuditCheckText> {
    let name = catalog.translate(locale, &format!("audit.checks.{}.name", check_id), &[]);
    let description = catalog.translate(
        locale,
        &format!("audit.checks.{}.description", check_id),
        &[],
    );

    let resolved = match (name, description) {
        (Some(name), Some(description)) => Resolved {
            used_fallback: name.used_fallback || description.used_fallback,
            value: AuditCheckText {
                name: name.value,
                description: description.value,
            },
        },
        _ => {
            warn!("Translation missing for audit check: {}", check_id);
            Resolved::fallback(AuditCheckText {
                name: humanize(check_id),
                description: format!("Check for {}", check_id),
            })
        }
    };

    record(&resolved);
    resolved
}

/// Translate an error key (e.g. `quota_exceeded`), interpolating `details`.
pub fn translate_error(
    catalog: &MessageCatalog,
    error_key: &str,
    locale: Locale,
    details: &[(&str, &str)],
) -> Resolved<String> {
    let resolved = catalog
        .translate(locale, &format!("errors.{}", error_key), details)
        .unwrap_or_else(|| {
            warn!("Translation missing for error: {}", error_key);
            Resolved::fallback(format!("Error: {}", error_key))
        });

    record(&resolved);
    resolved
}

/// Translate a notification type (e.g. `audit_complete`), interpolating `data`.
pub fn translate_notification(
    catalog: &MessageCatalog,
    notification_type: &str,
    locale: Locale,
    data: &[(&str, &str)],
) -> Resolved<NotificationText> {
    let title = catalog.translate(
        locale,
        &format!("notifications.{}.title", notification_type),
        data,
    );
    let message = catalog.translate(
        locale,
        &format!("notifications.{}.message", notification_type),
        data,
    );

    let resolved = match (title, message) {
        (Some(title), Some(message)) => Resolved {
            used_fallback: title.used_fallback || message.used_fallback,
            value: NotificationText {
                title: title.value,
                message: message.value,
            },
        },
        _ => {
            warn!("Translation missing for notification: {}", notification_type);
            Resolved::fallback(NotificationText {
                title: "Notification".to_string(),
                message: notification_type.to_string(),
            })
        }
    };

    record(&resolved);
    resolved
}

/// Build a locale-aware cache key: non-empty parts joined with `:`.
///
/// `get_locale_cache_key("audit", Locale::EN, &["example.com"])` gives
/// `audit:en:example.com`.
pub fn get_locale_cache_key(base_key: &str, locale: Locale, params: &[&str]) -> String {
    std::iter::once(base_key)
        .chain(std::iter::once(locale.code()))
        .chain(params.iter().copied())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(":")
}

/// `meta_title` -> `Meta Title`
fn humanize(check_id: &str) -> String {
    let regex = WORD_START_REGEX.get_or_init(|| Regex::new(r"\b\w").unwrap());
    let spaced = check_id.replace('_', " ");
    regex
        .replace_all(&spaced, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

fn record<T>(resolved: &Resolved<T>) {
    let metrics = FallbackMetrics::global();
    if resolved.used_fallback {
        metrics.record_translation_fallback();
    } else {
        metrics.record_translation_hit();
    }
}

/// All 47 audit check ids that have translatable names.
pub const SEO_CHECK_IDS: [&str; 47] = [
    // Technical foundation
    "site_crawlability",
    "xml_sitemap",
    "robots_txt",
    "url_structure",
    "internal_linking",
    "canonical_tags",
    "schema_markup",
    "https_implementation",
    "redirect_chains",
    "error_404",
    // Page speed
    "core_web_vitals",
    "image_optimization",
    "css_js_optimization",
    "server_response",
    "browser_caching",
    "cdn_implementation",
    "lazy_loading",
    "font_optimization",
    "third_party_scripts",
    "database_optimization",
    // Mobile
    "mobile_first_indexing",
    "responsive_design",
    "touch_targets",
    "viewport_config",
    "mobile_speed",
    "app_store_optimization",
    "amp_implementation",
    "mobile_usability",
    // Content
    "title_tags",
    "meta_descriptions",
    "header_structure",
    "keyword_density",
    "content_length",
    "readability",
    "internal_link_strategy",
    "image_alt_text",
    "content_freshness",
    "duplicate_content",
    "content_quality",
    "structured_content",
    // Links
    "backlink_profile",
    "anchor_text_distribution",
    "domain_authority",
    "toxic_links",
    "link_velocity",
    "broken_backlinks",
    "competitor_backlinks",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static MessageCatalog {
        MessageCatalog::global()
    }

    // ==================== Audit Check Tests ====================

    #[test]
    fn test_audit_check_direct() {
        let resolved = translate_audit_check(catalog(), "title_tags", Locale::FR);
        assert!(!resolved.used_fallback);
        assert_eq!(resolved.value.name, "Balises title");
    }

    #[test]
    fn test_audit_check_english_fallback() {
        let resolved = translate_audit_check(catalog(), "core_web_vitals", Locale::IT);
        assert!(resolved.used_fallback);
        assert_eq!(resolved.value.name, "Core Web Vitals");
    }

    #[test]
    fn test_audit_check_synthesized_fallback() {
        let resolved = translate_audit_check(catalog(), "meta_title", Locale::EN);
        assert!(resolved.used_fallback);
        assert_eq!(resolved.value.name, "Meta Title");
        assert_eq!(resolved.value.description, "Check for meta_title");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("h1_tag"), "H1 Tag");
        assert_eq!(humanize("error_404"), "Error 404");
        assert_eq!(humanize("robots"), "Robots");
    }

    // ==================== Error Tests ====================

    #[test]
    fn test_error_interpolates_details() {
        let resolved = translate_error(
            catalog(),
            "invalid_url",
            Locale::ES,
            &[("url", "ejemplo")],
        );
        assert!(!resolved.used_fallback);
        assert_eq!(
            resolved.value,
            "La URL ejemplo no es válida. Incluye http:// o https://."
        );
    }

    #[test]
    fn test_error_missing_key() {
        let resolved = translate_error(catalog(), "disk_full", Locale::DE, &[]);
        assert!(resolved.used_fallback);
        assert_eq!(resolved.value, "Error: disk_full");
    }

    // ==================== Notification Tests ====================

    #[test]
    fn test_notification_direct() {
        let resolved = translate_notification(
            catalog(),
            "audit_complete",
            Locale::EN,
            &[("domain", "example.com"), ("score", "87")],
        );
        assert!(!resolved.used_fallback);
        assert_eq!(resolved.value.title, "Audit complete");
        assert_eq!(
            resolved.value.message,
            "Your audit of example.com finished with a score of 87."
        );
    }

    #[test]
    fn test_notification_missing_type() {
        let resolved = translate_notification(catalog(), "price_drop", Locale::FR, &[]);
        assert!(resolved.used_fallback);
        assert_eq!(resolved.value.title, "Notification");
        assert_eq!(resolved.value.message, "price_drop");
    }

    #[test]
    fn test_notification_english_fallback() {
        let resolved = translate_notification(catalog(), "ranking_alert", Locale::ID, &[
            ("keyword", "seo audit"),
            ("from", "12"),
            ("to", "4"),
        ]);
        assert!(resolved.used_fallback);
        assert_eq!(resolved.value.message, "seo audit moved from position 12 to 4.");
    }

    // ==================== Cache Key Tests ====================

    #[test]
    fn test_cache_key_joins_parts() {
        assert_eq!(
            get_locale_cache_key("audit", Locale::EN, &["example.com"]),
            "audit:en:example.com"
        );
    }

    #[test]
    fn test_cache_key_skips_empty_parts() {
        assert_eq!(
            get_locale_cache_key("keywords", Locale::FR, &["", "page", ""]),
            "keywords:fr:page"
        );
        assert_eq!(get_locale_cache_key("", Locale::DE, &[]), "de");
    }

    #[test]
    fn test_check_ids_are_unique() {
        let mut ids = SEO_CHECK_IDS.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 47);
    }
}
