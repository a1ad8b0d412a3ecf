//! Internationalization (i18n) module for the six site locales.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their conventions
//! - `locale`: Validated `Locale` type
//! - `headers`: Locale detection from `X-Locale` / `Accept-Language`
//! - `format`: Locale-aware number, currency and date formatting
//! - `catalog`: Embedded server-side message trees
//! - `helpers`: Audit check / error / notification translation with fallbacks, cache keys
//! - `metrics`: Fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use aiseoturbo_seo::i18n::{Locale, MessageCatalog, translate_error};
//!
//! let locale = Locale::from_code("fr")?;
//! let message = translate_error(MessageCatalog::global(), "quota_exceeded", locale, &[("limit", "50")]);
//! ```

mod catalog;
mod format;
mod headers;
mod helpers;
mod locale;
mod metrics;
mod registry;

pub use catalog::{interpolate, MessageCatalog};
pub use format::{format_currency, format_date, format_date_str, format_number};
pub use headers::{locale_from_headers, parse_accept_language, LOCALE_HEADER};
pub use helpers::{
    get_locale_cache_key, translate_audit_check, translate_error, translate_notification,
    AuditCheckText, NotificationText, SEO_CHECK_IDS,
};
pub use locale::Locale;
pub use metrics::{FallbackMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
