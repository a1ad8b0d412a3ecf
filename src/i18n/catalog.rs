//! Server-side message catalog.
//!
//! Message trees for every locale are embedded at compile time from
//! `messages/{code}.json`. Keys are dotted paths into the tree
//! (`errors.quota_exceeded`); leaves are templates with `{name}` placeholders.
//! A locale whose tree is missing or does not parse resolves through English.

use crate::i18n::Locale;
use crate::Resolved;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;

const EMBEDDED: [(Locale, &str); 6] = [
    (Locale::EN, include_str!("../../messages/en.json")),
    (Locale::FR, include_str!("../../messages/fr.json")),
    (Locale::IT, include_str!("../../messages/it.json")),
    (Locale::ES, include_str!("../../messages/es.json")),
    (Locale::ID, include_str!("../../messages/id.json")),
    (Locale::DE, include_str!("../../messages/de.json")),
];

static CATALOG: OnceLock<MessageCatalog> = OnceLock::new();

/// Parsed message trees keyed by locale.
#[derive(Debug, Default)]
pub struct MessageCatalog {
    messages: HashMap<Locale, Value>,
}

impl MessageCatalog {
    /// Catalog built from the embedded message files, parsed once.
    pub fn global() -> &'static MessageCatalog {
        CATALOG.get_or_init(|| MessageCatalog::from_sources(&EMBEDDED))
    }

    /// Build a catalog from raw JSON documents.
    ///
    /// Documents that fail to parse are logged and left out; lookups for that
    /// locale then go straight to English.
    pub fn from_sources(sources: &[(Locale, &str)]) -> Self {
        let mut messages = HashMap::with_capacity(sources.len());
        for (locale, raw) in sources {
            match serde_json::from_str::<Value>(raw) {
                Ok(tree) => {
                    messages.insert(*locale, tree);
                }
                Err(e) => warn!(
                    "Failed to load messages for locale {}, falling back to English: {}",
                    locale, e
                ),
            }
        }
        Self { messages }
    }

    /// Whether a message tree is loaded for the locale.
    pub fn has_locale(&self, locale: Locale) -> bool {
        self.messages.contains_key(&locale)
    }

    /// Raw template for `key` in exactly this locale.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let mut node = self.messages.get(&locale)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    /// Interpolated message for `key`, trying the locale first and then English.
    ///
    /// Returns `None` when neither has the key.
    pub fn translate(
        &self,
        locale: Locale,
        key: &str,
        params: &[(&str, &str)],
    ) -> Option<Resolved<String>> {
        if let Some(template) = self.lookup(locale, key) {
            return Some(Resolved::direct(interpolate(template, params)));
        }

        let default = Locale::default_locale();
        if locale != default {
            if let Some(template) = self.lookup(default, key) {
                return Some(Resolved::fallback(interpolate(template, params)));
            }
        }

        None
    }
}

/// Replace `{name}` placeholders. Unknown placeholders are left as they are.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}
