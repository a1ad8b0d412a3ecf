//! Page metadata builder.
//!
//! [`generate_seo_meta`] merges a page's [`SeoConfig`] over the site defaults
//! and produces everything the page head needs: title, description, keywords,
//! robots, Open Graph, Twitter card, canonical and hreflang alternates.

use crate::config::Config;
use crate::i18n::Locale;
use crate::seo::alternates::{locale_alternates, LanguageAlternates};
use crate::seo::titles::TitleCache;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const SITE_NAME: &str = "AISEOTurbo";
pub const TWITTER_HANDLE: &str = "@aiseoturbo";
pub const THEME_COLOR: &str = "#8B5CF6";

pub const DEFAULT_TITLE: &str = "AISEOTurbo - AI-Powered SEO Audits & Optimization Tools";
pub const DEFAULT_DESCRIPTION: &str = "Boost your website rankings with comprehensive SEO audits, competitor analysis, and AI-powered recommendations. Get actionable insights to drive organic traffic.";
pub const DEFAULT_KEYWORDS: [&str; 9] = [
    "SEO audit",
    "SEO analysis",
    "website optimization",
    "organic traffic",
    "search engine optimization",
    "competitor analysis",
    "keyword research",
    "technical SEO",
    "AI SEO tools",
];
pub const DEFAULT_OG_IMAGE: &str = "/logo.png";

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
}

/// Page-level SEO settings. Every field is optional; unset fields take the
/// site defaults.
///
/// `locale` and `path` together turn on canonical/hreflang generation. With
/// either missing the canonical is the explicit `canonical` or the site root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub canonical: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<OgType>,
    pub twitter_card: Option<TwitterCard>,
    pub no_index: Option<bool>,
    pub structured_data: Option<Value>,
    pub locale: Option<Locale>,
    pub path: Option<String>,
}

impl SeoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    pub fn with_og_image(mut self, og_image: impl Into<String>) -> Self {
        self.og_image = Some(og_image.into());
        self
    }

    pub fn with_og_type(mut self, og_type: OgType) -> Self {
        self.og_type = Some(og_type);
        self
    }

    pub fn with_no_index(mut self, no_index: bool) -> Self {
        self.no_index = Some(no_index);
        self
    }

    /// Set both the locale and the path, enabling canonical/hreflang generation.
    pub fn for_page(mut self, locale: Locale, path: impl Into<String>) -> Self {
        self.locale = Some(locale);
        self.path = Some(path.into());
        self
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: SeoConfig) -> SeoConfig {
        SeoConfig {
            title: overrides.title.or(self.title),
            description: overrides.description.or(self.description),
            keywords: overrides.keywords.or(self.keywords),
            canonical: overrides.canonical.or(self.canonical),
            og_image: overrides.og_image.or(self.og_image),
            og_type: overrides.og_type.or(self.og_type),
            twitter_card: overrides.twitter_card.or(self.twitter_card),
            no_index: overrides.no_index.or(self.no_index),
            structured_data: overrides.structured_data.or(self.structured_data),
            locale: overrides.locale.or(self.locale),
            path: overrides.path.or(self.path),
        }
    }

    fn is_no_index(&self) -> bool {
        self.no_index.unwrap_or(false)
    }
}

/// Shared inputs for metadata generation.
#[derive(Debug, Clone)]
pub struct SeoContext {
    /// Site origin without a trailing slash
    pub base_url: String,

    /// Localized title overrides
    pub titles: Arc<TitleCache>,
}

impl SeoContext {
    pub fn new(base_url: impl Into<String>, titles: Arc<TitleCache>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            titles,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.site_url.clone(),
            Arc::new(TitleCache::from_file(&config.titles_csv)),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub robots: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterMeta,
    pub alternates: Alternates,
    pub other: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub og_type: OgType,
    pub locale: String,
    pub images: Vec<OgImage>,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterMeta {
    pub card: TwitterCard,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
    pub site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
    pub canonical: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguageAlternates>,
}

/// Build page metadata from `config` merged over the site defaults.
pub fn generate_seo_meta(config: &SeoConfig, ctx: &SeoContext) -> Metadata {
    let base_url = ctx.base_url.as_str();
    let page = (config.locale, config.path.as_deref());

    let title = match page {
        (Some(locale), Some(path)) => ctx
            .titles
            .get_localized_title(path, locale)
            .map(|resolved| resolved.into_value()),
        _ => None,
    }
    .or_else(|| config.title.clone())
    .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let description = config
        .description
        .clone()
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let keywords = match &config.keywords {
        Some(keywords) => keywords.join(", "),
        None => DEFAULT_KEYWORDS.join(", "),
    };

    let page_alternates = match page {
        (Some(locale), Some(path)) => Some(locale_alternates(path, locale, base_url)),
        _ => None,
    };

    let canonical = match &page_alternates {
        Some(alternates) => alternates.canonical.clone(),
        None => config
            .canonical
            .clone()
            .unwrap_or_else(|| base_url.to_string()),
    };

    let languages = if config.is_no_index() {
        None
    } else {
        page_alternates.map(|alternates| alternates.languages)
    };

    let og_image = config.og_image.as_deref().unwrap_or(DEFAULT_OG_IMAGE);
    let og_image_url = if og_image.starts_with("http") {
        og_image.to_string()
    } else {
        format!("{}{}", base_url, og_image)
    };

    let og_locale = config
        .locale
        .unwrap_or_else(Locale::default_locale)
        .og_locale()
        .to_string();

    let robots = if config.is_no_index() {
        "noindex,nofollow"
    } else {
        "index,follow"
    };

    let other = BTreeMap::from([
        ("theme-color".to_string(), THEME_COLOR.to_string()),
        ("msapplication-TileColor".to_string(), THEME_COLOR.to_string()),
    ]);

    Metadata {
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: canonical.clone(),
            og_type: config.og_type.unwrap_or_default(),
            locale: og_locale,
            images: vec![OgImage {
                url: og_image_url.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: title.clone(),
            }],
            site_name: SITE_NAME.to_string(),
        },
        twitter: TwitterMeta {
            card: config.twitter_card.unwrap_or_default(),
            title: title.clone(),
            description: description.clone(),
            images: vec![og_image_url],
            creator: TWITTER_HANDLE.to_string(),
            site: TWITTER_HANDLE.to_string(),
        },
        alternates: Alternates {
            canonical,
            languages,
        },
        title,
        description,
        keywords,
        robots: robots.to_string(),
        other,
    }
}
