//! SEO metadata, structured data, sitemaps and content scoring.

pub mod alternates;
pub mod meta;
pub mod pages;
pub mod quality;
pub mod sitemap;
pub mod structured;
pub mod titles;
pub mod validate;

pub use alternates::{
    generate_alternates, generate_language_alternates, locale_alternates, localized_url,
    LanguageAlternates, LocaleAlternates, X_DEFAULT,
};
pub use meta::{generate_seo_meta, Metadata, OgType, SeoConfig, SeoContext, TwitterCard};
pub use pages::{find_preset, page_preset, PagePreset, PAGE_PRESETS};
pub use quality::{
    keyword_density, optimize_description, optimize_title, validate_description_length,
    validate_seo, validate_title_length, KeywordDensity, LengthCheck, SeoScore,
};
pub use sitemap::{ChangeFrequency, SiteRoute, Sitemap, SITE_ROUTES};
pub use structured::{
    breadcrumb_list, faq_page, generate_structured_data, how_to, service_schema, SchemaKind,
    ServiceDetails,
};
pub use titles::{page_path_from_url, FileTitleSource, InlineTitleSource, TitleCache, TitleSource};
pub use validate::{validate_structured_data, StructuredDataReport};
