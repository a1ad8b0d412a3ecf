//! Multilingual sitemap generation.
//!
//! Every route is listed once per locale, and each `<url>` carries
//! `xhtml:link` alternates for all locales plus `x-default`:
//!
//! ```xml
//! <url>
//!   <loc>https://www.aiseoturbo.com/fr/pricing</loc>
//!   <lastmod>2026-01-01</lastmod>
//!   <changefreq>monthly</changefreq>
//!   <priority>1.0</priority>
//!   <xhtml:link rel="alternate" hreflang="en" href="https://www.aiseoturbo.com/pricing"/>
//!   ...
//! </url>
//! ```

use crate::i18n::Locale;
use crate::seo::alternates::{locale_alternates, LanguageAlternates};
use chrono::{NaiveDate, Utc};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::info;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteRoute {
    /// Path without locale prefix; empty for the home page
    pub path: &'static str,
    pub priority: f32,
    pub change_frequency: ChangeFrequency,
}

const fn route(path: &'static str, priority: f32, change_frequency: ChangeFrequency) -> SiteRoute {
    SiteRoute {
        path,
        priority,
        change_frequency,
    }
}

use ChangeFrequency::{Monthly, Weekly};

pub const SITE_ROUTES: &[SiteRoute] = &[
    route("", 1.0, Weekly),
    route("/pricing", 1.0, Monthly),
    route("/features", 1.0, Weekly),
    route("/features/seo-audit", 0.9, Weekly),
    route("/features/site-crawler", 0.9, Weekly),
    route("/features/keyword-tracking", 0.9, Weekly),
    route("/features/competitor-analysis", 0.9, Weekly),
    route("/features/ai-assistant", 0.9, Weekly),
    route("/about", 0.8, Monthly),
    route("/contact", 0.8, Monthly),
    route("/blog", 0.7, Weekly),
    route("/blog/ai-powered-seo-future", 0.6, Monthly),
    route("/blog/complete-seo-audit-checklist-2025", 0.6, Monthly),
    route("/blog/content-seo-creating-search-friendly-content", 0.6, Monthly),
    route("/blog/core-web-vitals-optimization-guide", 0.6, Monthly),
    route("/blog/local-seo-strategies-that-work", 0.6, Monthly),
    route("/blog/technical-seo-best-practices-2025", 0.6, Monthly),
    route("/case-studies", 0.7, Monthly),
    route("/case-studies/cloudsync-pro", 0.6, Monthly),
    route("/case-studies/digital-growth-agency", 0.6, Monthly),
    route("/case-studies/gearhub-pro", 0.6, Monthly),
    route("/case-studies/peak-performance", 0.6, Monthly),
    route("/case-studies/stylecraft-boutique", 0.6, Monthly),
    route("/case-studies/techflow-solutions", 0.6, Monthly),
    route("/help", 0.6, Monthly),
    route("/help/getting-started", 0.5, Monthly),
    route("/help/getting-started/quick-start", 0.5, Monthly),
    route("/help/getting-started/first-audit", 0.5, Monthly),
    route("/help/getting-started/seo-scores", 0.5, Monthly),
    route("/help/seo-tools-features", 0.5, Monthly),
    route("/help/features/seo-audit", 0.5, Monthly),
    route("/help/features/site-crawler", 0.5, Monthly),
    route("/help/features/competitor-analysis", 0.5, Monthly),
    route("/help/features/ai-assistant", 0.5, Monthly),
    route("/help/account-billing", 0.4, Monthly),
    route("/help/billing/payment-methods", 0.4, Monthly),
    route("/help/billing/upgrade-plan", 0.4, Monthly),
    route("/help/billing/invoices", 0.4, Monthly),
    route("/help/billing/cancellation", 0.4, Monthly),
    route("/help/security-privacy", 0.4, Monthly),
    route("/help/security/privacy", 0.4, Monthly),
    route("/help/security/gdpr", 0.4, Monthly),
    route("/help/security/two-factor-authentication", 0.4, Monthly),
    route("/help/security/best-practices", 0.4, Monthly),
    route("/help/troubleshooting", 0.4, Monthly),
    route("/help/troubleshooting/login-issues", 0.4, Monthly),
    route("/help/troubleshooting/audit-issues", 0.4, Monthly),
    route("/help/troubleshooting/performance", 0.4, Monthly),
    route("/help/troubleshooting/sync-issues", 0.4, Monthly),
    route("/help/api-integrations", 0.4, Monthly),
    route("/help/api/authentication", 0.4, Monthly),
    route("/help/api/webhooks", 0.4, Monthly),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: LanguageAlternates,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// One entry per (route, locale), routes in order.
    pub fn for_routes(routes: &[SiteRoute], base_url: &str, lastmod: NaiveDate) -> Self {
        let mut entries = Vec::with_capacity(routes.len() * Locale::all().len());

        for route in routes {
            for locale in Locale::all() {
                let alternates = locale_alternates(route.path, locale, base_url);
                entries.push(SitemapEntry {
                    loc: alternates.canonical,
                    lastmod,
                    change_frequency: route.change_frequency,
                    priority: route.priority,
                    alternates: alternates.languages,
                });
            }
        }

        Self { entries }
    }

    /// Sitemap of the whole site, dated today.
    pub fn for_site(base_url: &str) -> Self {
        Self::for_routes(SITE_ROUTES, base_url, Utc::now().date_naive())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024 + self.entries.len() * 1024);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!(
            "<urlset xmlns=\"{}\" xmlns:xhtml=\"{}\">\n",
            SITEMAP_NS, XHTML_NS
        ));

        for entry in &self.entries {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry.lastmod.format("%Y-%m-%d")
            ));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.change_frequency.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            for (hreflang, href) in &entry.alternates {
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                    escape_xml(hreflang),
                    escape_xml(href)
                ));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write the XML to `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_xml())?;
        info!("Wrote sitemap with {} URLs to {}", self.len(), path.display());
        Ok(())
    }
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
