//! JSON-LD structured data builders.
//!
//! Every builder starts from computed defaults for the schema type and spreads
//! the caller's fields over them, so caller data always wins.

use crate::error::Error;
use crate::i18n::Locale;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const ORGANIZATION_NAME: &str = "AISEOTurbo";

/// Supported structured data kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Website,
    Organization,
    Product,
    Article,
    Breadcrumb,
    Faq,
    Howto,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 7] = [
        SchemaKind::Website,
        SchemaKind::Organization,
        SchemaKind::Product,
        SchemaKind::Article,
        SchemaKind::Breadcrumb,
        SchemaKind::Faq,
        SchemaKind::Howto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Website => "website",
            SchemaKind::Organization => "organization",
            SchemaKind::Product => "product",
            SchemaKind::Article => "article",
            SchemaKind::Breadcrumb => "breadcrumb",
            SchemaKind::Faq => "faq",
            SchemaKind::Howto => "howto",
        }
    }

    /// schema.org `@type` emitted for this kind.
    pub fn schema_type(&self) -> &'static str {
        match self {
            SchemaKind::Website => "WebSite",
            SchemaKind::Organization => "Organization",
            SchemaKind::Product => "SoftwareApplication",
            SchemaKind::Article => "Article",
            SchemaKind::Breadcrumb => "BreadcrumbList",
            SchemaKind::Faq => "FAQPage",
            SchemaKind::Howto => "HowTo",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| Error::UnknownSchemaKind(s.to_string()))
    }
}

/// Build the JSON-LD object for `kind`.
///
/// `data` is spread over the defaults. When `locale` is given the object
/// carries an `@language` field with the locale code.
pub fn generate_structured_data(
    kind: SchemaKind,
    data: Option<Map<String, Value>>,
    locale: Option<Locale>,
    base_url: &str,
) -> Value {
    let base = base_url.trim_end_matches('/');
    let defaults = match kind {
        SchemaKind::Website => website_defaults(base),
        SchemaKind::Organization => organization_defaults(base),
        SchemaKind::Product => product_defaults(base),
        SchemaKind::Article => article_defaults(base),
        SchemaKind::Breadcrumb => json!({
            "itemListElement": [
                { "@type": "ListItem", "position": 1, "name": "Home", "item": base }
            ]
        }),
        SchemaKind::Faq => json!({ "mainEntity": [] }),
        SchemaKind::Howto => howto_defaults(),
    };

    finish(kind.schema_type(), defaults, data, locale)
}

fn finish(
    schema_type: &str,
    defaults: Value,
    data: Option<Map<String, Value>>,
    locale: Option<Locale>,
) -> Value {
    let mut object = Map::new();
    object.insert("@context".to_string(), Value::from(SCHEMA_CONTEXT));
    object.insert("@type".to_string(), Value::from(schema_type));

    if let Value::Object(defaults) = defaults {
        object.extend(defaults);
    }
    if let Some(data) = data {
        object.extend(data);
    }
    if let Some(locale) = locale {
        object.insert("@language".to_string(), Value::from(locale.code()));
    }

    Value::Object(object)
}

fn website_defaults(base: &str) -> Value {
    json!({
        "name": ORGANIZATION_NAME,
        "description": "AI-Powered SEO Audits & Optimization Tools",
        "url": base,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/search?q={{search_term_string}}", base),
            "query-input": "required name=search_term_string"
        }
    })
}

fn organization_defaults(base: &str) -> Value {
    let services = [
        "SEO Audit",
        "Site Crawler",
        "Competitor Analysis",
        "Keyword Tracking",
        "AI SEO Assistant",
    ];
    let offers: Vec<Value> = services
        .iter()
        .map(|name| {
            json!({
                "@type": "Offer",
                "itemOffered": { "@type": "Service", "name": name }
            })
        })
        .collect();

    json!({
        "name": ORGANIZATION_NAME,
        "description": "Leading provider of AI-powered SEO audit and optimization tools",
        "url": base,
        "logo": format!("{}/images/logo.webp", base),
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": "+1-555-SEO-TURBO",
            "contactType": "customer service",
            "availableLanguage": ["English", "French", "Italian", "Spanish", "Indonesian", "German"]
        },
        "sameAs": [
            "https://twitter.com/aiseoturbo",
            "https://linkedin.com/company/aiseoturbo",
            "https://github.com/aiseoturbo"
        ],
        "knowsAbout": [
            "Search Engine Optimization",
            "Technical SEO",
            "SEO Audits",
            "Keyword Research",
            "Competitor Analysis",
            "Artificial Intelligence"
        ],
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "SEO Services",
            "itemListElement": offers
        }
    })
}

fn product_defaults(base: &str) -> Value {
    json!({
        "name": "AISEOTurbo SEO Audit Tool",
        "description": "Comprehensive SEO audit and optimization platform powered by AI",
        "url": base,
        "applicationCategory": "SEO Tool",
        "operatingSystem": "Web Browser",
        "offers": {
            "@type": "Offer",
            "price": "49.00",
            "priceCurrency": "USD",
            "priceValidUntil": format!("{}-12-31", Utc::now().year()),
            "availability": "https://schema.org/InStock"
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": "4.8",
            "ratingCount": "1247",
            "bestRating": "5",
            "worstRating": "1"
        }
    })
}

fn article_defaults(base: &str) -> Value {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    json!({
        "headline": "AISEOTurbo SEO Insights",
        "author": { "@type": "Organization", "name": ORGANIZATION_NAME, "url": base },
        "publisher": {
            "@type": "Organization",
            "name": ORGANIZATION_NAME,
            "logo": { "@type": "ImageObject", "url": format!("{}/images/logo.webp", base) }
        },
        "datePublished": today,
        "dateModified": today,
        "mainEntityOfPage": { "@type": "WebPage", "@id": format!("{}/blog", base) }
    })
}

fn howto_defaults() -> Value {
    how_to_body(
        "How to Run an SEO Audit",
        "Audit a website for technical, on-page and content issues with AISEOTurbo.",
        &[
            "Enter the URL of the website you want to audit.",
            "Wait for the crawler to analyze every page.",
            "Review the issues and apply the AI recommendations.",
        ],
    )
}

fn how_to_body(name: &str, description: &str, steps: &[&str]) -> Value {
    let steps: Vec<Value> = steps
        .iter()
        .enumerate()
        .map(|(i, text)| {
            json!({
                "@type": "HowToStep",
                "position": i + 1,
                "name": format!("Step {}", i + 1),
                "text": text
            })
        })
        .collect();

    json!({ "name": name, "description": description, "step": steps })
}

/// BreadcrumbList from `(name, path)` pairs, positions starting at 1.
pub fn breadcrumb_list(items: &[(&str, &str)], base_url: &str) -> Value {
    let base = base_url.trim_end_matches('/');
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (name, path))| {
            let path = path.trim_matches('/');
            let item = if path.is_empty() {
                base.to_string()
            } else {
                format!("{}/{}", base, path)
            };
            json!({ "@type": "ListItem", "position": i + 1, "name": name, "item": item })
        })
        .collect();

    finish(
        SchemaKind::Breadcrumb.schema_type(),
        json!({ "itemListElement": elements }),
        None,
        None,
    )
}

/// FAQPage from `(question, answer)` pairs.
pub fn faq_page(entries: &[(&str, &str)]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer }
            })
        })
        .collect();

    finish(
        SchemaKind::Faq.schema_type(),
        json!({ "mainEntity": questions }),
        None,
        None,
    )
}

pub fn how_to(name: &str, description: &str, steps: &[&str]) -> Value {
    finish(
        SchemaKind::Howto.schema_type(),
        how_to_body(name, description, steps),
        None,
        None,
    )
}

/// Input for [`service_schema`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    pub name: String,
    pub description: String,
    pub provider: String,
    pub service_type: String,
    pub area_served: String,
}

/// schema.org `Service` offered by `details.provider`.
pub fn service_schema(details: &ServiceDetails, base_url: &str) -> Value {
    let base = base_url.trim_end_matches('/');
    finish(
        "Service",
        json!({
            "name": details.name,
            "description": details.description,
            "provider": { "@type": "Organization", "name": details.provider, "url": base },
            "serviceType": details.service_type,
            "areaServed": details.area_served,
            "url": base
        }),
        None,
        None,
    )
}
