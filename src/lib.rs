//! SEO metadata generation for the AISEOTurbo marketing site.
//!
//! Produces page metadata (title, description, Open Graph, Twitter, canonical
//! and hreflang alternates), JSON-LD structured data, sitemaps and SEO quality
//! scores for six locales, plus the server-side i18n helpers those need.

pub mod config;
pub mod error;
pub mod i18n;
pub mod seo;
pub mod server;

mod resolved;

pub use error::{Error, Result};
pub use resolved::Resolved;
