//! Localized page title overrides backed by a CSV file.
//!
//! The CSV is produced by the title-optimization workflow: one row per
//! (page URL, locale) with the final title in its own column. The file is read
//! once, on first lookup, and kept for the lifetime of the cache. A missing or
//! unreadable file yields an empty cache, never an error.

use crate::i18n::{FallbackMetrics, Locale};
use crate::Resolved;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use percent_encoding::percent_decode_str;
use url::Url;

/// Path key used for the site root.
pub const HOME_PATH: &str = "home";

/// Rows with fewer fields than this are skipped.
pub const MIN_FIELDS: usize = 8;

/// page path -> locale code -> title
pub type TitleTable = HashMap<String, HashMap<String, String>>;

/// Where the CSV text comes from.
pub trait TitleSource: Send + Sync {
    /// Human-readable origin, for logs.
    fn describe(&self) -> String;

    /// CSV contents, or `None` when the source does not exist.
    fn read(&self) -> std::io::Result<Option<String>>;
}

/// CSV file on disk; relative paths resolve against the working directory.
#[derive(Debug, Clone)]
pub struct FileTitleSource {
    path: PathBuf,
}

impl FileTitleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TitleSource for FileTitleSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> std::io::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&self.path).map(Some)
    }
}

/// CSV text held in memory.
#[derive(Debug, Clone)]
pub struct InlineTitleSource(pub String);

impl TitleSource for InlineTitleSource {
    fn describe(&self) -> String {
        "<inline>".to_string()
    }

    fn read(&self) -> std::io::Result<Option<String>> {
        Ok(Some(self.0.clone()))
    }
}

/// Column positions of the fields we read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleColumns {
    pub url: usize,
    pub locale: usize,
    pub title: usize,
}

impl Default for TitleColumns {
    fn default() -> Self {
        Self {
            url: 0,
            locale: 1,
            title: 6,
        }
    }
}

impl TitleColumns {
    /// Locate columns by header name, falling back to the default positions
    /// for any column the header does not name.
    pub fn from_header(header: &StringRecord) -> Self {
        let defaults = Self::default();
        let find = |pred: &dyn Fn(&str) -> bool| {
            header
                .iter()
                .position(|name| pred(&name.trim().to_ascii_lowercase()))
        };

        let url = find(&|n| n == "url" || n == "page_url" || n == "page url");
        let locale = find(&|n| n == "locale" || n == "lang" || n == "language");
        let title = find(&|n| n.contains("final") && n.contains("title"));

        if title.is_none() {
            warn!(
                "Title CSV header has no final title column, using column {}",
                defaults.title
            );
        }

        Self {
            url: url.unwrap_or(defaults.url),
            locale: locale.unwrap_or(defaults.locale),
            title: title.unwrap_or(defaults.title),
        }
    }
}

/// Lazily loaded, process-lifetime title table.
pub struct TitleCache {
    source: Box<dyn TitleSource>,
    table: OnceLock<TitleTable>,
}

impl TitleCache {
    pub fn new(source: impl TitleSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            table: OnceLock::new(),
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileTitleSource::new(path))
    }

    /// Cache with no overrides and no backing source.
    pub fn empty() -> Self {
        Self {
            source: Box::new(InlineTitleSource(String::new())),
            table: OnceLock::from(TitleTable::new()),
        }
    }

    /// Load the table if this is the first access, then return it.
    pub fn ensure_loaded(&self) -> &TitleTable {
        self.table.get_or_init(|| load(self.source.as_ref()))
    }

    /// Number of distinct page paths.
    pub fn len(&self) -> usize {
        self.ensure_loaded().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ensure_loaded().is_empty()
    }

    /// Title for `path` in `locale`, falling back to the English row.
    ///
    /// `path` may be given with or without slashes; the root is `""`, `"/"`
    /// or `"home"`.
    pub fn get_localized_title(&self, path: &str, locale: Locale) -> Option<Resolved<String>> {
        let metrics = FallbackMetrics::global();
        let key = lookup_key(path);

        let Some(by_locale) = self.ensure_loaded().get(key) else {
            metrics.record_title_miss();
            return None;
        };

        if let Some(title) = by_locale.get(locale.code()) {
            metrics.record_title_hit();
            return Some(Resolved::direct(title.clone()));
        }

        match by_locale.get(Locale::default_locale().code()) {
            Some(title) => {
                metrics.record_title_fallback();
                Some(Resolved::fallback(title.clone()))
            }
            None => {
                metrics.record_title_miss();
                None
            }
        }
    }
}

impl std::fmt::Debug for TitleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleCache")
            .field("source", &self.source.describe())
            .field("loaded", &self.table.get().is_some())
            .finish()
    }
}

fn load(source: &dyn TitleSource) -> TitleTable {
    match source.read() {
        Ok(Some(content)) => match parse_titles(&content) {
            Ok(table) => {
                info!(
                    "Loaded localized titles for {} pages from {}",
                    table.len(),
                    source.describe()
                );
                table
            }
            Err(e) => {
                warn!("Failed to parse title CSV {}: {}", source.describe(), e);
                TitleTable::new()
            }
        },
        Ok(None) => {
            warn!(
                "Title CSV not found at {}, using configured titles",
                source.describe()
            );
            TitleTable::new()
        }
        Err(e) => {
            warn!("Failed to read title CSV {}: {}", source.describe(), e);
            TitleTable::new()
        }
    }
}

/// Parse CSV text into a title table. The first row is the header.
pub fn parse_titles(content: &str) -> crate::Result<TitleTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let columns = TitleColumns::from_header(reader.headers()?);
    let mut table = TitleTable::new();

    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping unreadable title row {}: {}", line + 2, e);
                continue;
            }
        };
        if record.len() < MIN_FIELDS {
            debug!("Skipping short title row {} ({} fields)", line + 2, record.len());
            continue;
        }

        let (Some(url), Some(locale), Some(title)) = (
            record.get(columns.url),
            record.get(columns.locale),
            record.get(columns.title),
        ) else {
            continue;
        };
        if url.is_empty() || locale.is_empty() || title.is_empty() {
            continue;
        }

        table
            .entry(page_path_from_url(url))
            .or_default()
            .insert(locale.to_string(), title.to_string());
    }

    Ok(table)
}

/// Derive the lookup key from a full page URL.
///
/// `https://www.aiseoturbo.com/fr/pricing` -> `pricing`,
/// `https://www.aiseoturbo.com/fr` -> `home`.
pub fn page_path_from_url(raw: &str) -> String {
    let raw = raw.trim();
    let path = match Url::parse(raw) {
        Ok(url) => percent_decode_str(url.path())
            .decode_utf8_lossy()
            .into_owned(),
        Err(_) => raw.to_string(),
    };

    let trimmed = path.trim_matches('/');
    let stripped = match trimmed.split_once('/') {
        Some((first, rest)) if Locale::from_code(first).is_ok() => rest,
        None if Locale::from_code(trimmed).is_ok() => "",
        _ => trimmed,
    };

    let stripped = stripped.trim_matches('/');
    if stripped.is_empty() {
        HOME_PATH.to_string()
    } else {
        stripped.to_string()
    }
}

fn lookup_key(path: &str) -> &str {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        HOME_PATH
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "url,locale,page_type,original_title,translated_title,length,final_title,status";

    fn csv(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    fn cache(rows: &[&str]) -> TitleCache {
        TitleCache::new(InlineTitleSource(csv(rows)))
    }

    // ==================== Path Derivation Tests ====================

    #[test]
    fn test_page_path_from_url_home() {
        assert_eq!(page_path_from_url("https://www.aiseoturbo.com"), "home");
        assert_eq!(page_path_from_url("https://www.aiseoturbo.com/"), "home");
        assert_eq!(page_path_from_url("https://www.aiseoturbo.com/fr"), "home");
        assert_eq!(page_path_from_url("https://www.aiseoturbo.com/de/"), "home");
    }

    #[test]
    fn test_page_path_from_url_strips_locale_prefix() {
        assert_eq!(
            page_path_from_url("https://www.aiseoturbo.com/fr/features/seo-audit"),
            "features/seo-audit"
        );
        assert_eq!(
            page_path_from_url("https://www.aiseoturbo.com/pricing"),
            "pricing"
        );
    }

    #[test]
    fn test_page_path_keeps_non_locale_first_segment() {
        assert_eq!(
            page_path_from_url("https://www.aiseoturbo.com/identity/page"),
            "identity/page"
        );
    }

    #[test]
    fn test_page_path_keeps_non_ascii_slug() {
        assert_eq!(
            page_path_from_url("https://www.aiseoturbo.com/fr/fonctionnalités"),
            "fonctionnalités"
        );
        assert_eq!(
            page_path_from_url("https://www.aiseoturbo.com/fr/fonctionnalit%C3%A9s"),
            "fonctionnalités"
        );
    }

    #[test]
    fn test_non_ascii_slug_title_lookup() {
        let cache = TitleCache::new(InlineTitleSource(format!(
            "{}\nhttps://www.aiseoturbo.com/fr/fonctionnalités,fr,page,a,b,1,Fonctionnalités SEO,ok\n",
            HEADER
        )));

        let title = cache
            .get_localized_title("/fonctionnalités", Locale::FR)
            .unwrap();
        assert!(!title.used_fallback);
        assert_eq!(title.value, "Fonctionnalités SEO");
    }

    #[test]
    fn test_page_path_from_relative_input() {
        assert_eq!(page_path_from_url("/it/blog"), "blog");
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_quoted_fields() {
        let table = parse_titles(&csv(&[
            r#"https://www.aiseoturbo.com/fr,fr,home,"Audit SEO, IA","Audit ""IA""",40,"Titre Français, Audit",ok"#,
        ]))
        .unwrap();

        assert_eq!(table["home"]["fr"], "Titre Français, Audit");
    }

    #[test]
    fn test_parse_skips_short_rows() {
        let table = parse_titles(&csv(&[
            "https://www.aiseoturbo.com/about,en,page,a,b,1,About Us",
            "https://www.aiseoturbo.com/pricing,en,page,a,b,1,Pricing Plans,ok",
        ]))
        .unwrap();

        assert!(!table.contains_key("about"));
        assert_eq!(table["pricing"]["en"], "Pricing Plans");
    }

    #[test]
    fn test_parse_skips_empty_title() {
        let table = parse_titles(&csv(&[
            "https://www.aiseoturbo.com/blog,en,page,a,b,1,,ok",
        ]))
        .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_columns_located_by_header() {
        let content = "final_title,locale,url,a,b,c,d,e\n\
                       Blog Titel,de,https://www.aiseoturbo.com/de/blog,1,2,3,4,5";
        let table = parse_titles(content).unwrap();
        assert_eq!(table["blog"]["de"], "Blog Titel");
    }

    #[test]
    fn test_columns_default_without_named_header() {
        let header = StringRecord::from(vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!(TitleColumns::from_header(&header), TitleColumns::default());
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_direct() {
        let cache = cache(&[
            r#"https://www.aiseoturbo.com/fr,fr,home,x,y,1,"Titre Français",ok"#,
            "https://www.aiseoturbo.com,en,home,x,y,1,English Home,ok",
        ]);

        let resolved = cache.get_localized_title("home", Locale::FR).unwrap();
        assert_eq!(resolved.value, "Titre Français");
        assert!(!resolved.used_fallback);
    }

    #[test]
    fn test_lookup_falls_back_to_english() {
        let cache = cache(&["https://www.aiseoturbo.com,en,home,x,y,1,English Home,ok"]);

        let resolved = cache.get_localized_title("", Locale::IT).unwrap();
        assert_eq!(resolved.value, "English Home");
        assert!(resolved.used_fallback);
    }

    #[test]
    fn test_lookup_unknown_path() {
        let cache = cache(&["https://www.aiseoturbo.com,en,home,x,y,1,English Home,ok"]);
        assert!(cache.get_localized_title("careers", Locale::EN).is_none());
    }

    #[test]
    fn test_lookup_no_english_row() {
        let cache = cache(&["https://www.aiseoturbo.com/es/blog,es,page,x,y,1,Blog SEO,ok"]);
        assert!(cache.get_localized_title("/blog/", Locale::DE).is_none());
        assert_eq!(
            cache.get_localized_title("/blog/", Locale::ES).unwrap().value,
            "Blog SEO"
        );
    }

    // ==================== Source Tests ====================

    #[test]
    fn test_missing_file_yields_empty_cache() {
        let cache = TitleCache::from_file("/definitely/not/here/titles.csv");
        assert!(cache.is_empty());
        assert!(cache.get_localized_title("home", Locale::EN).is_none());
    }

    #[test]
    fn test_file_source_loads_once() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "https://www.aiseoturbo.com/pricing,en,page,a,b,1,Pricing,ok").unwrap();

        let cache = TitleCache::from_file(file.path());
        assert_eq!(cache.len(), 1);

        // Later edits are not picked up: the table lives for the cache's lifetime
        writeln!(file, "https://www.aiseoturbo.com/about,en,page,a,b,1,About,ok").unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_read_error_yields_empty_cache() {
        struct Failing;
        impl TitleSource for Failing {
            fn describe(&self) -> String {
                "failing".to_string()
            }
            fn read(&self) -> std::io::Result<Option<String>> {
                Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
            }
        }

        let cache = TitleCache::new(Failing);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_empty_cache() {
        let cache = TitleCache::empty();
        assert_eq!(cache.len(), 0);
        assert!(format!("{:?}", cache).contains("loaded: true"));
    }
}
